//! Statistics generation from probe outcomes
//!
//! This module tallies how each domain was classified during a run and
//! renders the counts for the run log.

use crate::state::ProbeOutcome;

/// Discovery run statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryStatistics {
    /// Number of domains probed
    pub domains_probed: u64,

    /// Domains whose sitemap answered 200
    pub sitemaps_found: u64,

    /// Domains whose main page loaded but whose sitemap did not
    pub sitemaps_missing: u64,

    /// Domains whose main page answered with a status other than 200
    pub main_page_unavailable: u64,

    /// Domains that hit a network-level error
    pub errors: u64,
}

impl DiscoveryStatistics {
    /// Tallies a sequence of outcomes
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a ProbeOutcome>,
    {
        let mut stats = Self::default();
        for outcome in outcomes {
            stats.record(outcome);
        }
        stats
    }

    /// Adds a single outcome to the tally
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.domains_probed += 1;
        match outcome {
            ProbeOutcome::SitemapFound { .. } => self.sitemaps_found += 1,
            ProbeOutcome::SitemapMissing { .. } => self.sitemaps_missing += 1,
            ProbeOutcome::MainPageUnavailable { .. } => self.main_page_unavailable += 1,
            ProbeOutcome::Error { .. } => self.errors += 1,
        }
    }

    /// Percentage of probed domains with a sitemap
    pub fn success_rate(&self) -> f64 {
        if self.domains_probed == 0 {
            return 0.0;
        }
        (self.sitemaps_found as f64 / self.domains_probed as f64) * 100.0
    }
}

/// Formats statistics as a multi-line block
pub fn format_statistics(stats: &DiscoveryStatistics) -> String {
    format!(
        "=== Discovery Statistics ===\n\
         Domains probed: {}\n\
         Sitemaps found: {}\n\
         Sitemaps missing: {}\n\
         Main page unavailable: {}\n\
         Errors: {}\n\
         Success Rate: {:.1}% ({} / {} domains with a sitemap)\n",
        stats.domains_probed,
        stats.sitemaps_found,
        stats.sitemaps_missing,
        stats.main_page_unavailable,
        stats.errors,
        stats.success_rate(),
        stats.sitemaps_found,
        stats.domains_probed,
    )
}
