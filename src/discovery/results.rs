use crate::output::DiscoveryStatistics;
use crate::state::{EntrySet, ProbeOutcome};

/// Accumulated results of a discovery run
#[derive(Debug, Clone, Default)]
pub struct DiscoveryResults {
    /// Sitemap URLs and fallback origins
    pub valid: EntrySet,

    /// Domains without a confirmed sitemap
    pub failed: EntrySet,

    /// Every probed domain with its outcome, in probe order
    pub outcomes: Vec<(String, ProbeOutcome)>,
}

impl DiscoveryResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for a domain into the valid and failed sets
    ///
    /// A missing sitemap puts the origin in `valid` and the domain in
    /// `failed`. A main page that did not answer 200 touches neither set.
    pub fn record(&mut self, domain: &str, outcome: ProbeOutcome) {
        if let Some(entry) = outcome.valid_entry() {
            self.valid.insert(entry);
        }
        if outcome.marks_failed() {
            self.failed.insert(domain);
        }
        self.outcomes.push((domain.to_string(), outcome));
    }

    /// Tallies outcomes into run statistics
    pub fn statistics(&self) -> DiscoveryStatistics {
        DiscoveryStatistics::from_outcomes(self.outcomes.iter().map(|(_, outcome)| outcome))
    }
}
