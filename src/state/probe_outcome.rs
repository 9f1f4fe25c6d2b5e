/// Probe outcome definitions for classifying domains
///
/// This module defines every result a single domain probe can produce.
use std::fmt;

/// Represents how a domain was classified after probing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    // ===== Valid Outcomes =====
    /// Main page returned 200 and the sitemap returned 200
    SitemapFound {
        /// Sitemap URL resolved against the main page's final URL
        sitemap_url: String,
    },

    /// Main page returned 200 but the sitemap did not
    ///
    /// The origin is recorded as valid and the domain as failed.
    SitemapMissing {
        /// Origin of the main page's final URL
        origin: String,
        /// Sitemap URL that was tried
        sitemap_url: String,
        /// Status returned for the sitemap
        status_code: u16,
    },

    // ===== Dropped Outcomes =====
    /// Main page answered with a status other than 200
    ///
    /// The domain is recorded in neither output.
    MainPageUnavailable {
        /// Status returned for the main page
        status_code: u16,
    },

    // ===== Error Outcomes =====
    /// A request failed at the network level (timeout, DNS, connection,
    /// invalid URL, redirect loop)
    Error {
        /// Error description
        message: String,
    },
}

impl ProbeOutcome {
    /// Returns the entry this outcome contributes to the valid set, if any
    pub fn valid_entry(&self) -> Option<&str> {
        match self {
            Self::SitemapFound { sitemap_url } => Some(sitemap_url),
            Self::SitemapMissing { origin, .. } => Some(origin),
            Self::MainPageUnavailable { .. } | Self::Error { .. } => None,
        }
    }

    /// Returns true if the domain itself belongs in the failed set
    pub fn marks_failed(&self) -> bool {
        matches!(self, Self::SitemapMissing { .. } | Self::Error { .. })
    }

    /// Returns true if the domain is left out of both outputs
    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::MainPageUnavailable { .. })
    }

    /// Returns true if a network-level error occurred
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Short machine-readable label used in per-domain debug logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::SitemapFound { .. } => "sitemap_found",
            Self::SitemapMissing { .. } => "sitemap_missing",
            Self::MainPageUnavailable { .. } => "main_page_unavailable",
            Self::Error { .. } => "error",
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SitemapFound { sitemap_url } => write!(f, "sitemap found at {}", sitemap_url),
            Self::SitemapMissing {
                sitemap_url,
                status_code,
                ..
            } => write!(f, "no sitemap at {} (HTTP {})", sitemap_url, status_code),
            Self::MainPageUnavailable { status_code } => {
                write!(f, "main page returned HTTP {}", status_code)
            }
            Self::Error { message } => write!(f, "error: {}", message),
        }
    }
}
