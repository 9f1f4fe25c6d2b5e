//! Sitemap-Discover: sitemap discovery for lists of domains
//!
//! This crate reads a list of domains, probes each one for a reachable main
//! page and a `sitemap.xml` resource, and partitions the results into valid
//! and failed entries written back to CSV files.

pub mod config;
pub mod discovery;
pub mod input;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Sitemap-Discover operations
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to read domains from {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write entries to {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Result type alias for Sitemap-Discover operations
pub type Result<T> = std::result::Result<T, DiscoverError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use discovery::{run_discovery, Coordinator, DiscoveryResults};
pub use state::{EntrySet, ProbeOutcome};
pub use crate::url::{origin_of, sitemap_url_for};
