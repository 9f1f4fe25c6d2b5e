use serde::Deserialize;

/// Default location of the domain list
pub const DEFAULT_INPUT_PATH: &str = "domain_source.csv";

/// Default location of the valid entries output
pub const DEFAULT_EXTRACTS_PATH: &str = "sitemap_extracts.csv";

/// Default location of the failed entries output
pub const DEFAULT_FAILURES_PATH: &str = "sitemap_failures.csv";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default path probed on each resolved base URL
pub const DEFAULT_SITEMAP_PATH: &str = "/sitemap.xml";

/// Default redirect hop limit
pub const DEFAULT_MAX_REDIRECTS: usize = 30;

/// Default User-Agent header: `sitemap-discover/<version>`
pub fn default_user_agent() -> String {
    format!("sitemap-discover/{}", env!("CARGO_PKG_VERSION"))
}

/// Main configuration structure for Sitemap-Discover
///
/// Every section is optional; a missing section or key falls back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub probe: ProbeConfig,
}

/// Input file configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the CSV file whose first column holds the domains
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_INPUT_PATH.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV file receiving valid entries
    #[serde(rename = "extracts-path")]
    pub extracts_path: String,

    /// Path to the CSV file receiving failed entries
    #[serde(rename = "failures-path")]
    pub failures_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extracts_path: DEFAULT_EXTRACTS_PATH.to_string(),
            failures_path: DEFAULT_FAILURES_PATH.to_string(),
        }
    }
}

/// HTTP probe configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Timeout applied to each request independently (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Absolute path joined onto the resolved base URL
    #[serde(rename = "sitemap-path")]
    pub sitemap_path: String,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            sitemap_path: DEFAULT_SITEMAP_PATH.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: default_user_agent(),
        }
    }
}
