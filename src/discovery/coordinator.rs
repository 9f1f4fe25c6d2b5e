//! Discovery coordinator - main probe orchestration logic
//!
//! This module drives a discovery run:
//! - Reading the domain list
//! - Probing each domain in turn, one at a time
//! - Recording outcomes into the valid and failed sets
//! - Writing both output files

use crate::config::{validate, Config};
use crate::discovery::classifier::classify_domain;
use crate::discovery::fetcher::build_http_client;
use crate::discovery::results::DiscoveryResults;
use crate::input::read_domains;
use crate::output::{format_error_line, write_entries};
use crate::state::{EntrySet, ProbeOutcome};
use crate::DiscoverError;
use reqwest::Client;
use std::path::Path;

/// Main discovery coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The discovery configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(DiscoverError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, DiscoverError> {
        let client = build_http_client(&config.probe).map_err(DiscoverError::HttpClient)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Probes a single domain
    pub async fn probe_domain(&self, domain: &str) -> ProbeOutcome {
        classify_domain(&self.client, domain, &self.config.probe.sitemap_path).await
    }

    /// Probes every domain sequentially and collects the results
    ///
    /// Network errors never abort the run; each one is printed as
    /// `Error processing domain <domain>: <error>` and the domain is
    /// recorded as failed.
    pub async fn run(&self, domains: &EntrySet) -> DiscoveryResults {
        tracing::info!("Probing {} domains", domains.len());

        let start_time = std::time::Instant::now();
        let mut results = DiscoveryResults::new();

        for (index, domain) in domains.iter().enumerate() {
            tracing::debug!("Probing domain {}/{}: {}", index + 1, domains.len(), domain);

            let outcome = self.probe_domain(domain).await;

            match &outcome {
                ProbeOutcome::Error { message } => {
                    println!("{}", format_error_line(domain, message));
                    tracing::warn!("{} failed: {}", domain, message);
                }
                ProbeOutcome::MainPageUnavailable { status_code } => {
                    tracing::debug!("Dropping {}: main page returned HTTP {}", domain, status_code);
                }
                other => {
                    tracing::debug!("{} [{}]: {}", domain, other.label(), other);
                }
            }

            results.record(domain, outcome);
        }

        tracing::info!(
            "Discovery completed: {} domains probed in {:?} ({} valid, {} failed)",
            domains.len(),
            start_time.elapsed(),
            results.valid.len(),
            results.failed.len()
        );

        results
    }
}

/// Runs a complete discovery operation
///
/// This is the main entry point for a run. It will:
/// 1. Read the unique domains from the configured input file
/// 2. Build the HTTP client
/// 3. Probe each domain sequentially
/// 4. Write the valid entries to the extracts file
/// 5. Write the failed entries to the failures file
///
/// An invalid configuration and input or output file errors abort the run;
/// network errors do not.
///
/// # Example
///
/// ```no_run
/// use sitemap_discover::config::Config;
/// use sitemap_discover::discovery::run_discovery;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let results = run_discovery(Config::default()).await?;
/// println!("{} sitemaps found", results.valid.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_discovery(config: Config) -> Result<DiscoveryResults, DiscoverError> {
    validate(&config)?;

    let domains = read_domains(Path::new(&config.input.path))?;
    tracing::info!("Loaded {} domains from {}", domains.len(), config.input.path);

    let coordinator = Coordinator::new(config)?;
    let results = coordinator.run(&domains).await;

    let output = &coordinator.config().output;
    write_entries(Path::new(&output.extracts_path), &results.valid)?;
    write_entries(Path::new(&output.failures_path), &results.failed)?;
    tracing::info!(
        "Wrote {} and {}",
        output.extracts_path,
        output.failures_path
    );

    Ok(results)
}
