//! Sitemap-Discover main entry point
//!
//! This is the command-line interface for the Sitemap-Discover probe.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use sitemap_discover::config::{load_config_with_hash, validate, Config};
use sitemap_discover::discovery::run_discovery;
use sitemap_discover::input::read_domains;
use sitemap_discover::output::{format_statistics, print_results};
use tracing_subscriber::EnvFilter;

/// Sitemap-Discover: find sitemaps for a list of domains
///
/// Reads domains from a CSV file, checks that each main page loads and that
/// a sitemap.xml exists, then writes the sitemaps found and the domains
/// without one to two CSV files.
#[derive(Parser, Debug)]
#[command(name = "sitemap-discover")]
#[command(version)]
#[command(about = "Discover sitemap.xml files for a list of domains", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file listing one domain per row [default: domain_source.csv]
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// CSV file receiving sitemap URLs and fallback origins [default: sitemap_extracts.csv]
    #[arg(long, value_name = "FILE")]
    extracts: Option<String>,

    /// CSV file receiving domains without a sitemap [default: sitemap_failures.csv]
    #[arg(long, value_name = "FILE")]
    failures: Option<String>,

    /// Per-request timeout in seconds [default: 5]
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved configuration and domains without probing anything
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies command-line overrides on top of a loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if let Some(extracts) = &self.extracts {
            config.output.extracts_path = extracts.clone();
        }
        if let Some(failures) = &self.failures {
            config.output.failures_path = failures.clone();
        }
        if let Some(timeout) = self.timeout {
            config.probe.timeout_secs = timeout;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (cfg, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        None => Config::default(),
    };

    cli.apply_overrides(&mut config);
    validate(&config).context("Invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&config)
    } else {
        handle_discovery(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the result listings.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_discover=info,warn"),
            1 => EnvFilter::new("sitemap_discover=debug,info"),
            2 => EnvFilter::new("sitemap_discover=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be probed
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Sitemap-Discover Dry Run ===\n");

    println!("Probe Configuration:");
    println!("  Timeout: {}s per request", config.probe.timeout_secs);
    println!("  Sitemap path: {}", config.probe.sitemap_path);
    println!("  Max redirects: {}", config.probe.max_redirects);
    println!("  User agent: {}", config.probe.user_agent);

    println!("\nFiles:");
    println!("  Input: {}", config.input.path);
    println!("  Extracts: {}", config.output.extracts_path);
    println!("  Failures: {}", config.output.failures_path);

    let domains = read_domains(Path::new(&config.input.path))
        .with_context(|| format!("Failed to read domains from {}", config.input.path))?;

    println!("\nDomains ({}):", domains.len());
    for domain in domains.iter() {
        println!("  - {}", domain);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would probe {} domains", domains.len());

    Ok(())
}

/// Handles the main discovery run
async fn handle_discovery(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Reading {} (timeout {}s, sitemap path {})",
        config.input.path,
        config.probe.timeout_secs,
        config.probe.sitemap_path
    );

    let results = run_discovery(config).await.context("Discovery failed")?;

    print_results(&results.valid, &results.failed);

    for line in format_statistics(&results.statistics()).lines() {
        tracing::info!("{}", line);
    }

    Ok(())
}
