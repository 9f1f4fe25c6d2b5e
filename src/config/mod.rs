//! Configuration module for Sitemap-Discover
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, [`Config::default`] reproduces the
//! standard file names and a 5-second request timeout.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_discover::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("discover.toml")).unwrap();
//! println!("Reading domains from: {}", config.input.path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_user_agent, Config, InputConfig, OutputConfig, ProbeConfig, DEFAULT_EXTRACTS_PATH,
    DEFAULT_FAILURES_PATH, DEFAULT_INPUT_PATH, DEFAULT_MAX_REDIRECTS, DEFAULT_SITEMAP_PATH,
    DEFAULT_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
