//! Discovery module for sitemap probing
//!
//! This module contains the core discovery logic, including:
//! - HTTP fetching with a per-request timeout
//! - Classifying each domain from its main page and sitemap responses
//! - Accumulating the valid and failed entry sets
//! - Overall run coordination

mod classifier;
mod coordinator;
mod fetcher;
mod results;

pub use classifier::classify_domain;
pub use coordinator::{run_discovery, Coordinator};
pub use fetcher::{build_http_client, fetch_status, FetchResponse};
pub use results::DiscoveryResults;
