//! HTTP fetcher implementation
//!
//! This module handles the HTTP requests made while probing a domain:
//! - Building the HTTP client with the configured timeout, redirect limit
//!   and user agent
//! - GET requests that report the final URL and status code

use crate::config::ProbeConfig;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Result of a completed request
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Final URL after redirects
    pub final_url: Url,
    /// HTTP status code of the final response
    pub status: StatusCode,
}

impl FetchResponse {
    /// Returns true only for HTTP 200; other 2xx codes do not count
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed automatically up to `max_redirects` hops, so the
/// response URL is the final location. The timeout bounds each request
/// independently.
///
/// # Arguments
///
/// * `config` - The probe configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sitemap_discover::config::ProbeConfig;
/// use sitemap_discover::discovery::build_http_client;
///
/// let client = build_http_client(&ProbeConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ProbeConfig) -> Result<Client, reqwest::Error> {
    let redirect = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Sends a GET request and reports where it ended up
///
/// The body is downloaded and discarded, so a truncated or stalled body
/// fails the fetch just like the request itself would. Any status is a
/// successful fetch; only transport failures (timeout, DNS, connection,
/// TLS, invalid URL, redirect limit, broken body) are errors.
pub async fn fetch_status(client: &Client, url: &str) -> Result<FetchResponse, reqwest::Error> {
    let response = client.get(url).send().await?;

    let final_url = response.url().clone();
    let status = response.status();
    let body = response.bytes().await?;
    tracing::trace!("{} returned {} ({} bytes)", final_url, status, body.len());

    Ok(FetchResponse { final_url, status })
}
