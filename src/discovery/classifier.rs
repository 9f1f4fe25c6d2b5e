//! Sitemap classifier
//!
//! Probes one domain with at most two sequential requests and turns the
//! responses into a [`ProbeOutcome`].

use crate::discovery::fetcher::fetch_status;
use crate::state::ProbeOutcome;
use crate::url::{origin_of, sitemap_url_for};
use crate::UrlError;
use reqwest::Client;
use thiserror::Error;

/// Failure while probing one domain
#[derive(Debug, Error)]
enum ProbeError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] UrlError),
}

/// Classifies a domain by probing its main page and sitemap
///
/// # Classification
///
/// | Main page | Sitemap | Outcome |
/// |-----------|---------|---------|
/// | 200 | 200 | `SitemapFound` |
/// | 200 | any other status | `SitemapMissing` |
/// | any other status | not requested | `MainPageUnavailable` |
/// | transport error | - | `Error` |
/// | 200 | transport error | `Error` |
///
/// The sitemap is resolved against the main page's final URL, so redirects
/// to another host are followed before the sitemap is requested.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `domain` - The domain string exactly as read from the input
/// * `sitemap_path` - Absolute path of the sitemap, usually `/sitemap.xml`
pub async fn classify_domain(client: &Client, domain: &str, sitemap_path: &str) -> ProbeOutcome {
    match probe(client, domain, sitemap_path).await {
        Ok(outcome) => outcome,
        Err(e) => ProbeOutcome::Error {
            message: e.to_string(),
        },
    }
}

async fn probe(
    client: &Client,
    domain: &str,
    sitemap_path: &str,
) -> Result<ProbeOutcome, ProbeError> {
    let main_page = fetch_status(client, domain).await?;
    tracing::trace!(
        "{} -> {} (HTTP {})",
        domain,
        main_page.final_url,
        main_page.status.as_u16()
    );

    if !main_page.is_ok() {
        return Ok(ProbeOutcome::MainPageUnavailable {
            status_code: main_page.status.as_u16(),
        });
    }

    let sitemap_url = sitemap_url_for(&main_page.final_url, sitemap_path)?;
    let sitemap = fetch_status(client, sitemap_url.as_str()).await?;

    if sitemap.is_ok() {
        return Ok(ProbeOutcome::SitemapFound {
            sitemap_url: sitemap_url.to_string(),
        });
    }

    Ok(ProbeOutcome::SitemapMissing {
        origin: origin_of(&main_page.final_url)?,
        sitemap_url: sitemap_url.to_string(),
        status_code: sitemap.status.as_u16(),
    })
}
