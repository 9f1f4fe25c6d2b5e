//! URL handling module for Sitemap-Discover
//!
//! This module resolves sitemap locations against a page's final URL and
//! reduces URLs to their origin for fallback records.

mod origin;
mod sitemap;

pub use origin::origin_of;
pub use sitemap::sitemap_url_for;
