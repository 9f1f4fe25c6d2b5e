use crate::UrlResult;
use url::Url;

/// Resolves the sitemap location against a base URL
///
/// `sitemap_path` is absolute, so it replaces the base's whole path and
/// drops its query and fragment. The base should be the final URL reached
/// after redirects.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_discover::url::sitemap_url_for;
///
/// let base = Url::parse("https://example.com/blog/post?id=3").unwrap();
/// let sitemap = sitemap_url_for(&base, "/sitemap.xml").unwrap();
/// assert_eq!(sitemap.as_str(), "https://example.com/sitemap.xml");
/// ```
pub fn sitemap_url_for(base: &Url, sitemap_path: &str) -> UrlResult<Url> {
    Ok(base.join(sitemap_path)?)
}
