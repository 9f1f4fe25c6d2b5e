use crate::{UrlError, UrlResult};
use url::Url;

/// Reduces a URL to its origin: scheme, userinfo, host and port
///
/// Path, query and fragment are dropped and no trailing slash is emitted,
/// so `https://example.com/about?x=1#top` becomes `https://example.com`.
/// The port is kept only when it is not the scheme's default.
///
/// # Arguments
///
/// * `url` - The URL to reduce
///
/// # Returns
///
/// * `Ok(String)` - The origin string
/// * `Err(UrlError)` - The URL has no host (e.g. `mailto:` or `data:` URLs)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_discover::url::origin_of;
///
/// let url = Url::parse("https://example.com/page?q=1#frag").unwrap();
/// assert_eq!(origin_of(&url).unwrap(), "https://example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(origin_of(&url).unwrap(), "http://127.0.0.1:8080");
/// ```
pub fn origin_of(url: &Url) -> UrlResult<String> {
    let host = url
        .host_str()
        .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;

    let mut origin = format!("{}://", url.scheme());

    if !url.username().is_empty() || url.password().is_some() {
        origin.push_str(url.username());
        if let Some(password) = url.password() {
            origin.push(':');
            origin.push_str(password);
        }
        origin.push('@');
    }

    origin.push_str(host);

    if let Some(port) = url.port() {
        origin.push_str(&format!(":{}", port));
    }

    Ok(origin)
}
