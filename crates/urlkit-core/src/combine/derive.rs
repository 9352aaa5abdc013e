//! Derivations over a single URL: path part, origin, appended path.

use crate::error::{Result, UrlError};
use crate::url_model::ParsedUrl;

/// Returns the `/path?query#fragment` part of `url`.
///
/// # Examples
///
/// - `retrieve_uri("http://example.com/path?q=1#f")` → `"/path?q=1#f"`
/// - `retrieve_uri("http://example.com")` → `""`
pub fn retrieve_uri(url: &str) -> Result<String> {
    let parsed = ParsedUrl::parse(url)?.normalized();
    Ok(parsed.path_and_rest().to_string())
}

/// Returns `scheme://host[:port]` of `url`, exactly as written.
///
/// Fails with [`UrlError::InvalidArgument`] unless `url` parses and both
/// scheme and host are present.
pub fn retrieve_host(url: &str) -> Result<String> {
    ParsedUrl::parse(url)
        .ok()
        .and_then(|parsed| parsed.origin())
        .ok_or_else(|| {
            tracing::debug!(url, "no origin in url");
            UrlError::invalid_argument("host and scheme not set")
        })
}

/// Appends `path` to `url`, dropping the query and fragment of `url`.
///
/// Exactly one `/` separates the two parts. A `path` starting with `#` is
/// attached directly as a fragment. An empty `path` returns `url` untouched,
/// without parsing it.
///
/// # Examples
///
/// - `append_path("http://example.com/a?x=1", "b")` → `"http://example.com/a/b"`
/// - `append_path("http://example.com/a/", "/b/")` → `"http://example.com/a/b/"`
/// - `append_path("http://example.com/a", "#frag")` → `"http://example.com/a#frag"`
pub fn append_path(url: &str, path: &str) -> Result<String> {
    if path.is_empty() {
        return Ok(url.to_string());
    }

    let cut = ParsedUrl::parse(url)?
        .normalized()
        .without_query_and_fragment()
        .to_string();

    if path.starts_with('#') {
        return Ok(format!("{cut}{path}"));
    }
    Ok(format!(
        "{}/{}",
        cut.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}
