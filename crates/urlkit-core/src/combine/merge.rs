//! Merging a URL reference onto a base URL.

use crate::error::Result;
use crate::url_model::ParsedUrl;

/// Merges `uri` onto `base_uri`.
///
/// An absolute `uri` (scheme and host both present) is returned unchanged.
/// Otherwise the reference's path is resolved against the base path, and its
/// scheme, query and fragment replace the base ones when present. Everything
/// else comes from the base.
///
/// # Examples
///
/// - `merge_urls("http://example.com/a/b/c", "d")` → `"http://example.com/a/d"`
/// - `merge_urls("http://example.com/a/b/", "d")` → `"http://example.com/a/b/d"`
/// - `merge_urls("http://example.com/a?x=1", "b?y=2")` → `"http://example.com/b?y=2"`
pub fn merge_urls(base_uri: &str, uri: &str) -> Result<String> {
    let base = ParsedUrl::parse(base_uri)?.normalized();
    let reference = ParsedUrl::parse(uri)?;

    if reference.is_absolute() {
        tracing::trace!(uri, "absolute reference, base ignored");
        return Ok(uri.to_string());
    }

    let merged = merge(&base, &reference);
    tracing::debug!(base = base_uri, uri, merged = %merged, "merged url");
    Ok(merged.to_string())
}

/// Builds the merged value field by field from `base` and `reference`.
pub(crate) fn merge(base: &ParsedUrl, reference: &ParsedUrl) -> ParsedUrl {
    let path = match reference.path() {
        Some(path) => Some(merge_path(base.path(), path)),
        None => base.path.clone(),
    };

    ParsedUrl {
        scheme: reference.scheme.clone().or_else(|| base.scheme.clone()),
        user_info: base.user_info.clone(),
        host: base.host.clone(),
        port: base.port,
        path,
        query: reference.query.clone().or_else(|| base.query.clone()),
        fragment: reference.fragment.clone().or_else(|| base.fragment.clone()),
    }
    .normalized()
}

/// Resolves a reference path against the base path.
fn merge_path(base_path: Option<&str>, path: &str) -> String {
    let base_path = match base_path {
        Some(base_path) if !base_path.is_empty() => base_path,
        _ => return path.to_string(),
    };
    if path.is_empty() || path.starts_with('/') {
        return path.to_string();
    }

    if base_path.ends_with('/') {
        format!("{base_path}{path}")
    } else {
        format!("{}/{}", directory_of(base_path), path)
    }
}

/// Path with its final segment removed and trailing separators stripped.
///
/// Follows `dirname`: a path without any `/` has directory `.`.
fn directory_of(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => trimmed[..idx].trim_end_matches(['/', '\\']),
        None => ".",
    }
}
