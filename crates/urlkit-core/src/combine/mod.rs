//! URL combination helpers used when building request URLs.
//!
//! All functions are pure: they parse their inputs with
//! [`crate::url_model::ParsedUrl`], build new values, and return strings.

mod derive;
mod merge;

pub use derive::{append_path, retrieve_host, retrieve_uri};
pub use merge::merge_urls;

/// Appends each of `segments` to `base` in turn with [`append_path`].
///
/// # Examples
///
/// - `join_paths("http://example.com/api", ["v1", "/users/"])` → `"http://example.com/api/v1/users/"`
pub fn join_paths<I, S>(base: &str, segments: I) -> crate::error::Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .try_fold(base.to_string(), |url, segment| {
            append_path(&url, segment.as_ref())
        })
}
