//! URL model: a parsed URL reference with every component optional.
//!
//! One parser serves every operation in [`crate::combine`]. A component that
//! does not appear in the input is `None`; for the path, an empty path is
//! treated as absent so callers can tell "no path" from "path given".

mod normalize;
mod parse;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, UrlError};

/// A URL or relative reference split into its components.
///
/// Values are never mutated after construction; transformations return new
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedUrl {
    pub(crate) scheme: Option<String>,
    pub(crate) user_info: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) path: Option<String>,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl ParsedUrl {
    /// Parse a URL or relative reference.
    ///
    /// # Examples
    ///
    /// - `"http://example.com:8080/a?x=1#f"` → scheme `http`, host `example.com`, port `8080`,
    ///   path `/a`, query `x=1`, fragment `f`
    /// - `"#frag"` → only fragment `frag`; path is `None`
    pub fn parse(input: &str) -> Result<Self> {
        parse::parse(input)
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Path component; `None` when the input had no path characters.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// `userinfo@host:port`, or `None` without a host.
    pub(crate) fn authority(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        let mut out = String::new();
        if let Some(user_info) = self.user_info.as_deref().filter(|u| !u.is_empty()) {
            out.push_str(user_info);
            out.push('@');
        }
        out.push_str(host);
        if let Some(port) = self.port {
            out.push(':');
            out.push_str(&port.to_string());
        }
        Some(out)
    }

    /// `scheme://host[:port]` when both scheme and host are present.
    pub fn origin(&self) -> Option<String> {
        let scheme = self.scheme.as_deref()?;
        let host = self.host.as_deref()?;
        Some(match self.port {
            Some(port) => format!("{scheme}://{host}:{port}"),
            None => format!("{scheme}://{host}"),
        })
    }

    /// Same URL without query and fragment.
    pub fn without_query_and_fragment(&self) -> Self {
        ParsedUrl {
            query: None,
            fragment: None,
            ..self.clone()
        }
    }

    /// Only path, query and fragment; scheme and authority dropped.
    pub fn path_and_rest(&self) -> Self {
        ParsedUrl {
            path: self.path.clone(),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
            ..ParsedUrl::default()
        }
    }

    /// True when both scheme and host are set.
    pub(crate) fn is_absolute(&self) -> bool {
        self.scheme.is_some() && self.host.is_some()
    }
}

impl FromStr for ParsedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self> {
        ParsedUrl::parse(s)
    }
}

/// Composes `scheme://userinfo@host:port/path?query#fragment`, leaving out
/// absent or empty parts together with their delimiters.
impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.scheme.as_deref().filter(|s| !s.is_empty());
        if let Some(scheme) = scheme {
            write!(f, "{scheme}:")?;
        }

        let authority = self.authority().filter(|a| !a.is_empty());
        if authority.is_some() || scheme == Some("file") {
            write!(f, "//{}", authority.as_deref().unwrap_or(""))?;
        }

        if let Some(path) = self.path.as_deref().filter(|p| !p.is_empty()) {
            let has_authority = authority.is_some() || scheme == Some("file");
            f.write_str(&compose_path(path, has_authority))?;
        }

        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = self.fragment.as_deref().filter(|fr| !fr.is_empty()) {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Path as written next to (or without) an authority.
///
/// Without an authority a path starting with `//` would read back as a host,
/// so it is written as `/.//...`; next to an authority that `/.` prefix is
/// dropped again and a relative path gets rooted.
fn compose_path(path: &str, has_authority: bool) -> Cow<'_, str> {
    if has_authority {
        if let Some(rest) = path.strip_prefix("/.").filter(|r| r.starts_with("//")) {
            return Cow::Borrowed(rest);
        }
        if !path.starts_with('/') {
            return Cow::Owned(format!("/{path}"));
        }
    } else if path.starts_with("//") {
        return Cow::Owned(format!("/.{path}"));
    }
    Cow::Borrowed(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_full_url() {
        let url = ParsedUrl::parse("http://user:pw@example.com:8080/a/b?x=1#top").unwrap();
        assert_eq!(url.to_string(), "http://user:pw@example.com:8080/a/b?x=1#top");
    }

    #[test]
    fn display_omits_empty_query_and_fragment() {
        let url = ParsedUrl::parse("http://example.com/a?#").unwrap();
        assert_eq!(url.query(), Some(""));
        assert_eq!(url.fragment(), Some(""));
        assert_eq!(url.to_string(), "http://example.com/a");
    }

    #[test]
    fn display_roots_relative_path_under_authority() {
        let url = ParsedUrl {
            scheme: Some("http".into()),
            host: Some("example.com".into()),
            path: Some("d".into()),
            ..ParsedUrl::default()
        };
        assert_eq!(url.to_string(), "http://example.com/d");
    }

    #[test]
    fn display_file_scheme_keeps_empty_authority() {
        let url = ParsedUrl::parse("file:///etc/hosts").unwrap();
        assert_eq!(url.host(), None);
        assert_eq!(url.to_string(), "file:///etc/hosts");
    }

    #[test]
    fn origin_requires_scheme_and_host() {
        let url = ParsedUrl::parse("https://example.com:8443/x").unwrap();
        assert_eq!(url.origin().as_deref(), Some("https://example.com:8443"));
        assert_eq!(ParsedUrl::parse("//example.com/x").unwrap().origin(), None);
        assert_eq!(ParsedUrl::parse("/x").unwrap().origin(), None);
    }

    #[test]
    fn without_query_and_fragment_keeps_authority_and_path() {
        let url = ParsedUrl::parse("http://example.com/a?x=1#f").unwrap();
        assert_eq!(url.without_query_and_fragment().to_string(), "http://example.com/a");
        // The source value is left as it was.
        assert_eq!(url.query(), Some("x=1"));
    }

    #[test]
    fn path_and_rest_drops_origin() {
        let url = ParsedUrl::parse("http://example.com:81/p?q=1#f").unwrap();
        assert_eq!(url.path_and_rest().to_string(), "/p?q=1#f");
    }

    #[test]
    fn double_slash_path_without_authority_is_dot_prefixed() {
        let url = ParsedUrl::parse("http://example.com//a/b").unwrap();
        assert_eq!(url.path(), Some("//a/b"));
        let rest = url.path_and_rest().to_string();
        assert_eq!(rest, "/.//a/b");
        // Reads back as a path, not as host `a`.
        let reparsed = ParsedUrl::parse(&rest).unwrap();
        assert_eq!(reparsed.host(), None);
        assert_eq!(reparsed.path(), Some("/.//a/b"));
    }

    #[test]
    fn dot_prefix_dropped_next_to_authority() {
        let url = ParsedUrl::parse("http://example.com/.//a/b").unwrap();
        assert_eq!(url.to_string(), "http://example.com//a/b");
        assert_eq!(
            ParsedUrl::parse("http://example.com/./a").unwrap().to_string(),
            "http://example.com/./a"
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let url: ParsedUrl = "http://example.com/a".parse().unwrap();
        assert_eq!(url, ParsedUrl::parse("http://example.com/a").unwrap());
        assert!("http://exa mple.com:x/".parse::<ParsedUrl>().is_err());
    }
}
