//! Mapping of an RFC 3986 URI reference onto [`ParsedUrl`].

use fluent_uri::UriRef as Uri;

use super::ParsedUrl;
use crate::error::{Result, UrlError};

pub(super) fn parse(input: &str) -> Result<ParsedUrl> {
    let uri = Uri::parse(input).map_err(|_| UrlError::parse(input, "not a URI reference"))?;

    let scheme = uri.scheme().map(|s| s.as_str().to_string());
    let (user_info, host, port) = match uri.authority() {
        Some(authority) => {
            let port = match authority.port().filter(|p| !p.is_empty()) {
                Some(p) => Some(
                    p.as_str().parse::<u16>()
                        .map_err(|_| UrlError::parse(input, "port out of range"))?,
                ),
                None => None,
            };
            let host = authority.host();
            if host.is_empty() {
                // `file:///path` is the one form allowed an empty host.
                let is_file = scheme.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("file"));
                if !is_file || authority.userinfo().is_some() || port.is_some() {
                    return Err(UrlError::parse(input, "empty host"));
                }
                (None, None, None)
            } else {
                (
                    authority.userinfo().map(|u| u.as_str().to_string()),
                    Some(host.to_string()),
                    port,
                )
            }
        }
        None => (None, None, None),
    };

    let path = uri.path().as_str();
    Ok(ParsedUrl {
        scheme,
        user_info,
        host,
        port,
        path: Some(path).filter(|p| !p.is_empty()).map(str::to_string),
        query: uri.query().map(|q| q.as_str().to_string()),
        fragment: uri.fragment().map(|f| f.as_str().to_string()),
    })
}
