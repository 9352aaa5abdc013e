//! Case folding and default-port elision.

use super::ParsedUrl;

const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("http", 80),
    ("https", 443),
    ("ftp", 21),
    ("gopher", 70),
    ("nntp", 119),
    ("news", 119),
    ("telnet", 23),
    ("tn3270", 23),
    ("imap", 143),
    ("pop", 110),
    ("ldap", 389),
];

/// Well-known port for `scheme` (case-insensitive), if any.
pub(crate) fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map(|&(_, port)| port)
}

impl ParsedUrl {
    /// Lowercase scheme and host and drop a port equal to the scheme default.
    ///
    /// Path, query and fragment are left exactly as written.
    pub fn normalized(&self) -> ParsedUrl {
        let scheme = self.scheme.as_deref().map(str::to_ascii_lowercase);
        let port = self
            .port
            .filter(|&port| scheme.as_deref().and_then(default_port) != Some(port));
        ParsedUrl {
            scheme,
            host: self.host.as_deref().map(str::to_ascii_lowercase),
            port,
            ..self.clone()
        }
    }
}
