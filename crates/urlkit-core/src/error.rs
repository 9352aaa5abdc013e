//! Error type shared by the URL model and the combine functions.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UrlError>;

/// Error returned by parsing or combining URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The input is not a syntactically valid URL reference.
    #[error("invalid URI {input:?}: {reason}")]
    Parse { input: String, reason: &'static str },

    /// The input parsed, but lacks a component the operation needs.
    #[error("wrong URL passed: {0}")]
    InvalidArgument(String),
}

impl UrlError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        UrlError::Parse {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        UrlError::InvalidArgument(message.into())
    }

    /// True for [`UrlError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, UrlError::Parse { .. })
    }

    /// True for [`UrlError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, UrlError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_names_input() {
        let err = UrlError::parse("http://:80", "empty host");
        assert_eq!(err.to_string(), "invalid URI \"http://:80\": empty host");
        assert!(err.is_parse());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn invalid_argument_display() {
        let err = UrlError::invalid_argument("host and scheme not set");
        assert_eq!(err.to_string(), "wrong URL passed: host and scheme not set");
        assert!(err.is_invalid_argument());
    }
}
