//! Error taxonomy for paginated fetches.

use thiserror::Error;

/// Classification of a failed page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport-level failure; no response was received.
    Network,
    /// Non-2xx response from the provider.
    Http,
    /// Response body did not conform to the expected envelope shape.
    Parse,
}

/// A failed page fetch, as surfaced to the consuming view.
///
/// Carries a ready-to-render message so screens never need to know the
/// transport that produced the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure; no response was received.
    #[error("{0}")]
    Network(String),
    /// Non-2xx response, with the message extracted per the error-body
    /// contract.
    #[error("{message}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the error body, or the generic fallback.
        message: String,
    },
    /// Response body did not conform to the expected envelope shape.
    #[error("{0}")]
    Parse(String),
}

impl FetchError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Http { .. } => FetchErrorKind::Http,
            FetchError::Parse(_) => FetchErrorKind::Parse,
        }
    }

    /// HTTP status code, for HTTP errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let error = FetchError::Http {
            status: 500,
            message: "boom".to_owned(),
        };
        assert_eq!(error.to_string(), "boom");
        assert_eq!(error.kind(), FetchErrorKind::Http);
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn non_http_errors_have_no_status() {
        assert_eq!(FetchError::Parse("bad envelope".to_owned()).status(), None);
    }
}
