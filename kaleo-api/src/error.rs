//! API error type and the error-body message contract.

use serde::Deserialize;
use thiserror::Error;

use kaleo_utils::pagination::FetchError;

/// Structured error body the service sends on failures: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Errors from one API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure; no usable response was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response, with the message extracted per the error-body
    /// contract.
    #[error("{message}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Extracted or fallback message.
        message: String,
    },

    /// A 2xx response whose body does not match the expected shape.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an HTTP error from a non-success status and its raw body.
    ///
    /// When the body is the service's structured `{"error"}` object, that
    /// message is surfaced verbatim; anything else falls back to a generic
    /// message carrying the status and the raw body.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) => format!(
                "Request failed with status {status}: {}",
                if body.is_empty() { "No response body" } else { body },
            ),
        };

        ApiError::Http { status, message }
    }
}

impl From<ApiError> for FetchError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(source) => FetchError::Network(source.to_string()),
            ApiError::Http { status, message } => FetchError::Http { status, message },
            ApiError::Parse(source) => FetchError::Parse(source.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use kaleo_utils::pagination::FetchErrorKind;

    use super::*;

    #[test]
    fn structured_error_body_wins() {
        let error = ApiError::from_error_body(500, r#"{"error":"boom"}"#);
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn unstructured_body_falls_back_to_generic_message() {
        let error = ApiError::from_error_body(502, "Bad Gateway");
        assert_eq!(
            error.to_string(),
            "Request failed with status 502: Bad Gateway",
        );
    }

    #[test]
    fn empty_body_reports_no_response_body() {
        let error = ApiError::from_error_body(404, "");
        assert_eq!(
            error.to_string(),
            "Request failed with status 404: No response body",
        );
    }

    #[test]
    fn json_body_without_error_field_is_not_structured() {
        let error = ApiError::from_error_body(500, r#"{"detail":"oops"}"#);
        assert_eq!(
            error.to_string(),
            r#"Request failed with status 500: {"detail":"oops"}"#,
        );
    }

    #[test]
    fn converts_into_the_controller_error_taxonomy() {
        let fetch: FetchError = ApiError::from_error_body(500, r#"{"error":"boom"}"#).into();
        assert_eq!(fetch.kind(), FetchErrorKind::Http);
        assert_eq!(fetch.status(), Some(500));
        assert_eq!(fetch.to_string(), "boom");
    }
}
