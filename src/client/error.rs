//! Request gateway error types.
//!
//! This module defines the error taxonomy for API calls. Network failures and
//! non-success statuses share one variant so callers have a single "the
//! request did not succeed" case to match on, with the status code present
//! only when a response actually arrived.

use std::fmt;

/// Errors that can occur during an API call.
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure or non-success HTTP status.
    ///
    /// `status` is `None` when the request never produced a response
    /// (connection refused, DNS failure, timeout).
    RequestFailed {
        /// The fully resolved request URL.
        url: String,
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Diagnostic detail from the transport or the status line.
        detail: String,
    },

    /// The response had a success status but its body was not the expected
    /// `{data, ...}` envelope.
    ///
    /// Raised for unparseable bodies and for envelopes missing the `data`
    /// field, so callers never see a partially-typed value.
    MalformedResponse {
        /// The fully resolved request URL.
        url: String,
        /// What went wrong while decoding the body.
        detail: String,
    },

    /// The path and base URL could not be combined into a valid URL.
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    BuildError(String),
}

impl ApiError {
    /// Returns the request URL this error is about, when one was resolved.
    pub fn url(&self) -> Option<&str> {
        match self {
            ApiError::RequestFailed { url, .. } | ApiError::MalformedResponse { url, .. } => {
                Some(url)
            }
            ApiError::InvalidUrl(_) | ApiError::BuildError(_) => None,
        }
    }

    /// Returns the HTTP status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed {
                url,
                status: Some(code),
                ..
            } => {
                write!(f, "Request to {} failed with status {}", url, code)
            }
            ApiError::RequestFailed {
                url,
                status: None,
                detail,
            } => {
                write!(f, "Request to {} failed: {}", url, detail)
            }
            ApiError::MalformedResponse { url, detail } => {
                write!(f, "Malformed response from {}: {}", url, detail)
            }
            ApiError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            ApiError::BuildError(msg) => write!(f, "Client build error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Convert reqwest errors to ApiError.
///
/// Maps transport-level failures to `RequestFailed`, keeping whatever URL
/// and status information reqwest managed to resolve.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return ApiError::BuildError(err.to_string());
        }
        ApiError::RequestFailed {
            url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }
}

/// Convert URL parsing errors to ApiError.
impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display_with_status() {
        let err = ApiError::RequestFailed {
            url: "http://localhost:8000/api/articles/".to_string(),
            status: Some(404),
            detail: "Not Found".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Request to http://localhost:8000/api/articles/ failed with status 404"
        );
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_request_failed_display_without_status() {
        let err = ApiError::RequestFailed {
            url: "http://localhost:8000/api/articles/".to_string(),
            status: None,
            detail: "connection refused".to_string(),
        };
        assert!(format!("{}", err).contains("connection refused"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_malformed_response_display() {
        let err = ApiError::MalformedResponse {
            url: "http://localhost:8000/api/articles/".to_string(),
            detail: "envelope missing data field".to_string(),
        };
        assert!(format!("{}", err).contains("Malformed response"));
        assert_eq!(err.url(), Some("http://localhost:8000/api/articles/"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: &dyn std::error::Error = &ApiError::InvalidUrl("not a url".to_string());
        assert_eq!(format!("{}", err), "Invalid URL: not a url");
    }
}
