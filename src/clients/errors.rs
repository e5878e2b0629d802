//! HTTP-specific error types for the Contentstack Management SDK.
//!
//! - [`ApiError`]: the remote service answered with status `>= 400`
//! - [`TransportError`]: timeout, connection failure or a malformed JSON body
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type encompassing all of the above
//!
//! Whether an `ApiError` or `TransportError` reaches the caller at all is
//! decided by the client's [`RetryPolicy`](crate::RetryPolicy).
//!
//! # Example
//!
//! ```rust,ignore
//! use contentstack_management::clients::HttpError;
//!
//! match client.get("stacks", None, None).await {
//!     Ok(Some(response)) => println!("{}", response.json()),
//!     Ok(None) => println!("gave up after retries"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Transport(e)) => println!("transport error: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("invalid request: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a status code of 400 or above.
///
/// `message` holds the raw response body text. `error_code` and
/// `error_message` are lifted from the body when it is a Contentstack error
/// document (`{"error_code": 105, "error_message": "..."}`).
///
/// # Example
///
/// ```rust
/// use contentstack_management::clients::ApiError;
///
/// let error = ApiError::from_body(422, r#"{"error_code":105,"error_message":"Bad"}"#);
/// assert_eq!(error.error_code, Some(105));
/// assert_eq!(error.error_message.as_deref(), Some("Bad"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API request failed with status {code}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body text.
    pub message: String,
    /// Contentstack error code from the body, if present.
    pub error_code: Option<i64>,
    /// Contentstack error message from the body, if present.
    pub error_message: Option<String>,
}

impl ApiError {
    /// Builds an error from a status code and raw body text.
    #[must_use]
    pub fn from_body(code: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let error_code = parsed
            .as_ref()
            .and_then(|v| v.get("error_code"))
            .and_then(serde_json::Value::as_i64);
        let error_message = parsed
            .as_ref()
            .and_then(|v| v.get("error_message"))
            .and_then(serde_json::Value::as_str)
            .map(String::from);

        Self {
            code,
            message: body.to_string(),
            error_code,
            error_message,
        }
    }

    /// Returns `true` for statuses that signal a transient condition:
    /// 408, 429 and the 5xx range.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.code, 408 | 429 | 500..=599)
    }
}

/// Failure below the HTTP status level.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The connection to the API host could not be established.
    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// Any other network-level error.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Malformed JSON response (status {code}): {source}")]
    MalformedBody {
        /// Status code of the response.
        code: u16,
        /// The parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Network(err)
        }
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// An operation on a single resource was called without its uid.
    #[error("{resource} uid is required for this operation.")]
    MissingUid {
        /// The resource the uid belongs to.
        resource: &'static str,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Header '{name}' has an invalid name or value.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// A stack-scoped operation was called without a stack API key.
    #[error("Stack API key is required for this operation.")]
    MissingApiKey,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with status `>= 400`.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Timeout, connection failure or malformed body.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.into())
    }
}

impl HttpError {
    /// Returns the HTTP status code when the error came from an API response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` when sending the same request again may succeed.
    ///
    /// Transport failures are retryable; API errors only for transient
    /// statuses; validation failures never.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_retryable(),
            Self::Transport(_) => true,
            Self::InvalidRequest(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_includes_status_and_body() {
        let error = ApiError::from_body(404, r#"{"error_message":"Stack not found"}"#);
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Stack not found"));
    }

    #[test]
    fn test_api_error_extracts_contentstack_fields() {
        let error = ApiError::from_body(
            422,
            r#"{"error_message":"Branch already exists","error_code":905,"errors":{}}"#,
        );
        assert_eq!(error.error_code, Some(905));
        assert_eq!(
            error.error_message.as_deref(),
            Some("Branch already exists")
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(HttpError::from(ApiError::from_body(429, "")).is_retryable());
        assert!(HttpError::from(ApiError::from_body(503, "")).is_retryable());
        assert!(!HttpError::from(ApiError::from_body(404, "")).is_retryable());
        assert!(!HttpError::from(InvalidHttpRequestError::EmptyPath).is_retryable());

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let malformed = HttpError::from(TransportError::MalformedBody { code: 200, source });
        assert!(malformed.is_retryable());
    }

    #[test]
    fn test_api_error_keeps_non_json_body() {
        let error = ApiError::from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(error.message, "<html>Bad Gateway</html>");
        assert!(error.error_code.is_none());
    }

    #[test]
    fn test_missing_uid_message_names_resource() {
        let error = InvalidHttpRequestError::MissingUid { resource: "Branch" };
        assert_eq!(error.to_string(), "Branch uid is required for this operation.");
    }

    #[test]
    fn test_http_error_status() {
        let error: HttpError = ApiError::from_body(429, "").into();
        assert_eq!(error.status(), Some(429));

        let error: HttpError = InvalidHttpRequestError::EmptyPath.into();
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_malformed_body_error_mentions_status() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = TransportError::MalformedBody { code: 200, source };
        assert!(error.to_string().contains("status 200"));
    }
}
