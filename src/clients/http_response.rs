//! HTTP response types for the Contentstack Management SDK.
//!
//! This module provides the [`HttpResponse`] type, the [`RequestInfo`]
//! snapshot of the request that produced it, and [`RateLimit`] parsing.

use std::collections::HashMap;

use crate::clients::http_request::HttpMethod;

/// Rate limit information parsed from the `X-RateLimit-Limit` and
/// `X-RateLimit-Remaining` headers.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use contentstack_management::clients::RateLimit;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["10".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["7".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 10);
/// assert_eq!(limit.remaining, 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses rate limit headers; `None` unless both are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse().ok())
        };

        Some(Self {
            limit: read("x-ratelimit-limit")?,
            remaining: read("x-ratelimit-remaining")?,
        })
    }
}

/// The effective request behind a response, kept for introspection.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestInfo {
    /// HTTP method that was sent.
    pub method: HttpMethod,
    /// Absolute URL, without query string.
    pub url: String,
    /// Headers that were sent, after merging.
    pub headers: HashMap<String, String>,
    /// JSON body that was sent, if any.
    pub body: Option<serde_json::Value>,
}

/// A successful (status `< 400`) response from the management API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. Empty bodies parse as `{}`.
    pub body: serde_json::Value,
    /// The request that produced this response.
    pub request: RequestInfo,
    /// Rate limit information, when the API reported it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
        request: RequestInfo,
    ) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        Self {
            code,
            headers,
            body,
            request,
            rate_limit,
        }
    }

    /// Returns the decoded JSON body.
    #[must_use]
    pub const fn json(&self) -> &serde_json::Value {
        &self.body
    }

    /// Consumes the response, returning the decoded JSON body.
    #[must_use]
    pub fn into_json(self) -> serde_json::Value {
        self.body
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `notice` message Contentstack attaches to write responses.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.body.get("notice").and_then(serde_json::Value::as_str)
    }

    /// Returns the first value of a response header (name is case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_info() -> RequestInfo {
        RequestInfo {
            method: HttpMethod::Get,
            url: "https://api.contentstack.com/v3/stacks".to_string(),
            headers: HashMap::new(),
            body: None,
        }
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        for code in 200..=299 {
            assert!(HttpResponse::new(code, HashMap::new(), json!({}), request_info()).is_ok());
        }
        assert!(!HttpResponse::new(304, HashMap::new(), json!({}), request_info()).is_ok());
    }

    #[test]
    fn test_rate_limit_requires_both_headers() {
        let mut headers = HashMap::new();
        headers.insert("x-ratelimit-limit".to_string(), vec!["10".to_string()]);
        assert!(RateLimit::from_headers(&headers).is_none());

        headers.insert("x-ratelimit-remaining".to_string(), vec!["abc".to_string()]);
        assert!(RateLimit::from_headers(&headers).is_none());

        headers.insert("x-ratelimit-remaining".to_string(), vec!["4".to_string()]);
        assert_eq!(
            RateLimit::from_headers(&headers),
            Some(RateLimit {
                limit: 10,
                remaining: 4
            })
        );
    }

    #[test]
    fn test_notice_and_json_accessors() {
        let body = json!({"notice": "Branch created successfully.", "branch": {"uid": "dev"}});
        let response = HttpResponse::new(201, HashMap::new(), body.clone(), request_info());

        assert_eq!(response.notice(), Some("Branch created successfully."));
        assert_eq!(response.json(), &body);
        assert_eq!(response.into_json()["branch"]["uid"], "dev");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-42".to_string()]);
        let response = HttpResponse::new(200, headers, json!({}), request_info());

        assert_eq!(response.header("X-Request-Id"), Some("req-42"));
        assert_eq!(response.request_id(), Some("req-42"));
    }
}
