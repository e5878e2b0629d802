//! HTTP client layer for the Contentstack Management API.
//!
//! This module provides the request/response pipeline every resource facade
//! goes through: default headers, URL construction, transport and the retry
//! policy.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async transport with the retry loop
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response, with the effective request attached
//! - [`RequestHeaders`]: the typed default header set
//! - [`RetryPolicy`]: strict/lenient error handling and the retry bound
//! - [`HttpError`]: unified error type
//!
//! # Retry Behavior
//!
//! Each call makes up to `max_retries + 1` attempts. Whether a failure is
//! raised or retried depends on two independent toggles: one for transport
//! failures (timeout, connection error, malformed JSON) and one for responses
//! with status `>= 400`. Once a lenient call runs out of attempts it returns
//! `Ok(None)`. Retries are immediate; there is no backoff.

mod errors;
mod headers;
mod http_client;
mod http_request;
mod http_response;
mod retry;

pub use errors::{ApiError, HttpError, InvalidHttpRequestError, TransportError};
pub use headers::{
    RequestHeaders, API_KEY, AUTHORIZATION, AUTHTOKEN, BRANCH, CONTENT_TYPE, JSON_CONTENT_TYPE,
    SDK_NAME, SDK_VERSION, USER_AGENT,
};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit, RequestInfo};
pub use retry::{RetryPolicy, DEFAULT_MAX_RETRIES};

/// Result of a request: `Ok(None)` when a lenient request gave up.
pub type ApiResult = Result<Option<HttpResponse>, HttpError>;
