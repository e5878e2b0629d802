//! HTTP transport for the Contentstack Management API.
//!
//! This module provides the [`HttpClient`] type, which sends requests to the
//! resolved endpoint with the client's default headers and applies the
//! [`RetryPolicy`] to every call.

use std::collections::HashMap;

use reqwest::header::{HeaderName, HeaderValue};

use crate::clients::errors::{ApiError, HttpError, InvalidHttpRequestError, TransportError};
use crate::clients::headers::RequestHeaders;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{HttpResponse, RequestInfo};
use crate::clients::retry::RetryPolicy;
use crate::clients::ApiResult;
use crate::config::{AuthToken, ClientConfig, Endpoint};
use crate::error::ConfigError;

/// Low-level HTTP client for the management API.
///
/// The client handles:
/// - URL construction from the cached [`Endpoint`]
/// - Default headers (content type, user agent, authentication)
/// - Merging of call-site headers over the defaults
/// - The bounded retry loop described by [`RetryPolicy`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Only [`set_authtoken`](Self::set_authtoken)
/// mutates it, and that requires exclusive access.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Resolved endpoint all paths are joined against.
    endpoint: Endpoint,
    /// Default headers for every request.
    headers: RequestHeaders,
    /// Retry policy for [`request`](Self::request).
    retry_policy: RetryPolicy,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying reqwest
    /// client cannot be created (e.g. TLS initialisation failure).
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|err| ConfigError::HttpClientInit {
                reason: err.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
            headers: config.headers().clone(),
            retry_policy: *config.retry_policy(),
        })
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the default headers.
    #[must_use]
    pub const fn default_headers(&self) -> &RequestHeaders {
        &self.headers
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Installs or clears the session auth-token for subsequent requests.
    pub fn set_authtoken(&mut self, token: Option<AuthToken>) {
        self.headers.set_authtoken(token);
    }

    /// Sends a request under the client's retry policy.
    ///
    /// # Errors
    ///
    /// See [`request_with_policy`](Self::request_with_policy).
    pub async fn request(&self, request: HttpRequest) -> ApiResult {
        self.request_with_policy(request, &self.retry_policy).await
    }

    /// Sends a request under an explicit retry policy.
    ///
    /// Returns `Ok(Some(response))` for any status below 400. In lenient mode
    /// a request that keeps failing yields `Ok(None)` once its attempts are
    /// used up.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Api`] for status `>= 400` when `raise_on_status_error`
    /// - [`HttpError::Transport`] for transport failures when
    ///   `raise_on_transport_error`
    pub async fn request_with_policy(
        &self,
        request: HttpRequest,
        policy: &RetryPolicy,
    ) -> ApiResult {
        request.verify()?;

        let url = self.endpoint.join(&request.path);
        let headers = self.headers.merged(request.extra_headers.as_ref());
        validate_headers(&headers)?;
        let attempts = policy.attempts_for(request.http_method);
        let method = request.http_method;

        for attempt in 1..=attempts {
            tracing::debug!(attempt, attempts, %method, %url, "sending request");

            match self.send_once(&request, &url, &headers).await {
                Ok(response) => {
                    tracing::debug!(
                        attempt,
                        %method,
                        %url,
                        status = response.code,
                        "received response"
                    );
                    return Ok(Some(response));
                }
                Err(HttpError::Api(err)) => {
                    if policy.raise_on_status_error {
                        return Err(err.into());
                    }
                    tracing::warn!(
                        attempt,
                        attempts,
                        %method,
                        %url,
                        status = err.code,
                        "request returned error status"
                    );
                }
                Err(HttpError::Transport(err)) => {
                    if policy.raise_on_transport_error {
                        return Err(err.into());
                    }
                    tracing::warn!(
                        attempt,
                        attempts,
                        %method,
                        %url,
                        error = %err,
                        "request failed in transport"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        tracing::warn!(attempts, %method, %url, "giving up after exhausting retries");
        Ok(None)
    }

    /// Performs exactly one HTTP exchange.
    async fn send_once(
        &self,
        request: &HttpRequest,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.request(request.http_method.into(), url);

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if code >= 400 {
            return Err(ApiError::from_body(code, &body_text).into());
        }

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .map_err(|source| TransportError::MalformedBody { code, source })?
        };

        let info = RequestInfo {
            method: request.http_method,
            url: url.to_string(),
            headers: headers.clone(),
            body: request.body.clone(),
        };

        Ok(HttpResponse::new(code, res_headers, body, info))
    }

    /// Parses response headers into a `HashMap` keyed by lower-case name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Rejects headers reqwest would refuse to build, before any attempt is made.
fn validate_headers(headers: &HashMap<String, String>) -> Result<(), InvalidHttpRequestError> {
    for (name, value) in headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err() || HeaderValue::from_str(value).is_err()
        {
            return Err(InvalidHttpRequestError::InvalidHeader { name: name.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{AUTHTOKEN, USER_AGENT};
    use crate::config::Region;

    #[test]
    fn test_client_uses_resolved_endpoint() {
        let config = ClientConfig::builder().region(Region::Au).build().unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint().as_str(),
            "https://au-api.contentstack.com/v3/"
        );
    }

    #[test]
    fn test_set_authtoken_replaces_default_header() {
        let config = ClientConfig::builder().build().unwrap();
        let mut client = HttpClient::new(&config).unwrap();
        assert!(!client.default_headers().to_map().contains_key(AUTHTOKEN));

        client.set_authtoken(Some(AuthToken::new("first").unwrap()));
        client.set_authtoken(Some(AuthToken::new("second").unwrap()));
        assert_eq!(
            client.default_headers().to_map().get(AUTHTOKEN),
            Some(&"second".to_string())
        );

        client.set_authtoken(None);
        assert!(client.default_headers().authtoken().is_none());
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = ClientConfig::builder().build().unwrap();
        let client = HttpClient::new(&config).unwrap();

        let map = client.default_headers().to_map();
        let user_agent = map.get(USER_AGENT).unwrap();
        assert!(user_agent.starts_with("contentstack-management-rust/"));
    }

    #[test]
    fn test_validate_headers_rejects_control_characters() {
        let mut headers = HashMap::new();
        headers.insert("x-trace".to_string(), "abc".to_string());
        assert!(validate_headers(&headers).is_ok());

        headers.insert("x-bad".to_string(), "bad\nvalue".to_string());
        assert_eq!(
            validate_headers(&headers),
            Err(InvalidHttpRequestError::InvalidHeader {
                name: "x-bad".to_string()
            })
        );

        let mut headers = HashMap::new();
        headers.insert("bad name".to_string(), "ok".to_string());
        assert!(validate_headers(&headers).is_err());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
