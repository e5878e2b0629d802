//! Configuration types for the Contentstack Management SDK.
//!
//! # Overview
//!
//! - [`ClientConfig`]: immutable client settings with the resolved endpoint
//! - [`ClientConfigBuilder`]: fluent builder for [`ClientConfig`]
//! - [`Endpoint`]: the resolved `scheme://host/version/` base URL
//! - [`Region`]: the data region used to pick the API host
//! - [`ApiKey`], [`AuthToken`], [`ManagementToken`]: validated credentials
//!
//! # Example
//!
//! ```rust
//! use contentstack_management::{ClientConfig, Region};
//!
//! let config = ClientConfig::builder()
//!     .region(Region::Eu)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_str(), "https://eu-api.contentstack.com/v3/");
//! ```

mod endpoint;
mod newtypes;
mod region;

pub use endpoint::{Endpoint, DEFAULT_API_VERSION, DEFAULT_DOMAIN, DEFAULT_SCHEME};
pub use newtypes::{ApiKey, AuthToken, ManagementToken};
pub use region::Region;

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::{RequestHeaders, RetryPolicy};
use crate::error::ConfigError;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a Contentstack management client.
///
/// The endpoint is resolved once in [`ClientConfigBuilder::build`] and cached
/// here; it is never recomputed per request.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    endpoint: Endpoint,
    region: Option<Region>,
    timeout: Duration,
    retry_policy: RetryPolicy,
    headers: RequestHeaders,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the resolved API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the API host name.
    #[must_use]
    pub fn host(&self) -> &str {
        self.endpoint.host()
    }

    /// Returns the configured region, if one was set.
    #[must_use]
    pub const fn region(&self) -> Option<Region> {
        self.region
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the default header set.
    #[must_use]
    pub const fn headers(&self) -> &RequestHeaders {
        &self.headers
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::resolve(None, None, None, None, DEFAULT_DOMAIN)
                .unwrap_or_else(|_| unreachable!("default endpoint inputs are valid")),
            region: None,
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
            headers: RequestHeaders::build(None, None, None),
        }
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - region: `us` (`https://api.contentstack.com/v3/`)
/// - scheme: `https://`, version: `v3`
/// - timeout: 30 seconds
/// - retry policy: strict, 5 retries
/// - no auth-token, no management token, no extra headers
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use contentstack_management::{ClientConfig, ManagementToken, Region};
///
/// let config = ClientConfig::builder()
///     .region(Region::AzureNa)
///     .management_token(ManagementToken::new("cs-token").unwrap())
///     .timeout(Duration::from_secs(10))
///     .max_retries(2)
///     .header("x-trace-id", "abc")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.host(), "azure-na-api.contentstack.com");
/// assert_eq!(config.retry_policy().max_retries, 2);
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    host: Option<String>,
    endpoint: Option<String>,
    region: Option<Region>,
    scheme: Option<String>,
    api_version: Option<String>,
    domain: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_policy: Option<RetryPolicy>,
    authtoken: Option<AuthToken>,
    management_token: Option<ManagementToken>,
    headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit API host, e.g. `api.contentstack.io`.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets a complete endpoint URL, bypassing host/region resolution.
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Sets the data region.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the protocol scheme (`https://` or `http://`).
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Sets the API version segment.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Overrides the domain used to build region hosts.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the number of retries after the first attempt.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the retry policy. A later [`max_retries`](Self::max_retries)
    /// still applies on top of it.
    #[must_use]
    pub const fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Sets a session auth-token obtained elsewhere.
    #[must_use]
    pub fn authtoken(mut self, token: AuthToken) -> Self {
        self.authtoken = Some(token);
        self
    }

    /// Sets a management token, sent as the `authorization` header.
    #[must_use]
    pub fn management_token(mut self, token: ManagementToken) -> Self {
        self.management_token = Some(token);
        self
    }

    /// Adds a default header sent with every request.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Adds several default headers.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets a prefix for the user agent, e.g. `MyApp/1.0`.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], resolving the endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the endpoint cannot be resolved.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let endpoint = match self.endpoint.as_deref() {
            Some(url) => Endpoint::from_url(url)?,
            None => Endpoint::resolve(
                self.host.as_deref(),
                self.region,
                self.scheme.as_deref(),
                self.api_version.as_deref(),
                self.domain.as_deref().unwrap_or(DEFAULT_DOMAIN),
            )?,
        };

        let mut retry_policy = self.retry_policy.unwrap_or_default();
        if let Some(retries) = self.max_retries {
            retry_policy.max_retries = retries;
        }

        let mut headers = RequestHeaders::build(
            Some(&self.headers),
            self.authtoken.as_ref(),
            self.management_token.as_ref(),
        );
        if let Some(prefix) = self.user_agent_prefix.as_deref() {
            headers = headers.with_user_agent_prefix(prefix);
        }

        Ok(ClientConfig {
            endpoint,
            region: self.region,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            retry_policy,
            headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{AUTHORIZATION, AUTHTOKEN};

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ClientConfig::builder().build().unwrap();

        assert_eq!(config.endpoint().as_str(), "https://api.contentstack.com/v3/");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.retry_policy().max_retries, 5);
        assert!(config.headers().authtoken().is_none());
        assert!(config.headers().authorization().is_none());
        assert!(config.region().is_none());
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let default = ClientConfig::default();
        let built = ClientConfig::builder().build().unwrap();
        assert_eq!(default.endpoint(), built.endpoint());
        assert_eq!(default.headers(), built.headers());
    }

    #[test]
    fn test_region_builds_prefixed_host() {
        let config = ClientConfig::builder().region(Region::Eu).build().unwrap();
        assert_eq!(config.endpoint().as_str(), "https://eu-api.contentstack.com/v3/");
        assert_eq!(config.region(), Some(Region::Eu));
    }

    #[test]
    fn test_host_wins_over_region() {
        let config = ClientConfig::builder()
            .host("api.contentstack.io")
            .region(Region::GcpEu)
            .build()
            .unwrap();
        assert_eq!(config.endpoint().as_str(), "https://api.contentstack.io/v3/");
    }

    #[test]
    fn test_endpoint_override_bypasses_resolution() {
        let config = ClientConfig::builder()
            .endpoint("http://localhost:4000/v3")
            .host("ignored.example.com")
            .build()
            .unwrap();
        assert_eq!(config.endpoint().as_str(), "http://localhost:4000/v3/");
    }

    #[test]
    fn test_unresolvable_host_is_config_error() {
        let result = ClientConfig::builder().host("").build();
        assert!(matches!(result, Err(ConfigError::UnresolvableEndpoint)));
    }

    #[test]
    fn test_max_retries_applies_on_top_of_policy() {
        let config = ClientConfig::builder()
            .max_retries(1)
            .retry_policy(RetryPolicy::lenient(9))
            .build()
            .unwrap();
        assert_eq!(config.retry_policy().max_retries, 1);
        assert!(!config.retry_policy().raise_on_status_error);
    }

    #[test]
    fn test_tokens_land_in_headers() {
        let config = ClientConfig::builder()
            .authtoken(AuthToken::new("session").unwrap())
            .management_token(ManagementToken::new("mgmt").unwrap())
            .header("Content-Type", "text/plain")
            .build()
            .unwrap();

        let map = config.headers().to_map();
        assert_eq!(map.get(AUTHTOKEN), Some(&"session".to_string()));
        assert_eq!(map.get(AUTHORIZATION), Some(&"mgmt".to_string()));
        assert_eq!(map.get("Content-Type"), Some(&"application/json".to_string()));
    }

    #[test]
    fn test_config_is_clone_and_debug_without_secrets() {
        let config = ClientConfig::builder()
            .authtoken(AuthToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.endpoint(), config.endpoint());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ClientConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
