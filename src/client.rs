//! The Contentstack management client.
//!
//! [`ContentstackClient`] ties the pipeline together: it owns the transport
//! (and with it the default headers), tracks the login session, and hands out
//! borrowed resource facades.

use std::collections::HashMap;

use crate::auth::session::{login_payload, resolve_tfa_token, validate_credentials};
use crate::auth::{AuthError, Session, USER_SESSION_PATH};
use crate::clients::{
    ApiResult, HttpClient, HttpMethod, HttpRequest, HttpResponse, RequestHeaders, RetryPolicy,
};
use crate::config::{ClientConfig, Endpoint};
use crate::error::ConfigError;
use crate::resources::{Organization, Stack, User};

/// Client for the Contentstack Content Management API.
///
/// # Thread Safety
///
/// `ContentstackClient` is `Send + Sync`. Requests take `&self`; login and
/// logout take `&mut self`, so one client holds at most one session. Build a
/// separate client for each concurrent session.
///
/// # Example
///
/// ```rust,ignore
/// use contentstack_management::{ClientConfig, ContentstackClient, Region};
///
/// let config = ClientConfig::builder().region(Region::Eu).build()?;
/// let mut client = ContentstackClient::new(config)?;
///
/// client.login("dev@example.com", "password", None, None).await?;
///
/// let stack = client.stack(Some("blt_api_key")).fetch().await?;
/// if let Some(response) = stack {
///     println!("{}", response.json()["stack"]["name"]);
/// }
/// ```
#[derive(Debug)]
pub struct ContentstackClient {
    config: ClientConfig,
    http_client: HttpClient,
    session: Option<Session>,
}

// Verify ContentstackClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentstackClient>();
};

impl ContentstackClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be
    /// created.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(&config)?;
        tracing::debug!(endpoint = %config.endpoint(), "created Contentstack client");

        Ok(Self {
            config,
            http_client,
            session: None,
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the resolved endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        self.http_client.endpoint()
    }

    /// Returns the headers currently attached to every request.
    #[must_use]
    pub const fn headers(&self) -> &RequestHeaders {
        self.http_client.default_headers()
    }

    /// Returns the current login session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the auth-token currently sent with requests.
    #[must_use]
    pub fn authtoken(&self) -> Option<&str> {
        self.headers().authtoken().map(AsRef::as_ref)
    }

    /// Returns `true` when an auth-token is attached to requests.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.authtoken().is_some()
    }

    /// Logs in with email and password.
    ///
    /// `tfa_token` is sent as-is when given. Otherwise a code is generated
    /// from `mfa_secret`, or from the `MFA_SECRET` environment variable.
    /// On success the returned auth-token replaces any previous one and is
    /// sent with every later request from this client.
    ///
    /// Login never retries on error status and never returns an empty
    /// result: failures are always raised.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingCredential`] for an empty email or password,
    ///   before any request is made
    /// - [`AuthError::InvalidMfaSecret`] if the secret is not valid base32
    /// - [`AuthError::Http`] if the request fails
    /// - [`AuthError::MissingAuthToken`] if the response has no
    ///   `user.authtoken`
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        tfa_token: Option<&str>,
        mfa_secret: Option<&str>,
    ) -> Result<HttpResponse, AuthError> {
        validate_credentials(email, password)?;
        let tfa_token = resolve_tfa_token(tfa_token, mfa_secret)?;
        let body = login_payload(email, password, tfa_token)?;

        let request = HttpRequest::builder(HttpMethod::Post, USER_SESSION_PATH)
            .body(body)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let policy = RetryPolicy::strict(self.config.retry_policy().max_retries);
        let response = self
            .http_client
            .request_with_policy(request, &policy)
            .await?
            .ok_or(AuthError::MissingAuthToken)?;

        let session = Session::from_login_response(response.json())?;
        self.http_client.set_authtoken(Some(session.authtoken.clone()));
        tracing::info!(user = session.user_uid().unwrap_or_default(), "logged in");
        self.session = Some(session);

        Ok(response)
    }

    /// Ends the current session on the server and clears the auth-token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotLoggedIn`] if no auth-token is set
    /// - [`AuthError::Http`] if the request fails; the token is kept
    pub async fn logout(&mut self) -> Result<HttpResponse, AuthError> {
        if !self.is_logged_in() {
            return Err(AuthError::NotLoggedIn);
        }

        let request = HttpRequest::builder(HttpMethod::Delete, USER_SESSION_PATH)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let policy = RetryPolicy::strict(self.config.retry_policy().max_retries);
        let response = self
            .http_client
            .request_with_policy(request, &policy)
            .await?
            .ok_or(AuthError::NotLoggedIn)?;

        self.http_client.set_authtoken(None);
        self.session = None;
        tracing::info!("logged out");

        Ok(response)
    }

    /// Sends a prepared request under the client's retry policy.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request_with_policy`].
    pub async fn request(&self, request: HttpRequest) -> ApiResult {
        self.http_client.request(request).await
    }

    /// Sends a GET request to `path`, relative to the endpoint.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request_with_policy`].
    pub async fn get(
        &self,
        path: &str,
        params: Option<HashMap<String, String>>,
        headers: Option<HashMap<String, String>>,
    ) -> ApiResult {
        self.send(HttpMethod::Get, path, params, None, headers).await
    }

    /// Sends a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request_with_policy`].
    pub async fn post(
        &self,
        path: &str,
        params: Option<HashMap<String, String>>,
        body: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
    ) -> ApiResult {
        self.send(HttpMethod::Post, path, params, body, headers).await
    }

    /// Sends a PUT request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request_with_policy`].
    pub async fn put(
        &self,
        path: &str,
        params: Option<HashMap<String, String>>,
        body: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
    ) -> ApiResult {
        self.send(HttpMethod::Put, path, params, body, headers).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request_with_policy`].
    pub async fn delete(
        &self,
        path: &str,
        params: Option<HashMap<String, String>>,
        headers: Option<HashMap<String, String>>,
    ) -> ApiResult {
        self.send(HttpMethod::Delete, path, params, None, headers).await
    }

    /// Returns the facade for the logged-in user.
    #[must_use]
    pub const fn user(&self) -> User<'_> {
        User::new(self)
    }

    /// Returns the facade for organizations, optionally bound to one uid.
    #[must_use]
    pub fn organizations(&self, uid: Option<&str>) -> Organization<'_> {
        Organization::new(self, uid)
    }

    /// Returns the facade for a stack, identified by its API key.
    ///
    /// Without an API key only [`Stack::find`] and [`Stack::create`] can be
    /// used.
    #[must_use]
    pub fn stack(&self, api_key: Option<&str>) -> Stack<'_> {
        Stack::new(self, api_key)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<HashMap<String, String>>,
        body: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
    ) -> ApiResult {
        let mut builder = HttpRequest::builder(method, path).maybe_body(body);
        if let Some(params) = params {
            builder = builder.query(params);
        }
        if let Some(headers) = headers {
            builder = builder.extra_headers(headers);
        }
        let request = builder.build()?;
        self.http_client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthToken, ManagementToken, Region};

    #[test]
    fn test_new_client_has_no_session() {
        let client = ContentstackClient::new(ClientConfig::default()).unwrap();
        assert!(client.session().is_none());
        assert!(!client.is_logged_in());
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.contentstack.com/v3/"
        );
    }

    #[test]
    fn test_preconfigured_authtoken_counts_as_logged_in() {
        let config = ClientConfig::builder()
            .authtoken(AuthToken::new("existing").unwrap())
            .build()
            .unwrap();
        let client = ContentstackClient::new(config).unwrap();

        assert!(client.is_logged_in());
        assert_eq!(client.authtoken(), Some("existing"));
        assert!(client.session().is_none());
    }

    #[test]
    fn test_management_token_only() {
        let config = ClientConfig::builder()
            .region(Region::GcpNa)
            .management_token(ManagementToken::new("cs-mgmt").unwrap())
            .build()
            .unwrap();
        let client = ContentstackClient::new(config).unwrap();

        assert!(!client.is_logged_in());
        assert!(client.headers().authorization().is_some());
        assert_eq!(client.config().host(), "gcp-na-api.contentstack.com");
    }

    #[tokio::test]
    async fn test_login_with_empty_email_fails_before_network() {
        // Unroutable endpoint: any network attempt would surface as AuthError::Http
        let config = ClientConfig::builder()
            .endpoint("http://127.0.0.1:9/v3")
            .build()
            .unwrap();
        let mut client = ContentstackClient::new(config).unwrap();

        let result = client.login("", "password", Some("123456"), None).await;
        assert!(matches!(
            result,
            Err(AuthError::MissingCredential { field: "email" })
        ));

        let result = client.login("dev@example.com", "", Some("123456"), None).await;
        assert!(matches!(
            result,
            Err(AuthError::MissingCredential { field: "password" })
        ));
    }

    #[tokio::test]
    async fn test_logout_without_token_is_rejected() {
        let mut client = ContentstackClient::new(ClientConfig::default()).unwrap();
        assert!(matches!(client.logout().await, Err(AuthError::NotLoggedIn)));
    }
}
