//! Default request headers.
//!
//! [`RequestHeaders`] is the typed header set a client attaches to every
//! request: a fixed JSON content type, the SDK user agent, optional
//! authentication and any extra headers the caller configured.

use std::collections::{BTreeMap, HashMap};

use crate::config::{AuthToken, ManagementToken};

/// Header carrying the request content type.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Header carrying the SDK identification.
pub const USER_AGENT: &str = "User-Agent";
/// Header carrying the session auth-token.
pub const AUTHTOKEN: &str = "authtoken";
/// Header carrying the management token.
pub const AUTHORIZATION: &str = "authorization";
/// Header carrying the stack API key on stack-scoped requests.
pub const API_KEY: &str = "api_key";
/// Header selecting the stack branch.
pub const BRANCH: &str = "branch";

/// The only content type the SDK sends.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// SDK name reported in the user agent.
pub const SDK_NAME: &str = "contentstack-management-rust";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The header set sent with every request.
///
/// Content type and user agent are not configurable through caller headers:
/// any caller value under those keys is replaced.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use contentstack_management::clients::RequestHeaders;
/// use contentstack_management::AuthToken;
///
/// let mut caller = HashMap::new();
/// caller.insert("content-type".to_string(), "text/plain".to_string());
/// caller.insert("x-trace".to_string(), "abc".to_string());
///
/// let token = AuthToken::new("blt-session").unwrap();
/// let headers = RequestHeaders::build(Some(&caller), Some(&token), None);
///
/// assert_eq!(headers.content_type(), "application/json");
/// assert_eq!(headers.authtoken().map(AsRef::as_ref), Some("blt-session"));
/// assert_eq!(headers.extra().get("x-trace"), Some(&"abc".to_string()));
/// assert!(!headers.extra().contains_key("content-type"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestHeaders {
    user_agent: String,
    authtoken: Option<AuthToken>,
    authorization: Option<ManagementToken>,
    extra: BTreeMap<String, String>,
}

impl RequestHeaders {
    /// Builds a fresh header set. The caller's map is left untouched.
    #[must_use]
    pub fn build(
        caller: Option<&HashMap<String, String>>,
        authtoken: Option<&AuthToken>,
        management_token: Option<&ManagementToken>,
    ) -> Self {
        let extra = caller
            .into_iter()
            .flatten()
            .filter(|(key, _)| !is_reserved(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            user_agent: default_user_agent(),
            authtoken: authtoken.cloned(),
            authorization: management_token.cloned(),
            extra,
        }
    }

    /// Prepends an application identifier to the user agent.
    #[must_use]
    pub fn with_user_agent_prefix(mut self, prefix: &str) -> Self {
        if !prefix.is_empty() {
            self.user_agent = format!("{prefix} | {}", default_user_agent());
        }
        self
    }

    /// Always `application/json`.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    /// Returns the user agent string.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the session auth-token, if any.
    #[must_use]
    pub const fn authtoken(&self) -> Option<&AuthToken> {
        self.authtoken.as_ref()
    }

    /// Returns the management token, if any.
    #[must_use]
    pub const fn authorization(&self) -> Option<&ManagementToken> {
        self.authorization.as_ref()
    }

    /// Returns the extra headers.
    #[must_use]
    pub const fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// Replaces the session auth-token.
    pub fn set_authtoken(&mut self, token: Option<AuthToken>) {
        self.authtoken = token;
    }

    /// Adds an extra header. Content type and user agent cannot be overridden.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !is_reserved(&key) {
            self.extra.insert(key, value.into());
        }
    }

    /// Flattens the header set into a plain map.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = self
            .extra
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        map.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
        map.insert(USER_AGENT.to_string(), self.user_agent.clone());
        if let Some(token) = &self.authtoken {
            map.insert(AUTHTOKEN.to_string(), token.as_ref().to_string());
        }
        if let Some(token) = &self.authorization {
            map.insert(AUTHORIZATION.to_string(), token.as_ref().to_string());
        }
        map
    }

    /// Merges call-site headers over the defaults; call-site values win.
    ///
    /// Keys are compared case-insensitively so an override replaces the
    /// default instead of being sent alongside it.
    #[must_use]
    pub fn merged(&self, overrides: Option<&HashMap<String, String>>) -> HashMap<String, String> {
        let mut map = self.to_map();
        for (key, value) in overrides.into_iter().flatten() {
            map.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

fn default_user_agent() -> String {
    format!("{SDK_NAME}/{SDK_VERSION}")
}

fn is_reserved(key: &str) -> bool {
    key.eq_ignore_ascii_case(CONTENT_TYPE) || key.eq_ignore_ascii_case(USER_AGENT)
}
