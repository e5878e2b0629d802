//! Session state produced by login.
//!
//! A [`Session`] holds the auth-token returned by `POST user-session` together
//! with the user document from the same response. Sessions live only as long
//! as the client that created them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::totp::{generate_totp, MFA_SECRET_ENV};
use crate::auth::AuthError;
use crate::config::AuthToken;

/// Path of the session endpoint, relative to the API endpoint.
pub const USER_SESSION_PATH: &str = "user-session";

/// An authenticated user session.
///
/// # Example
///
/// ```rust
/// use contentstack_management::Session;
/// use serde_json::json;
///
/// let body = json!({"user": {"uid": "blt1", "email": "a@b.c", "authtoken": "blt-token"}});
/// let session = Session::from_login_response(&body).unwrap();
///
/// assert_eq!(session.authtoken.as_ref(), "blt-token");
/// assert_eq!(session.email(), Some("a@b.c"));
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// Token sent as the `authtoken` header.
    pub authtoken: AuthToken,
    /// The `user` object returned by the login call, without its token.
    pub user: serde_json::Value,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Extracts a session from a login response body.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingAuthToken`] unless `user.authtoken` is a
    /// non-empty string.
    pub fn from_login_response(body: &serde_json::Value) -> Result<Self, AuthError> {
        let user = body.get("user").ok_or(AuthError::MissingAuthToken)?;
        let token = user
            .get("authtoken")
            .and_then(serde_json::Value::as_str)
            .ok_or(AuthError::MissingAuthToken)?;
        let authtoken = AuthToken::new(token).map_err(|_| AuthError::MissingAuthToken)?;

        // The token lives only in `authtoken`, where Debug masks it
        let mut user = user.clone();
        if let Some(fields) = user.as_object_mut() {
            fields.remove("authtoken");
        }

        Ok(Self {
            authtoken,
            user,
            created_at: Utc::now(),
        })
    }

    /// Returns the logged-in user's uid, if reported.
    #[must_use]
    pub fn user_uid(&self) -> Option<&str> {
        self.user.get("uid").and_then(serde_json::Value::as_str)
    }

    /// Returns the logged-in user's email, if reported.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.get("email").and_then(serde_json::Value::as_str)
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[derive(Serialize)]
struct LoginRequest<'a> {
    user: LoginUser<'a>,
}

#[derive(Serialize)]
struct LoginUser<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tfa_token: Option<String>,
}

/// Rejects an empty email or password.
///
/// # Errors
///
/// Returns [`AuthError::MissingCredential`] naming the empty field.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() {
        return Err(AuthError::MissingCredential { field: "email" });
    }
    if password.is_empty() {
        return Err(AuthError::MissingCredential { field: "password" });
    }
    Ok(())
}

/// Builds the `user-session` request body, validating credentials first.
///
/// # Errors
///
/// Returns [`AuthError::MissingCredential`] for an empty email or password.
pub(crate) fn login_payload(
    email: &str,
    password: &str,
    tfa_token: Option<String>,
) -> Result<serde_json::Value, AuthError> {
    validate_credentials(email, password)?;

    let payload = LoginRequest {
        user: LoginUser {
            email,
            password,
            tfa_token,
        },
    };
    Ok(serde_json::json!(payload))
}

/// Picks the two-factor code: an explicit code wins, then a secret given as
/// argument, then the `MFA_SECRET` environment variable.
///
/// # Errors
///
/// Returns [`AuthError::InvalidMfaSecret`] if a secret is found but invalid.
pub(crate) fn resolve_tfa_token(
    tfa_token: Option<&str>,
    mfa_secret: Option<&str>,
) -> Result<Option<String>, AuthError> {
    let env_secret = std::env::var(MFA_SECRET_ENV).ok();
    resolve_tfa_token_from(tfa_token, mfa_secret, env_secret.as_deref())
}

fn resolve_tfa_token_from(
    tfa_token: Option<&str>,
    mfa_secret: Option<&str>,
    env_secret: Option<&str>,
) -> Result<Option<String>, AuthError> {
    if let Some(code) = tfa_token.filter(|c| !c.trim().is_empty()) {
        return Ok(Some(code.trim().to_string()));
    }

    mfa_secret
        .filter(|s| !s.trim().is_empty())
        .or_else(|| env_secret.filter(|s| !s.trim().is_empty()))
        .map(generate_totp)
        .transpose()
}
