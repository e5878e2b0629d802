//! Authentication error types.

use thiserror::Error;

use crate::clients::HttpError;

/// Errors raised by login, logout and one-time-password generation.
///
/// Login failures are always raised; there is no lenient mode for them.
///
/// # Example
///
/// ```rust
/// use contentstack_management::auth::AuthError;
///
/// let error = AuthError::MissingCredential { field: "email" };
/// assert_eq!(error.to_string(), "Login requires a non-empty email.");
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password was empty; nothing was sent.
    #[error("Login requires a non-empty {field}.")]
    MissingCredential {
        /// The missing field.
        field: &'static str,
    },

    /// The two-factor secret could not be used to generate a code.
    #[error("Invalid two-factor secret: {reason}")]
    InvalidMfaSecret {
        /// Why the secret was rejected.
        reason: String,
    },

    /// The login response did not contain `user.authtoken`.
    #[error("Login response did not contain an auth token at 'user.authtoken'.")]
    MissingAuthToken,

    /// Logout was requested without an auth-token.
    #[error("No auth token is set on this client; log in first.")]
    NotLoggedIn,

    /// The login or logout request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiError;

    #[test]
    fn test_missing_auth_token_message() {
        let message = AuthError::MissingAuthToken.to_string();
        assert!(message.contains("user.authtoken"));
    }

    #[test]
    fn test_http_error_is_transparent() {
        let error: AuthError =
            HttpError::from(ApiError::from_body(401, r#"{"error_message":"Bad creds"}"#)).into();
        assert!(error.to_string().contains("401"));
        assert!(matches!(error, AuthError::Http(HttpError::Api(_))));
    }
}
