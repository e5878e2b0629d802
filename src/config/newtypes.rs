//! Validated newtype wrappers for credentials.
//!
//! Tokens mask their value in `Debug` output so they never leak into logs.

use crate::error::ConfigError;
use std::fmt;

/// A validated Contentstack stack API key.
///
/// # Example
///
/// ```rust
/// use contentstack_management::ApiKey;
///
/// let key = ApiKey::new("blt0123456789").unwrap();
/// assert_eq!(key.as_ref(), "blt0123456789");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A session auth-token, obtained through login or supplied up front.
///
/// # Example
///
/// ```rust
/// use contentstack_management::AuthToken;
///
/// let token = AuthToken::new("bltsecret").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new auth-token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A long-lived management token, sent as the `authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ManagementToken(String);

impl ManagementToken {
    /// Creates a new management token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyManagementToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyManagementToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ManagementToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ManagementToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ManagementToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_tokens_reject_empty() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
        assert!(matches!(
            ManagementToken::new(""),
            Err(ConfigError::EmptyManagementToken)
        ));
    }

    #[test]
    fn test_tokens_mask_debug_output() {
        let auth = AuthToken::new("super-secret").unwrap();
        let mgmt = ManagementToken::new("cs-secret").unwrap();

        assert!(!format!("{auth:?}").contains("super-secret"));
        assert_eq!(format!("{mgmt:?}"), "ManagementToken(*****)");
        assert_eq!(auth.as_ref(), "super-secret");
    }
}
