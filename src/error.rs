//! Error types for the Contentstack Management SDK.
//!
//! This module contains the configuration error raised while building a
//! [`ClientConfig`](crate::ClientConfig). Request-level errors live in
//! [`clients`](crate::clients) and login errors in [`auth`](crate::auth).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Construction errors are never retried or swallowed.
//!
//! # Example
//!
//! ```rust
//! use contentstack_management::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Stack API key cannot be empty.
    #[error("Stack API key cannot be empty. Please provide a valid Contentstack stack API key.")]
    EmptyApiKey,

    /// Session auth-token cannot be empty.
    #[error("Auth token cannot be empty.")]
    EmptyAuthToken,

    /// Management token cannot be empty.
    #[error("Management token cannot be empty.")]
    EmptyManagementToken,

    /// Region tag is not one of the supported regions.
    #[error("Invalid region '{region}'. Expected one of: us, eu, au, azure-na, azure-eu, gcp-na, gcp-eu.")]
    InvalidRegion {
        /// The region string that was provided.
        region: String,
    },

    /// Neither the host nor the region produced a usable endpoint.
    #[error("Unable to resolve an API endpoint: provide a non-empty host or a region.")]
    UnresolvableEndpoint,

    /// Protocol scheme is invalid.
    #[error("Invalid scheme '{scheme}'. Expected 'https://' or 'http://'.")]
    InvalidScheme {
        /// The scheme that was provided.
        scheme: String,
    },

    /// API version segment is empty.
    #[error("API version cannot be empty (e.g. 'v3').")]
    EmptyApiVersion,

    /// Explicit endpoint override is not an absolute URL.
    #[error("Invalid endpoint '{url}'. Please provide an absolute URL with scheme (e.g. 'https://api.contentstack.io/v3/').")]
    InvalidEndpoint {
        /// The endpoint that was provided.
        url: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to initialise HTTP client: {reason}")]
    HttpClientInit {
        /// Description of the failure.
        reason: String,
    },
}
