//! # Contentstack Management API Rust SDK
//!
//! A Rust SDK for the Contentstack Content Management API, providing
//! region-aware configuration, session login with optional two-factor codes,
//! and an async HTTP pipeline with a bounded retry policy.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Endpoint resolution from host, [`Region`], scheme and API version
//! - Validated newtypes for API keys and tokens
//! - Email/password login with TOTP two-factor codes via [`ContentstackClient::login`]
//! - Strict or lenient error handling via [`RetryPolicy`]
//! - Resource facades for users, organizations, stacks and stack content
//!
//! ## Quick Start
//!
//! ```rust
//! use contentstack_management::{ClientConfig, Region};
//!
//! let config = ClientConfig::builder()
//!     .region(Region::AzureNa)
//!     .max_retries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.endpoint().as_str(),
//!     "https://azure-na-api.contentstack.com/v3/"
//! );
//! ```
//!
//! ## Logging In
//!
//! ```rust,ignore
//! use contentstack_management::{ClientConfig, ContentstackClient, CrudResource};
//!
//! let mut client = ContentstackClient::new(ClientConfig::default())?;
//! client.login("dev@example.com", "password", None, None).await?;
//!
//! let stack = client.stack(Some("blt_api_key"));
//! let branches = stack.branch(None).find(None).await?;
//! ```
//!
//! ## Management Tokens
//!
//! Stack-level automation can skip login and authenticate with a management
//! token, sent as the `authorization` header:
//!
//! ```rust
//! use contentstack_management::{ClientConfig, ManagementToken};
//!
//! let config = ClientConfig::builder()
//!     .management_token(ManagementToken::new("cs-management-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.headers().authorization().is_some());
//! ```
//!
//! ## Lenient Requests
//!
//! ```rust,ignore
//! use contentstack_management::{ClientConfig, ContentstackClient, RetryPolicy};
//!
//! let config = ClientConfig::builder()
//!     .retry_policy(RetryPolicy::lenient(5))
//!     .build()?;
//! let client = ContentstackClient::new(config)?;
//!
//! match client.get("stacks", None, None).await? {
//!     Some(response) => println!("{}", response.json()),
//!     None => println!("gave up after 6 attempts"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes and builders reject bad input early
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, Session};
pub use client::ContentstackClient;
pub use config::{
    ApiKey, AuthToken, ClientConfig, ClientConfigBuilder, Endpoint, ManagementToken, Region,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiResult, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, RateLimit, RequestHeaders, RetryPolicy,
    TransportError,
};

// Re-export resource facades
pub use resources::{CrudResource, Params, Stack, StackContext};
