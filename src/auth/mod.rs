//! Authentication for the Contentstack Management SDK.
//!
//! Requests are authenticated in one of two ways, and both may be combined:
//!
//! - **Session auth-token**: obtained by
//!   [`ContentstackClient::login`](crate::ContentstackClient::login) with an
//!   email and password (plus a two-factor code when the account needs one)
//!   and sent as the `authtoken` header.
//! - **Management token**: a long-lived stack token configured up front and
//!   sent as the `authorization` header.
//!
//! # Two-factor login
//!
//! When the account has two-factor authentication enabled, pass either the
//! current code or the shared secret. With a secret (argument or the
//! `MFA_SECRET` environment variable) the code is generated locally by
//! [`totp::generate_totp`].
//!
//! ```rust,ignore
//! let mut client = ContentstackClient::new(ClientConfig::default())?;
//! client.login("dev@example.com", "password", None, Some("JBSWY3DPEHPK3PXP")).await?;
//! assert!(client.is_logged_in());
//! ```

mod errors;
pub mod session;
pub mod totp;

pub use errors::AuthError;
pub use session::{Session, USER_SESSION_PATH};
