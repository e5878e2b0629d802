//! Time-based one-time passwords for two-factor login.
//!
//! Codes follow RFC 6238 with the parameters authenticator apps use:
//! HMAC-SHA1, 6 digits, 30-second time step, base32-encoded shared secret.
//!
//! # Example
//!
//! ```rust
//! use contentstack_management::auth::totp::generate_totp_at;
//!
//! let code = generate_totp_at("JBSWY3DPEHPK3PXP", 1_700_000_000).unwrap();
//! assert_eq!(code.len(), 6);
//! assert!(code.chars().all(|c| c.is_ascii_digit()));
//! ```

use chrono::Utc;
use data_encoding::{Encoding, Specification};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::auth::AuthError;

type HmacSha1 = Hmac<Sha1>;

/// Number of digits in a generated code.
pub const TOTP_DIGITS: u32 = 6;

/// Length of one time step in seconds.
pub const TOTP_STEP_SECS: u64 = 30;

/// Environment variable consulted for the shared secret.
pub const MFA_SECRET_ENV: &str = "MFA_SECRET";

/// Generates the code for the current time step.
///
/// # Errors
///
/// Returns [`AuthError::InvalidMfaSecret`] if the secret is not valid base32.
pub fn generate_totp(secret: &str) -> Result<String, AuthError> {
    let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
    generate_totp_at(secret, now)
}

/// Generates the code for the time step containing `unix_secs`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidMfaSecret`] if the secret is not valid base32.
pub fn generate_totp_at(secret: &str, unix_secs: u64) -> Result<String, AuthError> {
    let key = decode_secret(secret)?;
    let counter = unix_secs / TOTP_STEP_SECS;

    let mut mac = HmacSha1::new_from_slice(&key).map_err(|err| AuthError::InvalidMfaSecret {
        reason: err.to_string(),
    })?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation (RFC 4226 section 5.3)
    let offset = usize::from(digest[digest.len() - 1] & 0x0f);
    let binary = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    let code = binary % 10_u32.pow(TOTP_DIGITS);
    Ok(format!("{code:0width$}", width = TOTP_DIGITS as usize))
}

/// Decodes a base32 secret, tolerating spaces, lower case and padding.
fn decode_secret(secret: &str) -> Result<Vec<u8>, AuthError> {
    let normalized: String = secret
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '=')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if normalized.is_empty() {
        return Err(AuthError::InvalidMfaSecret {
            reason: "secret is empty".to_string(),
        });
    }

    base32_lenient()?
        .decode(normalized.as_bytes())
        .map_err(|err| AuthError::InvalidMfaSecret {
            reason: err.to_string(),
        })
}

/// Unpadded RFC 4648 base32 that ignores non-zero trailing bits.
///
/// Authenticator apps accept secrets whose length leaves leftover bits, so
/// the leftover bits are dropped rather than rejected.
fn base32_lenient() -> Result<Encoding, AuthError> {
    let mut spec = Specification::new();
    spec.symbols.push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
    spec.check_trailing_bits = false;
    spec.encoding().map_err(|err| AuthError::InvalidMfaSecret {
        reason: err.to_string(),
    })
}
