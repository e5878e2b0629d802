//! Retry and error policy for API requests.
//!
//! The policy decides, per attempt, whether a failure is raised to the caller,
//! retried, or (once attempts run out) turned into an empty result.

use crate::clients::http_request::HttpMethod;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Bounded retry policy with independent strict/lenient toggles.
///
/// - `raise_on_transport_error`: timeouts, connection failures and malformed
///   JSON bodies are returned as errors on first occurrence.
/// - `raise_on_status_error`: responses with status `>= 400` are returned as
///   [`ApiError`](crate::clients::ApiError) on first occurrence.
///
/// When a toggle is off, the matching failure is retried until
/// `max_retries + 1` attempts have been made, after which the request yields
/// `Ok(None)`. Retries happen immediately with no backoff.
///
/// # Example
///
/// ```rust
/// use contentstack_management::RetryPolicy;
///
/// let strict = RetryPolicy::default();
/// assert!(strict.raise_on_status_error);
///
/// let lenient = RetryPolicy::lenient(2);
/// assert_eq!(lenient.attempts(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Raise transport failures instead of retrying them.
    pub raise_on_transport_error: bool,
    /// Raise `>= 400` responses instead of retrying them.
    pub raise_on_status_error: bool,
    /// Allow lenient retries of POST requests.
    ///
    /// POST creates resources and is not idempotent, so it gets a single
    /// attempt unless this is enabled.
    pub retry_non_idempotent: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::strict(DEFAULT_MAX_RETRIES)
    }
}

impl RetryPolicy {
    /// Fail fast on any error.
    #[must_use]
    pub const fn strict(max_retries: u32) -> Self {
        Self {
            max_retries,
            raise_on_transport_error: true,
            raise_on_status_error: true,
            retry_non_idempotent: false,
        }
    }

    /// Retry every failure up to `max_retries` times, then return no result.
    #[must_use]
    pub const fn lenient(max_retries: u32) -> Self {
        Self {
            max_retries,
            raise_on_transport_error: false,
            raise_on_status_error: false,
            retry_non_idempotent: false,
        }
    }

    /// Total attempts for a retryable request.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Total attempts for a request with the given method.
    #[must_use]
    pub const fn attempts_for(&self, method: HttpMethod) -> u32 {
        if method.is_idempotent() || self.retry_non_idempotent {
            self.attempts()
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_strict_with_five_retries() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.attempts(), 6);
        assert!(policy.raise_on_transport_error);
        assert!(policy.raise_on_status_error);
    }

    #[test]
    fn test_post_gets_single_attempt_unless_enabled() {
        let mut policy = RetryPolicy::lenient(3);
        assert_eq!(policy.attempts_for(HttpMethod::Get), 4);
        assert_eq!(policy.attempts_for(HttpMethod::Put), 4);
        assert_eq!(policy.attempts_for(HttpMethod::Delete), 4);
        assert_eq!(policy.attempts_for(HttpMethod::Post), 1);

        policy.retry_non_idempotent = true;
        assert_eq!(policy.attempts_for(HttpMethod::Post), 4);
    }

    #[test]
    fn test_attempts_saturate() {
        assert_eq!(RetryPolicy::lenient(u32::MAX).attempts(), u32::MAX);
    }
}
