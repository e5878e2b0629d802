//! Host/region resolution for the management API endpoint.
//!
//! The endpoint is resolved once when a [`ClientConfig`](crate::ClientConfig)
//! is built and then reused for every request.

use std::fmt;

use crate::config::Region;
use crate::error::ConfigError;

/// Domain used to build region hosts.
pub const DEFAULT_DOMAIN: &str = "contentstack.com";

/// Scheme used when none is configured.
pub const DEFAULT_SCHEME: &str = "https://";

/// API version segment used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v3";

/// A fully resolved API endpoint, e.g. `https://eu-api.contentstack.com/v3/`.
///
/// Relative request paths are appended directly to [`Endpoint::as_str`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme: String,
    host: String,
    version: String,
}

impl Endpoint {
    /// Resolves the endpoint from an explicit host or a region.
    ///
    /// An explicit, non-blank host wins and is used verbatim. Otherwise the
    /// region selects the host; a missing region means [`Region::Us`]. A host
    /// that was given but is blank, with no region to fall back on, cannot be
    /// resolved.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnresolvableEndpoint`] when neither input is usable
    /// - [`ConfigError::InvalidScheme`] for anything other than http/https
    /// - [`ConfigError::EmptyApiVersion`] for a blank version segment
    ///
    /// # Example
    ///
    /// ```rust
    /// use contentstack_management::config::Endpoint;
    /// use contentstack_management::Region;
    ///
    /// let endpoint = Endpoint::resolve(None, Some(Region::Eu), None, None, "contentstack.com").unwrap();
    /// assert_eq!(endpoint.as_str(), "https://eu-api.contentstack.com/v3/");
    /// ```
    pub fn resolve(
        host: Option<&str>,
        region: Option<Region>,
        scheme: Option<&str>,
        version: Option<&str>,
        domain: &str,
    ) -> Result<Self, ConfigError> {
        let scheme = normalize_scheme(scheme.unwrap_or(DEFAULT_SCHEME))?;
        let version = normalize_version(version.unwrap_or(DEFAULT_API_VERSION))?;

        let explicit_host = host
            .map(|h| h.trim().trim_end_matches('/'))
            .filter(|h| !h.is_empty());

        let host = match (explicit_host, host, region) {
            (Some(h), _, _) => h.to_string(),
            (None, Some(_), None) => return Err(ConfigError::UnresolvableEndpoint),
            (None, _, region) => region.unwrap_or_default().api_host(domain),
        };

        Ok(Self {
            url: format!("{scheme}{host}/{version}/"),
            scheme,
            host,
            version,
        })
    }

    /// Wraps an explicit endpoint override, bypassing host/region resolution.
    ///
    /// A trailing `/` is appended when missing so relative paths join cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no http(s)
    /// scheme or no host.
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let trimmed = url.trim();
        let invalid = || ConfigError::InvalidEndpoint {
            url: url.to_string(),
        };

        let (scheme, rest) = ["https://", "http://"]
            .iter()
            .find_map(|s| {
                trimmed
                    .get(..s.len())
                    .filter(|prefix| prefix.eq_ignore_ascii_case(s))
                    .map(|_| (*s, &trimmed[s.len()..]))
            })
            .ok_or_else(invalid)?;

        let mut parts = rest.splitn(2, '/');
        let host = parts.next().filter(|h| !h.is_empty()).ok_or_else(invalid)?;
        let version = parts.next().unwrap_or_default().trim_matches('/');

        let mut url = format!("{scheme}{rest}");
        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            url,
            scheme: scheme.to_string(),
            host: host.to_string(),
            version: version.to_string(),
        })
    }

    /// Returns the full endpoint URL, always ending in `/`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Returns the scheme, including `://`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the API version segment (may be empty for overrides).
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Joins a relative path onto the endpoint.
    ///
    /// ```rust
    /// use contentstack_management::config::Endpoint;
    ///
    /// let endpoint = Endpoint::from_url("https://api.contentstack.io/v3").unwrap();
    /// assert_eq!(endpoint.join("/stacks"), "https://api.contentstack.io/v3/stacks");
    /// ```
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

fn normalize_scheme(scheme: &str) -> Result<String, ConfigError> {
    let bare = scheme.trim().trim_end_matches("://").to_lowercase();
    match bare.as_str() {
        "https" | "http" => Ok(format!("{bare}://")),
        _ => Err(ConfigError::InvalidScheme {
            scheme: scheme.to_string(),
        }),
    }
}

fn normalize_version(version: &str) -> Result<String, ConfigError> {
    let version = version.trim().trim_matches('/');
    if version.is_empty() {
        return Err(ConfigError::EmptyApiVersion);
    }
    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_matches_host_template() {
        for region in Region::all() {
            let endpoint =
                Endpoint::resolve(None, Some(region), None, None, DEFAULT_DOMAIN).unwrap();
            let expected = if region.is_default() {
                "https://api.contentstack.com/v3/".to_string()
            } else {
                format!("https://{region}-api.contentstack.com/v3/")
            };
            assert_eq!(endpoint.as_str(), expected);
        }
    }

    #[test]
    fn test_missing_region_defaults_to_us() {
        let endpoint = Endpoint::resolve(None, None, None, None, DEFAULT_DOMAIN).unwrap();
        assert_eq!(endpoint.as_str(), "https://api.contentstack.com/v3/");
        assert_eq!(endpoint.host(), "api.contentstack.com");
    }

    #[test]
    fn test_explicit_host_is_used_verbatim() {
        let endpoint = Endpoint::resolve(
            Some("custom.example.com"),
            Some(Region::Eu),
            Some("http"),
            Some("v4"),
            DEFAULT_DOMAIN,
        )
        .unwrap();
        assert_eq!(endpoint.as_str(), "http://custom.example.com/v4/");
        assert_eq!(endpoint.scheme(), "http://");
        assert_eq!(endpoint.version(), "v4");
    }

    #[test]
    fn test_blank_host_falls_back_to_region() {
        let endpoint =
            Endpoint::resolve(Some("  "), Some(Region::Au), None, None, DEFAULT_DOMAIN).unwrap();
        assert_eq!(endpoint.as_str(), "https://au-api.contentstack.com/v3/");
    }

    #[test]
    fn test_blank_host_without_region_is_unresolvable() {
        let result = Endpoint::resolve(Some(""), None, None, None, DEFAULT_DOMAIN);
        assert!(matches!(result, Err(ConfigError::UnresolvableEndpoint)));
    }

    #[test]
    fn test_invalid_scheme_is_rejected() {
        let result = Endpoint::resolve(None, None, Some("ftp://"), None, DEFAULT_DOMAIN);
        assert!(matches!(result, Err(ConfigError::InvalidScheme { .. })));
    }

    #[test]
    fn test_empty_version_is_rejected() {
        let result = Endpoint::resolve(None, None, None, Some("/"), DEFAULT_DOMAIN);
        assert!(matches!(result, Err(ConfigError::EmptyApiVersion)));
    }

    #[test]
    fn test_from_url_appends_trailing_slash() {
        let endpoint = Endpoint::from_url("http://127.0.0.1:8080/v3").unwrap();
        assert_eq!(endpoint.as_str(), "http://127.0.0.1:8080/v3/");
        assert_eq!(endpoint.host(), "127.0.0.1:8080");
        assert_eq!(endpoint.version(), "v3");
    }

    #[test]
    fn test_from_url_rejects_missing_scheme() {
        assert!(matches!(
            Endpoint::from_url("api.contentstack.io/v3"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Endpoint::from_url("https://"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_join_strips_leading_slash() {
        let endpoint = Endpoint::resolve(None, None, None, None, DEFAULT_DOMAIN).unwrap();
        assert_eq!(
            endpoint.join("stacks/branches"),
            "https://api.contentstack.com/v3/stacks/branches"
        );
        assert_eq!(
            endpoint.join("/stacks"),
            "https://api.contentstack.com/v3/stacks"
        );
    }
}
