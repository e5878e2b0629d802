//! Contentstack region definitions.
//!
//! This module provides the [`Region`] enum used to select the geographic or
//! cloud-provider variant of the management API host.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Contentstack data region.
///
/// Every region except [`Region::Us`] is served from a prefixed host
/// (`<region>-api.<domain>`); the US region uses the bare `api.<domain>`.
///
/// # Example
///
/// ```rust
/// use contentstack_management::Region;
///
/// let region: Region = "azure-eu".parse().unwrap();
/// assert_eq!(region, Region::AzureEu);
/// assert_eq!(region.to_string(), "azure-eu");
/// assert_eq!(Region::default(), Region::Us);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    /// North America (AWS). The default region.
    #[default]
    Us,
    /// Europe (AWS).
    Eu,
    /// Australia (AWS).
    Au,
    /// North America (Azure).
    AzureNa,
    /// Europe (Azure).
    AzureEu,
    /// North America (Google Cloud).
    GcpNa,
    /// Europe (Google Cloud).
    GcpEu,
}

impl Region {
    /// Returns every supported region.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Us,
            Self::Eu,
            Self::Au,
            Self::AzureNa,
            Self::AzureEu,
            Self::GcpNa,
            Self::GcpEu,
        ]
    }

    /// Returns the region tag as used in host names and configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Au => "au",
            Self::AzureNa => "azure-na",
            Self::AzureEu => "azure-eu",
            Self::GcpNa => "gcp-na",
            Self::GcpEu => "gcp-eu",
        }
    }

    /// Returns `true` for the region served from the unprefixed host.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Us)
    }

    /// Builds the management API host name for this region.
    ///
    /// ```rust
    /// use contentstack_management::Region;
    ///
    /// assert_eq!(Region::Us.api_host("contentstack.com"), "api.contentstack.com");
    /// assert_eq!(Region::GcpNa.api_host("contentstack.com"), "gcp-na-api.contentstack.com");
    /// ```
    #[must_use]
    pub fn api_host(&self, domain: &str) -> String {
        if self.is_default() {
            format!("api.{domain}")
        } else {
            format!("{}-api.{domain}", self.as_str())
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");

        match normalized.as_str() {
            "us" | "na" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            "au" => Ok(Self::Au),
            "azure-na" => Ok(Self::AzureNa),
            "azure-eu" => Ok(Self::AzureEu),
            "gcp-na" => Ok(Self::GcpNa),
            "gcp-eu" => Ok(Self::GcpEu),
            _ => Err(ConfigError::InvalidRegion {
                region: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parses_known_tags() {
        assert_eq!("us".parse::<Region>().unwrap(), Region::Us);
        assert_eq!("EU".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!("azure_na".parse::<Region>().unwrap(), Region::AzureNa);
        assert_eq!(" gcp-eu ".parse::<Region>().unwrap(), Region::GcpEu);
    }

    #[test]
    fn test_region_rejects_unknown_tag() {
        let result = "mars".parse::<Region>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRegion { region }) if region == "mars"
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for region in Region::all() {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_api_host_prefixes_non_default_regions() {
        for region in Region::all() {
            let host = region.api_host("contentstack.com");
            if region.is_default() {
                assert_eq!(host, "api.contentstack.com");
            } else {
                assert_eq!(host, format!("{}-api.contentstack.com", region.as_str()));
            }
        }
    }
}
