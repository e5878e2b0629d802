//! Integration tests for client configuration and endpoint resolution.

use std::collections::HashMap;
use std::time::Duration;

use contentstack_management::config::DEFAULT_TIMEOUT;
use contentstack_management::{
    AuthToken, ClientConfig, ConfigError, ContentstackClient, Region, RetryPolicy,
};

#[test]
fn test_every_region_resolves_to_its_api_host() {
    let expected = [
        (Region::Us, "https://api.contentstack.com/v3/"),
        (Region::Eu, "https://eu-api.contentstack.com/v3/"),
        (Region::Au, "https://au-api.contentstack.com/v3/"),
        (Region::AzureNa, "https://azure-na-api.contentstack.com/v3/"),
        (Region::AzureEu, "https://azure-eu-api.contentstack.com/v3/"),
        (Region::GcpNa, "https://gcp-na-api.contentstack.com/v3/"),
        (Region::GcpEu, "https://gcp-eu-api.contentstack.com/v3/"),
    ];

    for (region, url) in expected {
        let config = ClientConfig::builder().region(region).build().unwrap();
        assert_eq!(config.endpoint().as_str(), url, "region {region}");
    }
}

#[test]
fn test_region_parsed_from_string() {
    let region: Region = "azure_na".parse().unwrap();
    let client = ContentstackClient::new(ClientConfig::builder().region(region).build().unwrap())
        .unwrap();

    assert_eq!(
        client.endpoint().as_str(),
        "https://azure-na-api.contentstack.com/v3/"
    );
}

#[test]
fn test_explicit_host_scheme_and_version() {
    let config = ClientConfig::builder()
        .host("api.contentstack.example")
        .region(Region::Eu)
        .scheme("http")
        .api_version("v4")
        .build()
        .unwrap();

    assert_eq!(
        config.endpoint().as_str(),
        "http://api.contentstack.example/v4/"
    );
}

#[test]
fn test_blank_host_without_region_is_unresolvable() {
    let result = ClientConfig::builder().host("  ").build();
    assert!(matches!(result, Err(ConfigError::UnresolvableEndpoint)));
}

#[test]
fn test_endpoint_override_wins() {
    let config = ClientConfig::builder()
        .region(Region::Au)
        .endpoint("https://proxy.internal/cma/v3")
        .build()
        .unwrap();

    assert_eq!(config.endpoint().as_str(), "https://proxy.internal/cma/v3/");
    assert_eq!(config.endpoint().join("stacks"), "https://proxy.internal/cma/v3/stacks");
}

#[test]
fn test_defaults() {
    let config = ClientConfig::default();

    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    assert_eq!(config.retry_policy(), &RetryPolicy::default());
    assert_eq!(config.headers().content_type(), "application/json");
}

#[test]
fn test_caller_headers_are_not_mutated() {
    let mut caller = HashMap::new();
    caller.insert("x-project".to_string(), "cms-sync".to_string());
    caller.insert("Content-Type".to_string(), "text/plain".to_string());
    let snapshot = caller.clone();

    let config = ClientConfig::builder()
        .headers(caller.clone())
        .authtoken(AuthToken::new("tok").unwrap())
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    assert_eq!(caller, snapshot);
    let sent = config.headers().to_map();
    assert_eq!(sent.get("x-project").map(String::as_str), Some("cms-sync"));
    assert_eq!(
        sent.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(sent.get("authtoken").map(String::as_str), Some("tok"));
}
