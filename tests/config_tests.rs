//! Integration tests for the Chargebee API SDK configuration system.
//!
//! These tests verify end-to-end functionality of validated newtypes and
//! the configuration builder.

use chargebee_api::{ApiEndpoint, ApiKey, ChargebeeConfig, ConfigError, SiteName};
use std::time::Duration;

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    // Create validated newtypes
    let site = SiteName::new("acme-test").unwrap();
    let api_key = ApiKey::new("test_sk_abc123").unwrap();

    // Build configuration
    let config = ChargebeeConfig::builder()
        .site(site)
        .api_key(api_key)
        .connect_timeout(Duration::from_secs(10))
        .read_timeout(Duration::from_secs(60))
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();

    // Access fields and verify
    assert_eq!(config.site().site(), "acme-test");
    assert_eq!(config.api_key().as_ref(), "test_sk_abc123");
    assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    assert_eq!(config.read_timeout(), Duration::from_secs(60));
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));
    assert_eq!(
        config.api_base_url(),
        "https://acme-test.chargebee.com/api/v2"
    );
}

#[test]
fn test_multi_site_scenario_multiple_independent_configs() {
    // Configuration for the live site
    let config_live = ChargebeeConfig::builder()
        .site(SiteName::new("acme").unwrap())
        .api_key(ApiKey::new("live_sk_1").unwrap())
        .build()
        .unwrap();

    // Configuration for the test site
    let config_test = ChargebeeConfig::builder()
        .site(SiteName::new("acme-test").unwrap())
        .api_key(ApiKey::new("test_sk_2").unwrap())
        .build()
        .unwrap();

    // Verify configurations are independent
    assert_eq!(
        config_live.api_base_url(),
        "https://acme.chargebee.com/api/v2"
    );
    assert_eq!(
        config_test.api_base_url(),
        "https://acme-test.chargebee.com/api/v2"
    );
    assert_ne!(config_live.api_key(), config_test.api_key());
}

#[test]
fn test_error_handling_invalid_inputs_produce_correct_errors() {
    // Empty API key
    let result = ApiKey::new("");
    assert!(matches!(result, Err(ConfigError::EmptyApiKey)));

    // Site name with invalid characters
    let result = SiteName::new("my site");
    assert!(matches!(result, Err(ConfigError::InvalidSiteName { .. })));

    // Site host outside chargebee.com
    let result = SiteName::new("acme.example.com");
    assert!(matches!(result, Err(ConfigError::InvalidSiteName { .. })));

    // Endpoint without a scheme
    let result = ApiEndpoint::new("acme.chargebee.com/api/v2");
    assert!(matches!(result, Err(ConfigError::InvalidApiEndpoint { .. })));

    // Missing required fields in builder
    let result = ChargebeeConfig::builder()
        .site(SiteName::new("acme").unwrap())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "api_key" })
    ));
}

#[test]
fn test_endpoint_override_redirects_base_url() {
    let config = ChargebeeConfig::builder()
        .site(SiteName::new("acme").unwrap())
        .api_key(ApiKey::new("key").unwrap())
        .endpoint(ApiEndpoint::new("http://localhost:8080/api/v2").unwrap())
        .build()
        .unwrap();

    assert_eq!(config.api_base_url(), "http://localhost:8080/api/v2");
}

#[test]
fn test_config_can_be_cloned_and_shared() {
    let config = ChargebeeConfig::builder()
        .site(SiteName::new("acme").unwrap())
        .api_key(ApiKey::new("key").unwrap())
        .build()
        .unwrap();

    // Clone the config
    let config_clone = config.clone();
    assert_eq!(config.api_key(), config_clone.api_key());

    // Verify Send + Sync by moving to a thread (compile-time check)
    let handle = std::thread::spawn(move || {
        let _ = config_clone.api_base_url();
    });
    handle.join().unwrap();
}

#[test]
fn test_api_key_never_leaks_through_debug() {
    let config = ChargebeeConfig::builder()
        .site(SiteName::new("acme").unwrap())
        .api_key(ApiKey::new("live_sk_super_secret").unwrap())
        .build()
        .unwrap();

    let debug_output = format!("{config:?}");
    assert!(debug_output.contains("ChargebeeConfig"));
    assert!(!debug_output.contains("live_sk_super_secret"));
}
