use odpt_api::client::{DATA_CENTER_BASE_URL, TOKYO_CHALLENGE_BASE_URL, TOKYO_METRO_V2_BASE_URL};
use odpt_api::{ApiVersion, Configuration, OdptClient, OdptError};
use std::sync::Arc;

/// Test that we can create a client and it has expected debug output
#[test]
fn test_client_creation() {
    let config = Arc::new(Configuration {
        base_path: DATA_CENTER_BASE_URL.to_string(),
        api_version: ApiVersion::V4,
        consumer_key: None,
        user_agent: Some("test-client/1.0".to_string()),
        client: reqwest::Client::new(),
    });

    let client = OdptClient::new(config);

    let debug_str = format!("{:?}", client);
    assert!(debug_str.contains("OdptClient"));
    assert!(debug_str.contains("api.odpt.org"));
}

/// The consumer key never shows up in debug output
#[test]
fn test_consumer_key_is_redacted() {
    let config = Configuration::data_center("super-secret-key");

    let debug_str = format!("{:?}", config);
    assert!(debug_str.contains("<redacted>"));
    assert!(!debug_str.contains("super-secret-key"));
}

#[test]
fn test_endpoint_presets() {
    let center = Configuration::data_center("k");
    assert_eq!(center.base_path, DATA_CENTER_BASE_URL);
    assert_eq!(center.api_version, ApiVersion::V4);
    assert_eq!(center.consumer_key.as_deref(), Some("k"));

    let challenge = Configuration::tokyo_challenge("k");
    assert_eq!(challenge.base_path, TOKYO_CHALLENGE_BASE_URL);
    assert_eq!(challenge.api_version, ApiVersion::V4);

    let legacy = Configuration::tokyo_metro_v2("k");
    assert_eq!(legacy.base_path, TOKYO_METRO_V2_BASE_URL);
    assert_eq!(legacy.api_version, ApiVersion::V2);

    let default = Configuration::default();
    assert!(default.consumer_key.is_none());
    assert_eq!(default.base_path, DATA_CENTER_BASE_URL);
}

/// Test error types implement expected traits
#[test]
fn test_error_types() {
    let parse_error = OdptError::Parse(
        serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err(),
    );
    let _display = format!("{}", parse_error);
    let _debug = format!("{:?}", parse_error);

    let api_error = OdptError::Api {
        status: 404,
        message: "Not Found".to_string(),
    };
    let _display = format!("{}", api_error);
    let _debug = format!("{:?}", api_error);

    let unsupported = OdptError::Unsupported {
        operation: "dump",
        version: ApiVersion::V2,
    };
    assert_eq!(unsupported.to_string(), "dump is not available on the v2 API");

    fn check_error_trait<T: std::error::Error>(_: T) {}
    check_error_trait(parse_error);
}

/// Test that error messages are meaningful
#[test]
fn test_error_messages() {
    let api_error = OdptError::Api {
        status: 403,
        message: "Invalid acl:consumerKey".to_string(),
    };

    let message = format!("{}", api_error);
    assert!(message.contains("403"));
    assert!(message.contains("Invalid acl:consumerKey"));
}
