//! Tests for ApiClient

use std::time::Duration;

use super::*;
use crate::api::ChatModel;

const TIMEOUT: Duration = Duration::from_secs(2);

/// Nothing listens on port 1, so connections are refused immediately
const UNREACHABLE: &str = "http://127.0.0.1:1";

#[test]
fn test_new_accepts_http_base_url() {
    let client = ApiClient::new("http://localhost:8000", None, TIMEOUT).unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    assert!(!client.has_api_key());
}

#[test]
fn test_new_rejects_invalid_base_url() {
    let result = ApiClient::new("not a url", None, TIMEOUT);
    assert!(matches!(result, Err(ApiError::NotConfigured(_))));
}

#[test]
fn test_new_rejects_non_http_scheme() {
    let result = ApiClient::new("ftp://example.com", None, TIMEOUT);
    assert!(matches!(result, Err(ApiError::NotConfigured(_))));
}

#[test]
fn test_blank_api_key_is_ignored() {
    let client = ApiClient::new(UNREACHABLE, Some("   ".to_string()), TIMEOUT).unwrap();
    assert!(!client.has_api_key());
}

#[test]
fn test_debug_output_redacts_api_key() {
    let client = ApiClient::new(UNREACHABLE, Some("sk-secret-123".to_string()), TIMEOUT).unwrap();
    let debug = format!("{:?}", client);
    assert!(debug.contains("ApiClient"));
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("sk-secret-123"));
}

#[test]
fn test_endpoint_joins_paths() {
    let client = ApiClient::new("http://localhost:8000/", None, TIMEOUT).unwrap();
    assert_eq!(client.endpoint("suggest"), "http://localhost:8000/suggest");
    assert_eq!(
        client.endpoint("/conversation/7/messages"),
        "http://localhost:8000/conversation/7/messages"
    );
}

#[test]
fn test_endpoint_keeps_base_path_prefix() {
    let client = ApiClient::new("https://example.com/api", None, TIMEOUT).unwrap();
    assert_eq!(client.endpoint("completion"), "https://example.com/api/completion");
}

#[test]
fn test_error_message_uses_detail_string() {
    assert_eq!(error_message(r#"{"detail": "model not implemented"}"#), "model not implemented");
}

#[test]
fn test_error_message_serializes_structured_detail() {
    let message = error_message(r#"{"detail": [{"loc": ["body", "query"]}]}"#);
    assert!(message.contains("query"));
}

#[test]
fn test_error_message_falls_back_to_raw_body() {
    assert_eq!(error_message("Internal Server Error\n"), "Internal Server Error");
    assert_eq!(error_message(""), "Unknown error");
}

#[tokio::test]
async fn test_suggest_unreachable_service_is_network_error() {
    let client = ApiClient::new(UNREACHABLE, None, TIMEOUT).unwrap();
    let result = client.suggest("hello", 5).await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_complete_unreachable_service_is_network_error() {
    let client = ApiClient::new(UNREACHABLE, Some("key".to_string()), TIMEOUT).unwrap();
    let request = CompletionRequest::new("hello", ChatModel::OpenAi, None);
    let result = client.complete(&request).await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}
