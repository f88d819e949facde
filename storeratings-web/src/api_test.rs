//! Tests for the API client.
//!
//! Covers URL construction, bearer-token lifecycle on the shared client, and
//! the message chosen for rejected responses.

use crate::api::{FALLBACK_ERROR_MESSAGE, StoreRatingsClient, rejection_message};
use shared::models::ErrorResponse;

#[test]
fn trailing_slash_is_trimmed_from_base_url() {
    let client = StoreRatingsClient::new("http://localhost:8080/api/");
    client.set_bearer_token(None);
    assert!(client.current_bearer_token().is_none());
}

#[test]
fn bearer_token_roundtrip() {
    let client = StoreRatingsClient::new("/api");
    assert_eq!(client.current_bearer_token(), None);

    client.set_bearer_token(Some("tok-abc".to_string()));
    assert_eq!(client.current_bearer_token().as_deref(), Some("tok-abc"));

    client.set_bearer_token(None);
    assert_eq!(client.current_bearer_token(), None);
}

#[test]
fn clones_observe_token_changes() {
    let client = StoreRatingsClient::new("/api");
    let clone = client.clone();

    client.set_bearer_token(Some("tok-shared".to_string()));
    assert_eq!(clone.current_bearer_token().as_deref(), Some("tok-shared"));

    clone.set_bearer_token(None);
    assert_eq!(client.current_bearer_token(), None);
}

#[test]
fn shared_client_is_one_instance() {
    StoreRatingsClient::shared().set_bearer_token(Some("tok-shared-2".to_string()));
    assert_eq!(
        StoreRatingsClient::shared().current_bearer_token().as_deref(),
        Some("tok-shared-2")
    );
    StoreRatingsClient::shared().set_bearer_token(None);
    assert!(StoreRatingsClient::shared().current_bearer_token().is_none());
}

#[test]
fn rejection_prefers_server_message() {
    let message = rejection_message(Some(ErrorResponse::new("Email already registered")));
    assert_eq!(message, "Email already registered");
}

#[test]
fn rejection_falls_back_without_body() {
    assert_eq!(rejection_message(None), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn rejection_falls_back_on_blank_message() {
    let message = rejection_message(Some(ErrorResponse::new("   ")));
    assert_eq!(message, FALLBACK_ERROR_MESSAGE);
}
