//! Shared test vectors for list-fetch classification.
//!
//! # Design
//! Each case in `test-vectors/list.json` pairs a simulated HTTP response with
//! the view-state the client must produce. Items are compared as raw JSON so
//! the vectors stay independent of the typed DTOs.

use octofit_core::{Environment, HttpResponse, ListClient, ResourceKind, ViewState};
use serde_json::Value;

fn client() -> ListClient {
    ListClient::new(Environment::local())
}

fn vectors() -> Vec<Value> {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in vectors() {
        let name = case["name"].as_str().unwrap();
        let kind: ResourceKind = case["resource"].as_str().unwrap().parse().unwrap();

        // Verify build
        let req = c.build_list(kind);
        assert_eq!(req.url, format!("http://localhost:8000/api/{kind}/"), "{name}: url");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        );
        let state = ViewState::from(c.parse_list::<Value>(response));

        let expected = &case["expected_state"];
        if let Some(items) = expected.get("ready") {
            assert_eq!(state, ViewState::Ready(items.as_array().unwrap().clone()), "{name}: ready");
        } else if let Some(message) = expected.get("failed") {
            assert_eq!(state.error(), message.as_str(), "{name}: failed");
        } else {
            let message = state.error().unwrap_or_default();
            assert!(message.starts_with("Failed to decode response"), "{name}: {message}");
        }
    }
}

#[test]
fn every_case_settles_to_exactly_one_state() {
    let c = client();
    for case in vectors() {
        let sim = &case["simulated_response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        );
        let state = ViewState::from(c.parse_list::<Value>(response));
        assert!(!state.is_loading());
        assert_ne!(state.error().is_some(), matches!(state, ViewState::Ready(_)));
    }
}
