//! Valkey repository integration tests
//!
//! These tests need a live Valkey server; set VALKEY_URL and run with
//! `cargo test -- --ignored`.

use std::collections::HashMap;
use std::time::Duration;

use url::Url;
use vigil_adapters::ValkeyEndpointRepository;
use vigil_core::{Endpoint, EndpointPayload};
use vigil_ports::EndpointRepository;

fn store_url() -> String {
    std::env::var("VALKEY_URL").expect("VALKEY_URL must be set for integration tests")
}

fn sample_endpoint(identifier: &str) -> Endpoint {
    Endpoint {
        identifier: identifier.to_string(),
        url: Url::parse("https://example.com/").unwrap(),
        method: "GET".to_string(),
        status_online: 200,
        frequency: Duration::from_secs(30),
        fail_after: 3,
    }
}

#[tokio::test]
#[ignore]
async fn store_and_fetch_against_live_valkey() {
    let repository = ValkeyEndpointRepository::connect(&store_url())
        .await
        .unwrap();

    let endpoint = sample_endpoint("vigil-integration-test");
    repository
        .store(&endpoint.identifier, &endpoint.to_fields())
        .await
        .unwrap();

    assert!(repository.exists(&endpoint.identifier).await.unwrap());

    let fields: HashMap<String, String> =
        repository.fetch(&endpoint.identifier).await.unwrap();
    let decoded = Endpoint::try_from(EndpointPayload::from_fields(&fields)).unwrap();
    assert_eq!(decoded, endpoint);

    let identifiers = repository.list_identifiers().await.unwrap();
    assert!(identifiers.contains(&endpoint.identifier));
}

#[tokio::test]
#[ignore]
async fn fetch_of_unknown_identifier_is_not_found() {
    let repository = ValkeyEndpointRepository::connect(&store_url())
        .await
        .unwrap();

    let result = repository.fetch("vigil-integration-test-missing").await;
    assert!(result.is_err());
}
