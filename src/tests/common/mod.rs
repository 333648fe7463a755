// tests/common/mod.rs
pub use serde_json::json;

use crate::config::settings::EndpointsConfig;
use crate::model::request::ProvisioningRequest;
use crate::store::MemoryStore;
use crate::workflow::Provisioner;
use httpmock::{Method::POST, Mock, MockServer};
use std::time::Duration;

pub const TEST_TOKEN: &str = "partner-token-abc";

/// Build a provisioner wired to a mock server for both the OAuth and the
/// plan-management endpoints.
pub fn test_provisioner(server: &MockServer, store: MemoryStore) -> Provisioner<MemoryStore> {
    let endpoints = EndpointsConfig {
        oauth_url: format!("{}/oauth2/token", server.base_url()),
        api_base_url: format!("{}/rest/v1.3", server.base_url()),
    };
    Provisioner::new(&endpoints, Duration::from_secs(5), store).expect("provisioner")
}

/// A provisioner pointing at a closed port, for transport-failure cases.
pub fn unreachable_provisioner(store: MemoryStore) -> Provisioner<MemoryStore> {
    let endpoints = EndpointsConfig {
        oauth_url: "http://127.0.0.1:9/oauth2/token".to_string(),
        api_base_url: "http://127.0.0.1:9/rest/v1.3".to_string(),
    };
    Provisioner::new(&endpoints, Duration::from_secs(5), store).expect("provisioner")
}

pub fn sample_request() -> ProvisioningRequest {
    ProvisioningRequest {
        plan: "Premium".to_string(),
        site_url: "https://example.com".to_string(),
        local_user: "admin".to_string(),
        order_id: "1001".to_string(),
        client_id: "partner-id".to_string(),
        client_secret: "partner-secret".to_string(),
    }
}

/// Register the happy-path token grant mock.
pub async fn mock_token_grant(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth2/token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "access_token": TEST_TOKEN,
                    "token_type": "bearer",
                    "scope": "jetpack-partner"
                }));
        })
        .await
}
