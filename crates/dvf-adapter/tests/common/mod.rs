/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for dvf-adapter tests

use dvf_adapter::{ClientConfig, DvfClient};
use wiremock::MockServer;

/// Well-known test private key (hardhat account #0)
#[allow(dead_code)]
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at a mock server
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> DvfClient {
    DvfClient::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri(),
        TEST_PRIVATE_KEY,
        "main",
    )
    .expect("client init")
}
