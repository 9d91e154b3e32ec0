/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for hypereth-adapter tests

use hypereth_adapter::{ClientConfig, Environment, HyperethClient};
use wiremock::MockServer;

/// A well-known test private key (never use with real funds)
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address derived from TEST_PRIVATE_KEY
#[allow(dead_code)]
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Testnet client with both base URLs pointed at the mock server
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> HyperethClient {
    HyperethClient::with_config_and_base_urls(
        ClientConfig::default(),
        Environment::Testnet,
        &server.uri(),
        &server.uri(),
    )
    .expect("client init")
}
