/*
[INPUT]:  HTTP configuration (base URLs, timeouts, API key, environment)
[OUTPUT]: Configured reqwest client ready for HyperETH API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{HyperethError, Result};
use crate::types::Environment;

/// Base URL for the HyperETH API
const API_BASE_URL: &str = "https://api.hypereth.io";

const USER_AGENT: &str = concat!("hypereth-adapter/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the HyperETH API.
///
/// Two base URLs are in play: the HyperETH API itself (API key management,
/// agent wallets, trade intents, and proxied Hyperliquid /info and /exchange
/// calls) and the public Hyperliquid API, used only for builder fee approval
/// since that step happens before any API key exists.
#[derive(Debug)]
pub struct HyperethClient {
    http_client: Client,
    api_base_url: Url,
    hyperliquid_base_url: Url,
    api_key: Option<String>,
    environment: Environment,
}

impl HyperethClient {
    /// Create a new client with default configuration
    pub fn new(environment: Environment) -> Result<Self> {
        Self::with_config(ClientConfig::default(), environment)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, environment: Environment) -> Result<Self> {
        Self::with_config_and_base_urls(
            config,
            environment,
            API_BASE_URL,
            environment.hyperliquid_api_url(),
        )
    }

    /// Create a new client with explicit base URLs (used by tests)
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        environment: Environment,
        api_base_url: &str,
        hyperliquid_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            api_base_url: Url::parse(api_base_url)?,
            hyperliquid_base_url: Url::parse(hyperliquid_base_url)?,
            api_key: None,
            environment,
        })
    }

    /// Set or replace the API key sent as the x-api-key header
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Get the configured API key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Error out unless an API key has been configured
    pub(crate) fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| HyperethError::Config("API key is required for this operation".into()))
    }

    /// Build full URL for a HyperETH endpoint, appending the env parameter
    /// on testnet
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        let mut url = self.api_base_url.join(endpoint)?;
        if !self.environment.is_mainnet() {
            url.query_pairs_mut()
                .append_pair("env", self.environment.query_value());
        }
        Ok(url)
    }

    /// Build request builder for HyperETH endpoints
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        let mut builder = self.http_client.request(method, url);
        if let Some(api_key) = &self.api_key {
            builder = builder.header("x-api-key", api_key);
        }
        Ok(builder)
    }

    /// Build request builder for the public Hyperliquid API (no API key)
    pub(crate) fn hyperliquid_request(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<RequestBuilder> {
        let url = self.hyperliquid_base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON response, mapping non-2xx statuses
    /// to `HyperethError::Api` with the server's message field when present.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if let Some(request_id) = response.headers().get("x-request-id") {
            debug!(request_id = ?request_id, "HTTP response");
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(HyperethError::api_error(status, error_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            HyperethError::InvalidResponse(format!("failed to decode response body: {e}"))
        })
    }
}

/// Extract the server's error message from a JSON body, falling back to the
/// raw body or the HTTP status line.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
    {
        return message.to_string();
    }
    if body.trim().is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HyperethClient::new(Environment::Testnet).unwrap();
        assert!(client.api_key().is_none());
        assert_eq!(client.environment(), Environment::Testnet);
    }

    #[test]
    fn test_api_key_roundtrip() {
        let mut client = HyperethClient::new(Environment::Testnet).unwrap();
        client.set_api_key("hk_test_key");
        assert_eq!(client.api_key(), Some("hk_test_key"));
        assert!(client.require_api_key().is_ok());
    }

    #[test]
    fn test_require_api_key_without_key() {
        let client = HyperethClient::new(Environment::Testnet).unwrap();
        let err = client.require_api_key().unwrap_err();
        assert!(matches!(err, HyperethError::Config(_)));
    }

    #[test]
    fn test_testnet_env_param() {
        let client = HyperethClient::new(Environment::Testnet).unwrap();
        let url = client.api_url("/v1/api_key/register").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.hypereth.io/v1/api_key/register?env=testnet"
        );
    }

    #[test]
    fn test_mainnet_no_env_param() {
        let client = HyperethClient::new(Environment::Mainnet).unwrap();
        let url = client.api_url("/v1/hl/info").unwrap();
        assert_eq!(url.as_str(), "https://api.hypereth.io/v1/hl/info");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message":"bad nonce"}"#),
            "bad nonce"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "HTTP 404");
    }
}
