/*
[INPUT]:  Wallet signer and API key identifiers
[OUTPUT]: API key registration, listing, and deletion results
[POS]:    HTTP layer - API key management endpoints (wallet-signature auth)
[UPDATE]: When key management endpoints or message formats change
*/

use reqwest::Method;

use crate::auth::{
    WalletSigner, delete_api_key_message, list_api_keys_message, register_api_key_message,
    timestamp_nonce_ms,
};
use crate::http::{HyperethClient, Result};
use crate::types::{
    ApiKey, ApiKeyDeletion, ApiKeyList, ApiKeyRegistration, DeleteApiKeyRequest,
    ListApiKeysRequest, RegisterApiKeyRequest,
};

impl HyperethClient {
    /// Register a new API key for the signing wallet
    ///
    /// POST /v1/api_key/register
    ///
    /// The wallet must have approved the builder fee first; the server
    /// recovers the wallet address from the EIP-191 signature.
    pub async fn register_api_key(&self, wallet: &dyn WalletSigner) -> Result<ApiKeyRegistration> {
        let nonce = timestamp_nonce_ms();
        let signature = wallet.sign_message(&register_api_key_message(nonce)).await?;

        let body = RegisterApiKeyRequest { signature, nonce };
        let builder = self.api_request(Method::POST, "/v1/api_key/register")?;
        self.send_json(builder.json(&body)).await
    }

    /// List all API keys owned by the signing wallet
    ///
    /// POST /v1/api_key/list
    pub async fn list_api_keys(&self, wallet: &dyn WalletSigner) -> Result<Vec<ApiKey>> {
        let nonce = timestamp_nonce_ms();
        let signature = wallet.sign_message(&list_api_keys_message(nonce)).await?;

        let body = ListApiKeysRequest { signature, nonce };
        let builder = self.api_request(Method::POST, "/v1/api_key/list")?;
        let response: ApiKeyList = self.send_json(builder.json(&body)).await?;
        Ok(response.api_keys)
    }

    /// Delete an API key owned by the signing wallet
    ///
    /// DELETE /v1/api_key
    pub async fn delete_api_key(
        &self,
        wallet: &dyn WalletSigner,
        api_key: &str,
    ) -> Result<ApiKeyDeletion> {
        let nonce = timestamp_nonce_ms();
        let signature = wallet
            .sign_message(&delete_api_key_message(api_key, nonce))
            .await?;

        let body = DeleteApiKeyRequest {
            api_key_to_delete: api_key.to_string(),
            signature,
            nonce,
        };
        let builder = self.api_request(Method::DELETE, "/v1/api_key")?;
        self.send_json(builder.json(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::MockWalletSigner;
    use crate::http::{ClientConfig, HyperethClient};
    use crate::types::Environment;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> HyperethClient {
        HyperethClient::with_config_and_base_urls(
            ClientConfig::default(),
            Environment::Testnet,
            &server.uri(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_register_api_key() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/v1/api_key/register"))
            .and(query_param("env", "testnet"))
            .and(body_partial_json(serde_json::json!({
                "signature": "0xsig",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "API key registered successfully",
                "api_key": "hk_new_key",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let wallet = MockWalletSigner::new("0xabc", "0xsig");
        let result = client.register_api_key(&wallet).await.expect("register");

        assert!(result.success);
        assert_eq!(result.api_key.as_deref(), Some("hk_new_key"));
    }

    #[tokio::test]
    async fn test_list_api_keys() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/v1/api_key/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "api_keys": [
                    {"api_key": "hk_one", "is_active": true},
                    {"api_key": "hk_two", "is_active": false},
                ],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let wallet = MockWalletSigner::new("0xabc", "0xsig");
        let keys = client.list_api_keys(&wallet).await.expect("list");

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].key, "hk_one");
        assert!(!keys[1].is_active);
    }

    #[tokio::test]
    async fn test_delete_api_key() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("DELETE"))
            .and(path("/v1/api_key"))
            .and(body_partial_json(serde_json::json!({
                "api_key_to_delete": "hk_old",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "API key deleted successfully",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let wallet = MockWalletSigner::new("0xabc", "0xsig");
        let result = client.delete_api_key(&wallet, "hk_old").await.expect("delete");

        assert!(result.success);
    }
}
