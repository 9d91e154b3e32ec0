/*
[INPUT]:  Signed Hyperliquid actions and wallet signers
[OUTPUT]: Exchange call results (approvals, orders, cancels)
[POS]:    Hyperliquid layer - /exchange actions, proxied and direct
[UPDATE]: When adding new actions or changing the exchange flow
*/

use alloy::primitives::Address;
use alloy::signers::Signer;
use alloy::signers::local::PrivateKeySigner;
use reqwest::Method;

use super::actions::{
    Action, ActionRequest, ApproveAgent, ApproveBuilderFee, CancelAction, CancelWire, Grouping,
    OrderAction, OrderWire,
};
use super::signing::{action_hash, sign_l1_action, sign_user_signed_action, solidity};
use crate::http::{HyperethClient, Result};
use crate::hyperliquid::ExchangeResponse;
use crate::types::Environment;

/// Generate a fresh local agent wallet for direct trading.
///
/// Unlike managed agent wallets this key never leaves the client; the main
/// wallet must approve its address before it can sign orders.
pub fn generate_agent_wallet() -> PrivateKeySigner {
    PrivateKeySigner::random()
}

/// Sign a batch of orders as an L1 action ready for /exchange submission.
pub async fn sign_order_action<S: Signer + Send + Sync>(
    agent: &S,
    environment: Environment,
    orders: Vec<OrderWire>,
    nonce: u64,
) -> Result<ActionRequest> {
    let action = Action::Order(OrderAction {
        orders,
        grouping: Grouping::Na,
    });
    sign_l1_request(agent, environment, action, nonce).await
}

/// Sign a batch of cancels as an L1 action ready for /exchange submission.
pub async fn sign_cancel_action<S: Signer + Send + Sync>(
    agent: &S,
    environment: Environment,
    cancels: Vec<CancelWire>,
    nonce: u64,
) -> Result<ActionRequest> {
    let action = Action::Cancel(CancelAction { cancels });
    sign_l1_request(agent, environment, action, nonce).await
}

async fn sign_l1_request<S: Signer + Send + Sync>(
    agent: &S,
    environment: Environment,
    action: Action,
    nonce: u64,
) -> Result<ActionRequest> {
    let connection_id = action_hash(&action, nonce, None, None)?;
    let signature = sign_l1_action(agent, environment, connection_id).await?;
    Ok(ActionRequest {
        action,
        nonce,
        signature,
        vault_address: None,
        expires_after: None,
    })
}

impl HyperethClient {
    /// Approve the builder fee with the main wallet
    ///
    /// POST {hyperliquid}/exchange (direct)
    ///
    /// Goes straight to the public Hyperliquid API: approval is the first
    /// step of onboarding and happens before any API key exists.
    pub async fn approve_builder_fee<S: Signer + Send + Sync>(
        &self,
        signer: &S,
        builder: Address,
        max_fee_rate: &str,
        nonce: u64,
    ) -> Result<ExchangeResponse> {
        let approve = ApproveBuilderFee::new(self.environment(), builder, max_fee_rate, nonce);
        let signature =
            sign_user_signed_action::<solidity::ApproveBuilderFee, _, _>(signer, &approve).await?;

        let request = ActionRequest {
            action: Action::ApproveBuilderFee(approve),
            nonce,
            signature,
            vault_address: None,
            expires_after: None,
        };

        let builder_req = self.hyperliquid_request(Method::POST, "/exchange")?;
        self.send_json(builder_req.json(&request)).await
    }

    /// Approve an agent wallet for trading with the main wallet
    ///
    /// POST /v1/hl/exchange
    pub async fn approve_agent<S: Signer + Send + Sync>(
        &self,
        signer: &S,
        agent_address: Address,
        agent_name: &str,
        nonce: u64,
    ) -> Result<ExchangeResponse> {
        let approve = ApproveAgent::new(self.environment(), agent_address, agent_name, nonce);
        let signature =
            sign_user_signed_action::<solidity::ApproveAgent, _, _>(signer, &approve).await?;

        let request = ActionRequest {
            action: Action::ApproveAgent(approve),
            nonce,
            signature,
            vault_address: None,
            expires_after: None,
        };
        self.post_exchange(&request).await
    }

    /// Place a batch of orders signed by an approved agent wallet
    ///
    /// POST /v1/hl/exchange
    pub async fn place_order<S: Signer + Send + Sync>(
        &self,
        agent: &S,
        orders: Vec<OrderWire>,
        nonce: u64,
    ) -> Result<ExchangeResponse> {
        let request = sign_order_action(agent, self.environment(), orders, nonce).await?;
        self.post_exchange(&request).await
    }

    /// Cancel orders signed by an approved agent wallet
    ///
    /// POST /v1/hl/exchange
    pub async fn cancel_orders<S: Signer + Send + Sync>(
        &self,
        agent: &S,
        cancels: Vec<CancelWire>,
        nonce: u64,
    ) -> Result<ExchangeResponse> {
        let request = sign_cancel_action(agent, self.environment(), cancels, nonce).await?;
        self.post_exchange(&request).await
    }

    /// Submit a pre-signed action to the proxied exchange endpoint
    pub async fn post_exchange(&self, request: &ActionRequest) -> Result<ExchangeResponse> {
        self.require_api_key()?;
        let builder = self.api_request(Method::POST, "/v1/hl/exchange")?;
        self.send_json(builder.json(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ClientConfig;
    use crate::hyperliquid::Tif;
    use rust_decimal::Decimal;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ok_order_response() -> serde_json::Value {
        serde_json::json!({
            "status": "ok",
            "response": {"type": "order", "data": {"statuses": [{"resting": {"oid": 31415}}]}},
        })
    }

    #[tokio::test]
    async fn test_sign_order_action_envelope() {
        let agent = generate_agent_wallet();
        let order = OrderWire::limit(4, true, Decimal::from(1800), Decimal::new(1, 2), false, Tif::Gtc);

        let request = sign_order_action(&agent, Environment::Testnet, vec![order], 1_700_000_000_000)
            .await
            .expect("sign order");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["action"]["type"], "order");
        assert_eq!(value["nonce"], 1_700_000_000_000u64);
        assert_eq!(value["vaultAddress"], serde_json::Value::Null);
        assert_eq!(value["expiresAfter"], serde_json::Value::Null);
        assert!(value["signature"]["r"].as_str().unwrap().starts_with("0x"));
    }

    #[tokio::test]
    async fn test_place_order_via_proxy() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/v1/hl/exchange"))
            .and(body_partial_json(serde_json::json!({
                "action": {"type": "order", "grouping": "na"},
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_order_response()))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = HyperethClient::with_config_and_base_urls(
            ClientConfig::default(),
            Environment::Testnet,
            &server.uri(),
            &server.uri(),
        )
        .expect("client init");
        client.set_api_key("hk_test_key");

        let agent = generate_agent_wallet();
        let order = OrderWire::limit(4, true, Decimal::from(1800), Decimal::new(1, 2), false, Tif::Gtc);
        let response = client.place_order(&agent, vec![order], 1).await.expect("place");

        assert!(response.is_ok());
        assert_eq!(response.first_resting_oid(), Some(31415));
    }

    #[tokio::test]
    async fn test_approve_builder_fee_goes_direct() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/exchange"))
            .and(body_partial_json(serde_json::json!({
                "action": {
                    "type": "approveBuilderFee",
                    "maxFeeRate": "0.25%",
                    "signatureChainId": "0x66eee",
                    "hyperliquidChain": "Testnet",
                },
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "response": {"type": "default"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        // builder fee approval must work without an API key
        let client = HyperethClient::with_config_and_base_urls(
            ClientConfig::default(),
            Environment::Testnet,
            "http://127.0.0.1:9", // unroutable: proxied endpoints must not be hit
            &server.uri(),
        )
        .expect("client init");

        let wallet = generate_agent_wallet();
        let response = client
            .approve_builder_fee(
                &wallet,
                crate::hyperliquid::BUILDER_ADDRESS,
                &crate::hyperliquid::builder_max_fee_rate(),
                1_700_000_000_000,
            )
            .await
            .expect("approve builder fee");

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_approve_agent_via_proxy() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/v1/hl/exchange"))
            .and(body_partial_json(serde_json::json!({
                "action": {"type": "approveAgent", "agentName": "HyperEthBot"},
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "response": {"type": "default"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = HyperethClient::with_config_and_base_urls(
            ClientConfig::default(),
            Environment::Testnet,
            &server.uri(),
            &server.uri(),
        )
        .expect("client init");
        client.set_api_key("hk_test_key");

        let main_wallet = generate_agent_wallet();
        let agent = generate_agent_wallet();
        let response = client
            .approve_agent(&main_wallet, agent.address(), "HyperEthBot", 1)
            .await
            .expect("approve agent");

        assert!(response.is_ok());
    }
}
