/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - response bodies for HyperETH endpoints
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{ApiKey, default_true};
use crate::hyperliquid::ExchangeResponse;

/// Response from POST /v1/api_key/register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyRegistration {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Response from POST /v1/api_key/list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyList {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub api_keys: Vec<ApiKey>,
}

/// Response from DELETE /v1/api_key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyDeletion {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response from DELETE /v1/hl/agent_wallet/{address}.
///
/// Deleting only removes the wallet from HyperETH; the `note` field carries
/// the server's reminder that Hyperliquid-side revocation is manual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentWalletDeletion {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Response from POST /v1/trade/intent (REST or WebSocket).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeIntentResponse {
    #[serde(default)]
    pub intent_hash: Option<String>,
    #[serde(default)]
    pub agg_order_id: Option<serde_json::Value>,
    #[serde(default)]
    pub hl_response: Option<ExchangeResponse>,
}

impl TradeIntentResponse {
    /// True when the forwarded Hyperliquid response reports `status: "ok"`.
    pub fn is_ok(&self) -> bool {
        self.hl_response.as_ref().is_some_and(|r| r.is_ok())
    }
}
