/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - request bodies for HyperETH endpoints
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::hyperliquid::Action;

/// Body for POST /v1/api_key/register.
///
/// The signature is an EIP-191 signature of the registration message with
/// the nonce appended; the server recovers the wallet address from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterApiKeyRequest {
    pub signature: String,
    pub nonce: u64,
}

/// Body for POST /v1/api_key/list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListApiKeysRequest {
    pub signature: String,
    pub nonce: u64,
}

/// Body for DELETE /v1/api_key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteApiKeyRequest {
    pub api_key_to_delete: String,
    pub signature: String,
    pub nonce: u64,
}

/// Body for POST /v1/hl/agent_wallet/register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterAgentWalletRequest {
    pub name: String,
}

/// Body for POST /v1/trade/intent.
///
/// The intent carries no client signature: HyperETH signs the wrapped action
/// with the managed agent wallet before forwarding it to Hyperliquid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeIntentRequest {
    pub hl_action: IntentAction,
    pub hl_agent_wallet: String,
    pub nonce: u64,
}

/// Action wrapper inside a trade intent (`{"action": {...}}` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentAction {
    pub action: Action,
}

impl TradeIntentRequest {
    pub fn new(action: Action, agent_wallet: impl Into<String>, nonce: u64) -> Self {
        Self {
            hl_action: IntentAction { action },
            hl_agent_wallet: agent_wallet.into(),
            nonce,
        }
    }
}
