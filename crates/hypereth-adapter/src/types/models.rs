/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - resource models owned by the HyperETH API
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub(crate) fn default_true() -> bool {
    true
}

/// An API key registered with HyperETH for a main wallet address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(rename = "api_key")]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// An agent wallet managed by HyperETH on behalf of an API key.
///
/// Registration only creates the wallet on HyperETH; the main wallet still
/// has to approve it on Hyperliquid before it can trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentWallet {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
