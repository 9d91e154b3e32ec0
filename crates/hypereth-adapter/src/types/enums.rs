/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for HyperETH API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Target environment for HyperETH and Hyperliquid endpoints.
///
/// Serializes as `"Mainnet"` / `"Testnet"`, the wire values used by the
/// `hyperliquidChain` field of user-signed actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Mainnet,
    Testnet,
}

impl Environment {
    pub fn is_mainnet(self) -> bool {
        matches!(self, Environment::Mainnet)
    }

    /// Value used in `env=` query parameters.
    pub fn query_value(self) -> &'static str {
        match self {
            Environment::Mainnet => "mainnet",
            Environment::Testnet => "testnet",
        }
    }

    /// `source` field of the L1 `Agent` EIP-712 struct.
    pub fn agent_source(self) -> &'static str {
        match self {
            Environment::Mainnet => "a",
            Environment::Testnet => "b",
        }
    }

    /// Public Hyperliquid API base URL, used for builder fee approval
    /// which must happen before an API key exists.
    pub fn hyperliquid_api_url(self) -> &'static str {
        match self {
            Environment::Mainnet => "https://api.hyperliquid.xyz",
            Environment::Testnet => "https://api.hyperliquid-testnet.xyz",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Environment::Mainnet => "Mainnet",
            Environment::Testnet => "Testnet",
        })
    }
}
