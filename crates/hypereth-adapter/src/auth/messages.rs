/*
[INPUT]:  API key operation parameters and nonces
[OUTPUT]: Canonical message strings for EIP-191 signing
[POS]:    Auth layer - message formats the server verifies signatures against
[UPDATE]: When the server-side message formats change
*/

use chrono::Utc;

/// Millisecond unix timestamp, used as the nonce for signed requests.
pub fn timestamp_nonce_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// Message signed to register a new API key.
pub fn register_api_key_message(nonce: u64) -> String {
    format!("HyperETH: API Key Registration\nNonce: {nonce}")
}

/// Message signed to list all API keys for a wallet.
pub fn list_api_keys_message(nonce: u64) -> String {
    format!("HyperETH: List All API Keys\nNonce: {nonce}")
}

/// Message signed to delete a specific API key.
pub fn delete_api_key_message(api_key: &str, nonce: u64) -> String {
    format!("HyperETH: Delete API Key: {api_key}\nNonce: {nonce}")
}
