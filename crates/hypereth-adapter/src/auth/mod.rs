/*
[INPUT]:  Wallet private keys and messages to sign
[OUTPUT]: EIP-191 signatures and wallet addresses
[POS]:    Auth layer - wallet-based request authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod evm_wallet;
pub mod messages;
pub mod wallet;

pub use evm_wallet::EvmWalletSigner;
pub use messages::{
    delete_api_key_message, list_api_keys_message, register_api_key_message, timestamp_nonce_ms,
};
pub use wallet::{MockWalletSigner, WalletSigner};
