/*
[INPUT]:  EVM private key (hex string)
[OUTPUT]: EIP-191 signatures and checksummed wallet address
[POS]:    Auth layer - local EVM wallet implementation
[UPDATE]: When signing logic or address formatting changes
*/

use std::str::FromStr;

use alloy::signers::Signer;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::WalletSigner;
use crate::http::{HyperethError, Result};

/// Signer backed by a local EVM private key.
pub struct EvmWalletSigner {
    signer: PrivateKeySigner,
    address: String,
}

impl EvmWalletSigner {
    /// Create a new EVM wallet signer from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| HyperethError::Config(format!("Invalid EVM private key: {}", e)))?;

        let address = signer.address().to_checksum(None);

        Ok(Self { signer, address })
    }

    /// The underlying alloy signer, for EIP-712 typed-data signing.
    pub fn alloy_signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

#[async_trait]
impl WalletSigner for EvmWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| HyperethError::Signing(format!("Failed to sign EVM message: {}", e)))?;

        // alloy's Signature as_bytes() returns [r, s, v]
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}
