/*
[INPUT]:  Actions, nonces, and an EVM signer
[OUTPUT]: EIP-712 signatures in Hyperliquid's r/s/v wire format
[POS]:    Hyperliquid layer - L1 and user-signed action signing
[UPDATE]: When Hyperliquid signing schemes or domains change
*/

use std::fmt;

use alloy::dyn_abi::{Eip712Types, Resolver, TypedData};
use alloy::primitives::{Address, B256, U256, keccak256};
use alloy::signers::Signer;
use alloy::sol_types::{Eip712Domain, SolStruct, eip712_domain};
use serde::{Serialize, Serializer};

use crate::http::{HyperethError, Result};
use crate::types::Environment;

/// Chain id placed in the `signatureChainId` field of user-signed actions.
/// Hyperliquid verifies user-signed payloads against this id on both
/// environments; the `hyperliquidChain` field carries the actual target.
pub const SIGNATURE_CHAIN_ID: &str = "0x66eee";

const HYPERLIQUID_EIP_PREFIX: &str = "HyperliquidTransaction:";

/// Domain for L1 action signatures (orders, cancels).
const L1_EIP712_DOMAIN: Eip712Domain = eip712_domain! {
    name: "Exchange",
    version: "1",
    chain_id: 1337,
    verifying_contract: Address::ZERO,
};

/// Domain for user-signed actions (approveAgent, approveBuilderFee).
const USER_SIGNED_EIP712_DOMAIN: Eip712Domain = eip712_domain! {
    name: "HyperliquidSignTransaction",
    version: "1",
    chain_id: 421614,
    verifying_contract: Address::ZERO,
};

/// EIP-712 struct definitions for Hyperliquid signing.
pub(crate) mod solidity {
    use alloy::sol;

    sol! {
        struct Agent {
            string source;
            bytes32 connectionId;
        }

        struct ApproveAgent {
            string hyperliquidChain;
            address agentAddress;
            string agentName;
            uint64 nonce;
        }

        struct ApproveBuilderFee {
            string hyperliquidChain;
            string maxFeeRate;
            address builder;
            uint64 nonce;
        }
    }
}

/// An secp256k1 signature in Hyperliquid's wire format:
/// `{"r": "0x…", "s": "0x…", "v": 27|28}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signature {
    #[serde(serialize_with = "serialize_u256_as_hex")]
    pub r: U256,
    #[serde(serialize_with = "serialize_u256_as_hex")]
    pub s: U256,
    pub v: u64,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:064x}{:064x}{:02x}", self.r, self.s, self.v)
    }
}

impl From<alloy::signers::Signature> for Signature {
    fn from(signature: alloy::signers::Signature) -> Self {
        let v = signature.recid().to_byte() as u64 + 27;
        Self {
            r: signature.r(),
            s: signature.s(),
            v,
        }
    }
}

fn serialize_u256_as_hex<S>(value: &U256, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:#x}", value))
}

/// Compute the `connectionId` hash of an L1 action.
///
/// The action is serialized to MessagePack with named fields, then the
/// big-endian nonce, a vault-address marker byte, and an optional expiry are
/// appended before hashing with keccak256. Field order of the action structs
/// is part of the wire format.
pub(crate) fn action_hash<T: Serialize>(
    action: &T,
    nonce: u64,
    vault_address: Option<Address>,
    expires_after: Option<u64>,
) -> Result<B256> {
    let mut bytes = rmp_serde::to_vec_named(action)
        .map_err(|e| HyperethError::Signing(format!("action encoding failed: {e}")))?;
    bytes.extend(nonce.to_be_bytes());

    if let Some(vault_address) = vault_address {
        bytes.push(1);
        bytes.extend(vault_address.as_slice());
    } else {
        bytes.push(0);
    }

    if let Some(expires_after) = expires_after {
        bytes.push(0);
        bytes.extend(expires_after.to_be_bytes());
    }

    Ok(keccak256(bytes))
}

/// Sign an L1 action hash as the EIP-712 `Agent` struct.
pub(crate) async fn sign_l1_action<S: Signer + Send + Sync>(
    signer: &S,
    environment: Environment,
    connection_id: B256,
) -> Result<Signature> {
    let agent = solidity::Agent {
        source: environment.agent_source().to_string(),
        connectionId: connection_id,
    };
    let signature = signer
        .sign_typed_data(&agent, &L1_EIP712_DOMAIN)
        .await
        .map_err(|e| HyperethError::Signing(format!("L1 action signing failed: {e}")))?;
    Ok(signature.into())
}

/// Build the typed data for a user-signed action.
///
/// Hyperliquid prefixes the primary type with `HyperliquidTransaction:`,
/// which is not expressible in the sol! macro, so the type is renamed in a
/// dynamic resolver.
fn user_signed_typed_data<T: SolStruct, M: Serialize>(message: &M) -> Result<TypedData> {
    let mut resolver = Resolver::from_struct::<T>();
    resolver
        .ingest_string(T::eip712_encode_type())
        .map_err(|e| HyperethError::Signing(format!("EIP-712 type ingestion failed: {e}")))?;

    let mut types = Eip712Types::from(&resolver);
    let fields = types
        .remove(T::NAME)
        .ok_or_else(|| HyperethError::Signing(format!("missing EIP-712 type {}", T::NAME)))?;
    let primary_type = format!("{HYPERLIQUID_EIP_PREFIX}{}", T::NAME);
    types.insert(primary_type.clone(), fields);

    Ok(TypedData {
        domain: USER_SIGNED_EIP712_DOMAIN,
        resolver: Resolver::from(types),
        primary_type,
        message: serde_json::to_value(message)?,
    })
}

/// Sign a user-signed action (approveAgent, approveBuilderFee) with the main
/// wallet.
pub(crate) async fn sign_user_signed_action<T, S, M>(signer: &S, message: &M) -> Result<Signature>
where
    T: SolStruct,
    S: Signer + Send + Sync,
    M: Serialize,
{
    let typed_data = user_signed_typed_data::<T, M>(message)?;
    let signature = signer
        .sign_dynamic_typed_data(&typed_data)
        .await
        .map_err(|e| HyperethError::Signing(format!("typed data signing failed: {e}")))?;
    Ok(signature.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperliquid::{Action, CancelAction, CancelWire};
    use alloy::signers::local::PrivateKeySigner;

    fn cancel_action() -> Action {
        Action::Cancel(CancelAction {
            cancels: vec![CancelWire { a: 1, o: 123 }],
        })
    }

    #[test]
    fn test_action_hash_is_deterministic() {
        let action = cancel_action();
        let first = action_hash(&action, 1_700_000_000_000, None, None).unwrap();
        let second = action_hash(&action, 1_700_000_000_000, None, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_action_hash_depends_on_nonce_and_vault() {
        let action = cancel_action();
        let base = action_hash(&action, 1, None, None).unwrap();
        let other_nonce = action_hash(&action, 2, None, None).unwrap();
        let with_vault = action_hash(&action, 1, Some(Address::ZERO), None).unwrap();
        let with_expiry = action_hash(&action, 1, None, Some(9)).unwrap();

        assert_ne!(base, other_nonce);
        assert_ne!(base, with_vault);
        assert_ne!(base, with_expiry);
    }

    #[tokio::test]
    async fn test_sign_l1_action_recoverable_v() {
        let signer = PrivateKeySigner::random();
        let hash = action_hash(&cancel_action(), 1, None, None).unwrap();

        let signature = sign_l1_action(&signer, Environment::Testnet, hash).await.unwrap();
        assert!(signature.v == 27 || signature.v == 28);
    }

    #[tokio::test]
    async fn test_l1_signature_differs_between_environments() {
        let signer = PrivateKeySigner::random();
        let hash = action_hash(&cancel_action(), 1, None, None).unwrap();

        let mainnet = sign_l1_action(&signer, Environment::Mainnet, hash).await.unwrap();
        let testnet = sign_l1_action(&signer, Environment::Testnet, hash).await.unwrap();
        assert_ne!(mainnet, testnet);
    }

    #[test]
    fn test_signature_wire_format() {
        let signature = Signature {
            r: U256::from(0x1234u64),
            s: U256::from(0xabcdu64),
            v: 27,
        };
        let value = serde_json::to_value(&signature).unwrap();
        assert_eq!(value["r"], "0x1234");
        assert_eq!(value["s"], "0xabcd");
        assert_eq!(value["v"], 27);
    }

    #[test]
    fn test_user_signed_typed_data_primary_type() {
        let message = serde_json::json!({
            "hyperliquidChain": "Testnet",
            "agentAddress": "0x0000000000000000000000000000000000000001",
            "agentName": "TestAgent",
            "nonce": 1,
        });
        let typed_data =
            user_signed_typed_data::<solidity::ApproveAgent, _>(&message).unwrap();
        assert_eq!(typed_data.primary_type, "HyperliquidTransaction:ApproveAgent");
        assert!(typed_data.eip712_signing_hash().is_ok());
    }
}
