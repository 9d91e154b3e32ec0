/*
[INPUT]:  Fixed keys, actions, and nonces
[OUTPUT]: Test results for message and action signing
[POS]:    Integration tests - signing surface
[UPDATE]: When signing schemes or message formats change
*/

mod common;

use common::{TEST_ADDRESS, TEST_PRIVATE_KEY};
use hypereth_adapter::hyperliquid::{
    builder_max_fee_rate, generate_agent_wallet, sign_cancel_action, sign_order_action,
};
use hypereth_adapter::{
    CancelWire, Environment, EvmWalletSigner, OrderWire, Tif, WalletSigner, timestamp_nonce_ms,
};
use rstest::rstest;
use rust_decimal::Decimal;
use tokio_test::assert_ok;

#[test]
fn test_wallet_address_derivation() {
    let wallet = assert_ok!(EvmWalletSigner::new(TEST_PRIVATE_KEY));
    assert_eq!(wallet.address(), TEST_ADDRESS);
}

#[rstest]
#[case(1_700_000_000_000, "HyperETH: API Key Registration\nNonce: 1700000000000")]
#[case(1, "HyperETH: API Key Registration\nNonce: 1")]
fn test_register_message_format(#[case] nonce: u64, #[case] expected: &str) {
    assert_eq!(hypereth_adapter::auth::register_api_key_message(nonce), expected);
}

#[tokio::test]
async fn test_eip191_signature_shape() {
    let wallet = assert_ok!(EvmWalletSigner::new(TEST_PRIVATE_KEY));
    let nonce = timestamp_nonce_ms();
    let message = hypereth_adapter::auth::delete_api_key_message("hk_gone", nonce);

    let signature = assert_ok!(wallet.sign_message(&message).await);
    assert!(signature.starts_with("0x"));
    // r (32) + s (32) + v (1) bytes, hex encoded
    assert_eq!(signature.len(), 132);
}

#[tokio::test]
async fn test_order_action_request_shape() {
    let agent = generate_agent_wallet();
    let order = OrderWire::limit(
        173,
        true,
        "0.21".parse::<Decimal>().unwrap(),
        Decimal::from(50),
        false,
        Tif::Gtc,
    );

    let request = assert_ok!(
        sign_order_action(&agent, Environment::Testnet, vec![order], 1_700_000_000_000).await
    );
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["action"]["type"], "order");
    assert_eq!(value["action"]["grouping"], "na");
    assert_eq!(value["action"]["orders"][0]["p"], "0.21");
    assert_eq!(value["nonce"], 1_700_000_000_000u64);
    assert_eq!(value["vaultAddress"], serde_json::Value::Null);
    let v = value["signature"]["v"].as_u64().unwrap();
    assert!(v == 27 || v == 28);
}

#[tokio::test]
async fn test_same_action_same_nonce_signs_identically() {
    let agent = generate_agent_wallet();
    let cancels = vec![CancelWire { a: 1, o: 42 }];

    let first = assert_ok!(
        sign_cancel_action(&agent, Environment::Testnet, cancels.clone(), 7).await
    );
    let second = assert_ok!(sign_cancel_action(&agent, Environment::Testnet, cancels, 7).await);

    assert_eq!(first.signature, second.signature);
}

#[tokio::test]
async fn test_nonce_changes_signature() {
    let agent = generate_agent_wallet();
    let cancels = vec![CancelWire { a: 1, o: 42 }];

    let first = assert_ok!(
        sign_cancel_action(&agent, Environment::Testnet, cancels.clone(), 7).await
    );
    let second = assert_ok!(sign_cancel_action(&agent, Environment::Testnet, cancels, 8).await);

    assert_ne!(first.signature, second.signature);
}

#[test]
fn test_builder_fee_rate_format() {
    assert_eq!(builder_max_fee_rate(), "0.25%");
}
