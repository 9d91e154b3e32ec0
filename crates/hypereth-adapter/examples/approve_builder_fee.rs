/*
[INPUT]:  PRIVATE_KEY env var and target environment
[OUTPUT]: Builder fee approval on Hyperliquid
[POS]:    Examples - onboarding step 1, before API key registration
[UPDATE]: When the builder fee flow changes
*/

use hypereth_adapter::hyperliquid::{BUILDER_ADDRESS, BUILDER_FEE_BPS, builder_max_fee_rate};
use hypereth_adapter::*;

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

/// Example: approve the HyperETH builder fee with your main wallet.
///
/// This is the first onboarding step and goes directly to the public
/// Hyperliquid API, since no HyperETH API key exists yet.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH Builder Fee Approval ===\n");

    let Ok(private_key) = std::env::var("PRIVATE_KEY") else {
        eprintln!("Set PRIVATE_KEY to your wallet private key (64 hex chars)");
        return Ok(());
    };

    let environment = environment_from_env();
    println!("Environment: {environment}");
    if environment.is_mainnet() {
        println!("WARNING: mainnet selected, real funds will be used");
    }

    let wallet = EvmWalletSigner::new(&private_key)?;
    println!("✓ Wallet loaded: {}", wallet.address());

    let max_fee_rate = builder_max_fee_rate();
    println!("\nBuilder fee details:");
    println!("  Builder address: {BUILDER_ADDRESS}");
    println!("  Fee rate: {BUILDER_FEE_BPS} basis points ({max_fee_rate})");

    let client = HyperethClient::new(environment)?;
    let nonce = timestamp_nonce_ms();

    println!("\nApproving builder fee (allows the builder to collect up to {max_fee_rate})...");
    let response = client
        .approve_builder_fee(wallet.alloy_signer(), BUILDER_ADDRESS, &max_fee_rate, nonce)
        .await?;

    if response.is_ok() {
        println!("✓ Builder fee approved");
        println!("\nNext steps:");
        println!("  1. Register an API key with the api_key_register example");
        println!("  2. Use the API key for trading via HyperETH");
    } else {
        eprintln!(
            "✗ Approval failed: {}",
            response.error_message().unwrap_or("unknown error")
        );
    }

    Ok(())
}
