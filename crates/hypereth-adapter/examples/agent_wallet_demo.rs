/*
[INPUT]:  HYPERETH_API_KEY and PRIVATE_KEY env vars
[OUTPUT]: Managed agent wallet registration, approval, and listing
[POS]:    Examples - managed agent wallet walkthrough
[UPDATE]: When agent wallet endpoints change
*/

use alloy::primitives::Address;
use hypereth_adapter::*;

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

/// Example: managed agent wallet lifecycle.
///
/// Registers a HyperETH-managed agent wallet, approves it on Hyperliquid
/// with the main wallet, and lists all managed wallets. Set
/// DELETE_AGENT_WALLET=1 to also remove the wallet again (HyperETH side
/// only; revoke the agent on Hyperliquid manually).
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH Agent Wallet Demo ===\n");

    let Ok(api_key) = std::env::var("HYPERETH_API_KEY") else {
        eprintln!("Set HYPERETH_API_KEY to your HyperETH API key");
        return Ok(());
    };
    let Ok(private_key) = std::env::var("PRIVATE_KEY") else {
        eprintln!("Set PRIVATE_KEY to your wallet private key");
        return Ok(());
    };

    let environment = environment_from_env();
    println!("Environment: {environment}");

    let mut client = HyperethClient::new(environment)?;
    client.set_api_key(&api_key);

    let main_wallet = EvmWalletSigner::new(&private_key)?;
    println!("✓ Wallet loaded: {}", main_wallet.address());

    // 1. Register a managed agent wallet
    println!("\nRegistering new agent wallet...");
    let wallet = client.register_agent_wallet("TestAgent").await?;
    println!("✓ Agent wallet registered");
    println!("  Address: {}", wallet.address);
    if let Some(name) = &wallet.name {
        println!("  Name: {name}");
    }
    if let Some(created_at) = wallet.created_at {
        println!("  Created: {created_at}");
    }

    // 2. Approve it on Hyperliquid with the main wallet
    println!("\nApproving agent wallet...");
    let agent_address: Address = wallet.address.parse()?;
    let approval = client
        .approve_agent(
            main_wallet.alloy_signer(),
            agent_address,
            "HyperEthBot",
            timestamp_nonce_ms(),
        )
        .await?;
    if approval.is_ok() {
        println!("✓ Agent address approved for trading on Hyperliquid");
    } else {
        eprintln!(
            "✗ Agent approval failed: {}",
            approval.error_message().unwrap_or("unknown error")
        );
    }

    // 3. List all managed agent wallets
    println!("\nListing all agent wallets...");
    let wallets = client.list_agent_wallets().await?;
    println!("✓ Found {} agent wallet(s):", wallets.len());
    for wallet in &wallets {
        println!(
            "  - {} ({})",
            wallet.name.as_deref().unwrap_or("<unnamed>"),
            wallet.address
        );
        println!("    Active: {}", wallet.is_active);
        if let Some(created_at) = wallet.created_at {
            println!("    Created: {created_at}");
        }
    }

    // 4. Optionally delete the wallet again
    if std::env::var("DELETE_AGENT_WALLET").is_ok() {
        println!("\nDeleting agent wallet {}...", wallet.address);
        let result = client.delete_agent_wallet(&wallet.address).await?;
        if result.success {
            println!("✓ Agent wallet deleted");
            if let Some(note) = &result.note {
                println!("  Note: {note}");
            }
        } else {
            eprintln!(
                "✗ Deletion failed: {}",
                result.message.as_deref().unwrap_or("unknown error")
            );
        }
    }

    println!("\nYou can now use the agent wallet for trading via trade intents");
    Ok(())
}
