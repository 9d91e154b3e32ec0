/*
[INPUT]:  PRIVATE_KEY env var
[OUTPUT]: Newly registered HyperETH API key
[POS]:    Examples - onboarding step 2, API key registration
[UPDATE]: When the registration flow changes
*/

use hypereth_adapter::*;

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

/// Example: register a new API key.
///
/// Signs the EIP-191 message "HyperETH: API Key Registration" with a
/// millisecond nonce; the server recovers the wallet address and issues a
/// key. The wallet must have approved the builder fee first.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH API Key Registration ===\n");

    let Ok(private_key) = std::env::var("PRIVATE_KEY") else {
        eprintln!("Set PRIVATE_KEY to your wallet private key (64 hex chars)");
        return Ok(());
    };

    let wallet = EvmWalletSigner::new(&private_key)?;
    println!("✓ Wallet loaded: {}", wallet.address());

    let client = HyperethClient::new(environment_from_env())?;

    println!("\nRegistering new API key...");
    let result = client.register_api_key(&wallet).await?;

    if result.success {
        println!("✓ API key registered");
        if let Some(api_key) = &result.api_key {
            println!("  API key: {api_key}");
            println!("\nUsage:");
            println!("  - Send it as the x-api-key header on REST and WebSocket connections");
            println!("  - Manage keys with the api_key_list and api_key_delete examples");
            println!("  - Approve the builder fee before trading through HyperETH");
        }
        if let Some(message) = &result.message {
            println!("  Message: {message}");
        }
    } else {
        eprintln!(
            "✗ Registration failed: {}",
            result.message.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(())
}
