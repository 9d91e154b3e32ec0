/*
[INPUT]:  PRIVATE_KEY env var
[OUTPUT]: All API keys registered for the wallet
[POS]:    Examples - API key management
[UPDATE]: When the key listing flow changes
*/

use hypereth_adapter::*;

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

/// Example: list all API keys owned by the wallet.
///
/// Signs "HyperETH: List All API Keys" with a millisecond nonce.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH API Key List ===\n");

    let Ok(private_key) = std::env::var("PRIVATE_KEY") else {
        eprintln!("Set PRIVATE_KEY to your wallet private key (64 hex chars)");
        return Ok(());
    };

    let wallet = EvmWalletSigner::new(&private_key)?;
    println!("✓ Wallet loaded: {}", wallet.address());

    let client = HyperethClient::new(environment_from_env())?;
    let keys = client.list_api_keys(&wallet).await?;

    println!("\n✓ Found {} API key(s)", keys.len());
    for key in &keys {
        println!("  - {}", key.key);
        println!("    Active: {}", key.is_active);
        if let Some(created_at) = key.created_at {
            println!("    Created: {created_at}");
        }
        if let Some(last_used) = key.last_used {
            println!("    Last used: {last_used}");
        }
    }

    Ok(())
}
