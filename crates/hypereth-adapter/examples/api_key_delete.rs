/*
[INPUT]:  PRIVATE_KEY and API_KEY_TO_DELETE env vars
[OUTPUT]: Deletion confirmation for the API key
[POS]:    Examples - API key management
[UPDATE]: When the key deletion flow changes
*/

use hypereth_adapter::*;

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

/// Example: delete an API key.
///
/// Signs "HyperETH: Delete API Key: {key}" with a millisecond nonce.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH API Key Deletion ===\n");

    let Ok(private_key) = std::env::var("PRIVATE_KEY") else {
        eprintln!("Set PRIVATE_KEY to your wallet private key (64 hex chars)");
        return Ok(());
    };
    let Ok(api_key) = std::env::var("API_KEY_TO_DELETE") else {
        eprintln!("Set API_KEY_TO_DELETE to the key you want removed");
        return Ok(());
    };

    let wallet = EvmWalletSigner::new(&private_key)?;
    println!("✓ Wallet loaded: {}", wallet.address());
    println!("  Deleting key: {api_key}");

    let client = HyperethClient::new(environment_from_env())?;
    let result = client.delete_api_key(&wallet, &api_key).await?;

    if result.success {
        println!("\n✓ API key deleted");
        if let Some(message) = &result.message {
            println!("  Message: {message}");
        }
    } else {
        eprintln!(
            "\n✗ Deletion failed: {}",
            result.message.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(())
}
