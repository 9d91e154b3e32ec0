/*
[INPUT]:  HYPERETH_API_KEY and PRIVATE_KEY env vars
[OUTPUT]: Full order lifecycle via the proxied REST exchange endpoint
[POS]:    Examples - REST trading walkthrough
[UPDATE]: When the trading flow changes
*/

use hypereth_adapter::hyperliquid::generate_agent_wallet;
use hypereth_adapter::*;
use rust_decimal::Decimal;
use tokio::time::{Duration, sleep};

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

/// Example: order lifecycle over REST.
///
/// Creates a local agent wallet, approves it with the main wallet, places a
/// limit buy 10% below mid, checks open orders, and cancels.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH Exchange API REST Demo ===\n");

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
    if environment.is_mainnet() {
        println!("WARNING: mainnet selected, real funds will be used");
    }

    let mut client = HyperethClient::new(environment)?;
    client.set_api_key(&api_key);

    // Setup trading wallets
    println!("\nSetting up trading wallets...");
    let main_wallet = EvmWalletSigner::new(&private_key)?;
    println!("  User wallet:  {}", main_wallet.address());

    let agent = generate_agent_wallet();
    println!("  Agent wallet: {}", agent.address());

    println!("\nApproving agent wallet...");
    let approval = client
        .approve_agent(
            main_wallet.alloy_signer(),
            agent.address(),
            "HyperEthBot",
            timestamp_nonce_ms(),
        )
        .await?;
    if !approval.is_ok() {
        eprintln!(
            "✗ Agent approval failed: {}",
            approval.error_message().unwrap_or("unknown error")
        );
        return Ok(());
    }
    println!("✓ Agent approved for trading");

    // Market data
    println!("\nGetting market data...");
    let asset_map = AssetMap::from_meta(&client.meta().await?);
    let coin = "DOGE";
    let Some(asset_index) = asset_map.index(coin) else {
        eprintln!("✗ Unknown asset: {coin}");
        return Ok(());
    };

    let mid = client.market_price(coin).await?;
    println!("Trading {coin} at ${mid}");

    // Target a ~$15 order, bumped to the $10 exchange minimum when rounding
    // shrinks it below
    let mut size = asset_map.round_size(coin, Decimal::from(15) / mid);
    let price = asset_map.round_price(coin, mid * Decimal::new(9, 1));
    if price * size < Decimal::from(10) {
        size = asset_map.round_size(coin, Decimal::from(11) / price);
    }

    println!("\nSTEP 1: Placing BUY order via REST");
    println!("  Size:  {size} {coin}");
    println!("  Price: ${price} (10% below mid)");

    let order = OrderWire::limit(asset_index, true, price, size, false, Tif::Gtc);
    let response = client
        .place_order(&agent, vec![order], timestamp_nonce_ms())
        .await?;

    if !response.is_ok() {
        eprintln!(
            "✗ Order failed: {}",
            response.error_message().unwrap_or("unknown error")
        );
        return Ok(());
    }
    let order_id = response.first_resting_oid();
    match order_id {
        Some(oid) => println!("✓ Order placed, id {oid}"),
        None => println!("  Order may have filled immediately: {response:?}"),
    }

    println!("\nSTEP 2: Waiting 10 seconds...");
    sleep(Duration::from_secs(10)).await;

    println!("\nSTEP 3: Checking open orders");
    let open_orders = client
        .open_orders(main_wallet.alloy_signer().address())
        .await?;
    println!("  Found {} open order(s)", open_orders.len());

    if let Some(oid) = order_id {
        println!("\nSTEP 4: Cancelling order {oid} via REST");
        let cancel = client
            .cancel_orders(
                &agent,
                vec![CancelWire { a: asset_index, o: oid }],
                timestamp_nonce_ms(),
            )
            .await?;
        if cancel.is_ok() {
            println!("✓ Order cancelled");
        } else {
            eprintln!("  Cancel may have failed: {cancel:?}");
        }
    } else {
        println!("\nNo resting order to cancel");
    }

    println!("\nREST demo completed");
    Ok(())
}
