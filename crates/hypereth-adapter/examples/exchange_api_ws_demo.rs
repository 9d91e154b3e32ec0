/*
[INPUT]:  HYPERETH_API_KEY and PRIVATE_KEY env vars
[OUTPUT]: Full order lifecycle via WebSocket post requests
[POS]:    Examples - WebSocket trading walkthrough
[UPDATE]: When the trading flow or WS request format changes
*/

use std::collections::HashMap;

use hypereth_adapter::hyperliquid::{
    InfoRequest, generate_agent_wallet, sign_cancel_action, sign_order_action,
};
use hypereth_adapter::*;
use rust_decimal::Decimal;
use tokio::time::{Duration, sleep, timeout};

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

/// Example: order lifecycle over WebSocket.
///
/// Same flow as the REST demo, but market data and orders go through
/// correlated WebSocket post requests, with an orderUpdates subscription
/// reporting fills and cancels in real time.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH Exchange API WebSocket Demo ===\n");

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

    // REST client for approval and metadata, WebSocket for trading
    let mut client = HyperethClient::new(environment)?;
    client.set_api_key(&api_key);

    let mut ws = HyperethWebSocket::hyperliquid(environment)?;
    ws.set_api_key(&api_key);
    let mut events = ws.take_receiver().expect("receiver already taken");
    ws.connect().await?;
    println!("✓ WebSocket connected with authentication");

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
    println!("✓ Agent approved for WebSocket trading");

    // Live order updates for the main wallet
    ws.subscribe(&Subscription::OrderUpdates {
        user: main_wallet.alloy_signer().address(),
    })
    .await?;

    println!("\nGetting market data via WebSocket...");
    let payload = ws.post_info(&InfoRequest::AllMids).await?;
    let mids: HashMap<String, Decimal> = serde_json::from_value(
        payload
            .get("data")
            .cloned()
            .unwrap_or(serde_json::Value::Null),
    )?;

    let asset_map = AssetMap::from_meta(&client.meta().await?);
    let coin = "DOGE";
    let (Some(asset_index), Some(mid)) = (asset_map.index(coin), mids.get(coin).copied()) else {
        eprintln!("✗ Unknown asset: {coin}");
        return Ok(());
    };
    println!("Trading {coin} at ${mid}");

    let mut size = asset_map.round_size(coin, Decimal::from(15) / mid);
    let price = asset_map.round_price(coin, mid * Decimal::new(9, 1));
    if price * size < Decimal::from(10) {
        size = asset_map.round_size(coin, Decimal::from(11) / price);
    }

    println!("\nSTEP 1: Placing BUY order via WebSocket");
    println!("  Size:  {size} {coin}");
    println!("  Price: ${price} (10% below mid)");

    let order = OrderWire::limit(asset_index, true, price, size, false, Tif::Gtc);
    let request = sign_order_action(&agent, environment, vec![order], timestamp_nonce_ms()).await?;
    let response = ws.post_action(&request).await?;

    if !response.is_ok() {
        eprintln!(
            "✗ Order failed: {}",
            response.error_message().unwrap_or("unknown error")
        );
        return Ok(());
    }
    let order_id = response.first_resting_oid();
    match order_id {
        Some(oid) => println!("✓ WebSocket order placed, id {oid}"),
        None => println!("  Order may have filled immediately: {response:?}"),
    }

    println!("\nSTEP 2: Watching order updates for 10 seconds...");
    let watch = async {
        while let Some(event) = events.recv().await {
            if let WsEvent::OrderUpdates(updates) = event {
                for update in updates {
                    println!(
                        "  Order update - id: {}, status: {}",
                        update.order.oid, update.status
                    );
                }
            }
        }
    };
    let _ = timeout(Duration::from_secs(10), watch).await;

    if let Some(oid) = order_id {
        println!("\nSTEP 3: Cancelling order {oid} via WebSocket");
        let request = sign_cancel_action(
            &agent,
            environment,
            vec![CancelWire { a: asset_index, o: oid }],
            timestamp_nonce_ms(),
        )
        .await?;
        let cancel = ws.post_action(&request).await?;
        if cancel.is_ok() {
            println!("✓ Order cancelled via WebSocket");
        } else {
            eprintln!("  Cancel response: {cancel:?}");
        }
    } else {
        println!("\nNo resting order to cancel");
    }

    sleep(Duration::from_secs(1)).await;
    ws.disconnect().await;

    println!("\nWebSocket demo completed");
    Ok(())
}
