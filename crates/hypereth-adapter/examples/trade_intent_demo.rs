/*
[INPUT]:  HYPERETH_API_KEY and AGENT_WALLET_ADDRESS env vars
[OUTPUT]: Trade intents submitted via REST and WebSocket
[POS]:    Examples - trade intent walkthrough
[UPDATE]: When the intent payload or routing changes
*/

use hypereth_adapter::*;
use rust_decimal::Decimal;
use tokio::time::{Duration, sleep};

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

fn doge_limit_buy(asset_index: u32) -> Action {
    Action::Order(OrderAction {
        orders: vec![OrderWire::limit(
            asset_index,
            true,
            Decimal::new(210, 3), // 0.210
            Decimal::from(50),
            false,
            Tif::Gtc,
        )],
        grouping: Grouping::Na,
    })
}

fn report_intent(response: &TradeIntentResponse) -> Option<u64> {
    if let Some(intent_hash) = &response.intent_hash {
        println!("  Intent hash: {intent_hash}");
    }
    if let Some(agg_order_id) = &response.agg_order_id {
        println!("  Aggregate order id: {agg_order_id}");
    }
    response
        .hl_response
        .as_ref()
        .and_then(|hl| hl.first_resting_oid())
}

/// Example: submit order and cancel trade intents.
///
/// Intents carry no client signature; HyperETH signs the wrapped action with
/// the managed agent wallet named in the payload. Requires a registered API
/// key and an approved managed agent wallet.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH Trade Intent Demo ===\n");

    let Ok(api_key) = std::env::var("HYPERETH_API_KEY") else {
        eprintln!("Set HYPERETH_API_KEY to your HyperETH API key");
        return Ok(());
    };
    let Ok(agent_wallet) = std::env::var("AGENT_WALLET_ADDRESS") else {
        eprintln!("Set AGENT_WALLET_ADDRESS to your managed agent wallet address");
        return Ok(());
    };

    let environment = environment_from_env();
    println!("Environment: {environment}");

    let mut client = HyperethClient::new(environment)?;
    client.set_api_key(&api_key);

    let asset_map = AssetMap::from_meta(&client.meta().await?);
    let Some(asset_index) = asset_map.index("DOGE") else {
        eprintln!("✗ DOGE missing from meta universe");
        return Ok(());
    };

    // 1. REST intent: place, then cancel
    println!("\n1. REST trade intent:");
    println!("Placing limit order via trade intent...");
    let response = client
        .submit_trade_intent(doge_limit_buy(asset_index), &agent_wallet, timestamp_nonce_ms())
        .await?;

    if !response.is_ok() {
        eprintln!("✗ Failed to place order: {response:?}");
        return Ok(());
    }
    println!("✓ Order placed via trade intent");
    let order_id = report_intent(&response);

    sleep(Duration::from_secs(2)).await;

    if let Some(oid) = order_id {
        println!("\nCancelling order {oid} via trade intent...");
        let cancel = Action::Cancel(CancelAction {
            cancels: vec![CancelWire { a: asset_index, o: oid }],
        });
        let response = client
            .submit_trade_intent(cancel, &agent_wallet, timestamp_nonce_ms())
            .await?;
        if response.is_ok() {
            println!("✓ Order cancelled via trade intent");
            report_intent(&response);
        } else {
            eprintln!("✗ Failed to cancel order: {response:?}");
        }
    } else {
        println!("  Order may have filled immediately, nothing to cancel");
    }

    // 2. WebSocket intent: same flow over the main socket
    println!("\n2. WebSocket trade intent:");
    let mut ws = HyperethWebSocket::new(environment)?;
    ws.set_api_key(&api_key);
    let _events = ws.take_receiver().expect("receiver already taken");
    ws.connect().await?;

    println!("Placing limit order via WebSocket trade intent...");
    let request =
        TradeIntentRequest::new(doge_limit_buy(asset_index), &agent_wallet, timestamp_nonce_ms());
    let response = ws.post_trade_intent(&request).await?;

    if !response.is_ok() {
        eprintln!("✗ Failed to place WebSocket order: {response:?}");
        ws.disconnect().await;
        return Ok(());
    }
    println!("✓ WebSocket order placed");
    let order_id = report_intent(&response);

    sleep(Duration::from_secs(5)).await;

    if let Some(oid) = order_id {
        println!("\nCancelling order {oid} via WebSocket trade intent...");
        let cancel = Action::Cancel(CancelAction {
            cancels: vec![CancelWire { a: asset_index, o: oid }],
        });
        let request = TradeIntentRequest::new(cancel, &agent_wallet, timestamp_nonce_ms());
        let response = ws.post_trade_intent(&request).await?;
        if response.is_ok() {
            println!("✓ Order cancelled via WebSocket trade intent");
        } else {
            eprintln!("✗ Failed to cancel WebSocket order: {response:?}");
        }
    }

    ws.disconnect().await;
    println!("\nDemo completed");
    Ok(())
}
