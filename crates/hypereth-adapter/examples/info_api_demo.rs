/*
[INPUT]:  HYPERETH_API_KEY env var
[OUTPUT]: Market data via REST queries and WebSocket subscriptions
[POS]:    Examples - info endpoint walkthrough
[UPDATE]: When info queries or subscription channels change
*/

use hypereth_adapter::hyperliquid::{CandleSnapshotRequest, InfoRequest};
use hypereth_adapter::*;
use tokio::time::{Duration, Instant, timeout};

fn environment_from_env() -> Environment {
    match std::env::var("HYPERETH_ENV").as_deref() {
        Ok("mainnet") => Environment::Mainnet,
        _ => Environment::Testnet,
    }
}

async fn rest_queries(client: &HyperethClient) -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("\n=== REST API Queries ===");

    println!("\n1. All mid prices...");
    let mids = client.all_mids().await?;
    for coin in ["ETH", "BTC", "DOGE", "SOL", "ARB"] {
        if let Some(price) = mids.get(coin) {
            println!("   {coin}: ${price}");
        }
    }

    println!("\n2. L2 order book for ETH...");
    let book = client.l2_book("ETH").await?;
    println!("   Top 3 bids:");
    for level in book.bids().iter().take(3) {
        println!("     Price: ${}, Size: {}", level.px, level.sz);
    }
    println!("   Top 3 asks:");
    for level in book.asks().iter().take(3) {
        println!("     Price: ${}, Size: {}", level.px, level.sz);
    }

    println!("\n3. Asset metadata...");
    let meta = client.meta().await?;
    println!("   Total assets: {}", meta.universe.len());
    for (index, asset) in meta.universe.iter().take(5).enumerate() {
        println!("   {index}: {} (szDecimals: {})", asset.name, asset.sz_decimals);
    }

    println!("\n4. Error handling with an invalid coin...");
    match client.l2_book("INVALID_COIN").await {
        Ok(book) => println!("   Response: {book:?}"),
        Err(err) => println!("   Error: {err}"),
    }

    Ok(())
}

async fn websocket_queries(
    api_key: &str,
    environment: Environment,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("\n=== WebSocket API Queries ===");

    let mut ws = HyperethWebSocket::hyperliquid(environment)?;
    ws.set_api_key(api_key);
    let mut events = ws.take_receiver().expect("receiver already taken");
    ws.connect().await?;
    println!("✓ WebSocket connected");

    println!("\n5. DOGE candles for the last hour via WebSocket...");
    let end_time = timestamp_nonce_ms();
    let start_time = end_time - 60 * 60 * 1000;
    let payload = ws
        .post_info(&InfoRequest::CandleSnapshot {
            req: CandleSnapshotRequest {
                coin: "DOGE".to_string(),
                interval: "5m".to_string(),
                start_time,
                end_time,
            },
        })
        .await?;
    if let Some(candles) = payload.get("data").and_then(|data| data.as_array()) {
        println!("   Retrieved {} candles", candles.len());
        if let Some(latest) = candles.last() {
            println!("   Latest 5m candle:");
            println!("     Open:   ${}", latest["o"].as_str().unwrap_or("?"));
            println!("     High:   ${}", latest["h"].as_str().unwrap_or("?"));
            println!("     Low:    ${}", latest["l"].as_str().unwrap_or("?"));
            println!("     Close:  ${}", latest["c"].as_str().unwrap_or("?"));
            println!("     Volume: {}", latest["v"].as_str().unwrap_or("?"));
        }
    }

    println!("\n6. Exchange status via WebSocket POST...");
    match ws.post_info(&InfoRequest::ExchangeStatus).await {
        Ok(payload) => println!("   Exchange status: {}", payload["data"]),
        Err(err) => println!("   Failed to get exchange status: {err}"),
    }

    println!("\n7. Subscribing to real-time mid prices...");
    ws.subscribe(&Subscription::AllMids).await?;
    println!("   Listening for 5 seconds...");

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
            break;
        };
        match timeout(remaining, events.recv()).await {
            Ok(Some(WsEvent::AllMids(data))) => {
                if let Some(eth) = data.mids.get("ETH") {
                    println!("   AllMids update - ETH: ${eth}");
                }
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => break,
        }
    }

    println!("   Unsubscribing from allMids...");
    ws.unsubscribe(&Subscription::AllMids).await?;
    ws.disconnect().await;

    Ok(())
}

/// Example: market data retrieval via both REST and WebSocket.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== HyperETH Info API Demo ===");

    let Ok(api_key) = std::env::var("HYPERETH_API_KEY") else {
        eprintln!("Set HYPERETH_API_KEY to your HyperETH API key");
        return Ok(());
    };

    let environment = environment_from_env();
    println!("Environment: {environment}");

    let mut client = HyperethClient::new(environment)?;
    client.set_api_key(&api_key);

    rest_queries(&client).await?;
    websocket_queries(&api_key, environment).await?;

    println!("\nDemo completed");
    Ok(())
}
