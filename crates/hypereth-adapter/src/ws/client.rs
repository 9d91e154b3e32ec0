/*
[INPUT]:  WebSocket URL, API key, and outbound requests
[OUTPUT]: Real-time events and correlated post responses
[POS]:    WebSocket layer - connection handling and request correlation
[UPDATE]: When adding new channels or changing connection logic
*/

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio::time::timeout;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tracing::{debug, info, warn};
use url::Url;

use super::message::{PostPayload, Subscription, WsEvent};
use crate::http::{HyperethError, Result};
use crate::hyperliquid::{ActionRequest, ExchangeResponse, InfoRequest};
use crate::types::{Environment, TradeIntentRequest, TradeIntentResponse};

/// Main HyperETH WebSocket endpoint (api keys, trade intents)
const MAIN_WS_URL: &str = "wss://api.hypereth.io/ws";
/// Hyperliquid-proxied WebSocket endpoint (info, exchange, subscriptions)
const HYPERLIQUID_WS_URL: &str = "wss://api.hypereth.io/v1/hl/ws";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const EVENT_CHANNEL_CAPACITY: usize = 100;
const OTHER_LOG_LIMIT: usize = 3;
const PARSE_FAIL_LOG_LIMIT: usize = 3;
const RAW_LOG_MAX_BYTES: usize = 1024;

static OTHER_LOG_COUNT: AtomicUsize = AtomicUsize::new(0);
static PARSE_FAIL_LOG_COUNT: AtomicUsize = AtomicUsize::new(0);

/// WebSocket client for the HyperETH API.
///
/// One client handles one connection: parsed channel events flow out through
/// the receiver obtained from `take_receiver`, while `post_*` requests are
/// correlated back to their callers by request id.
#[derive(Debug)]
pub struct HyperethWebSocket {
    url: Url,
    api_key: Option<String>,
    event_tx: mpsc::Sender<WsEvent>,
    event_rx: Option<mpsc::Receiver<WsEvent>>,
    outbound_tx: Arc<Mutex<Option<mpsc::Sender<WsMessage>>>>,
    pending: Arc<Mutex<HashMap<u64, oneshot::Sender<PostPayload>>>>,
    request_counter: AtomicU64,
}

impl HyperethWebSocket {
    /// Create a client for the main HyperETH stream
    pub fn new(environment: Environment) -> Result<Self> {
        Self::with_url(MAIN_WS_URL, environment)
    }

    /// Create a client for the Hyperliquid-proxied stream
    pub fn hyperliquid(environment: Environment) -> Result<Self> {
        Self::with_url(HYPERLIQUID_WS_URL, environment)
    }

    /// Create a client for an explicit URL (used by tests)
    pub fn with_url(url: &str, environment: Environment) -> Result<Self> {
        let mut url = Url::parse(url)?;
        url.query_pairs_mut()
            .append_pair("env", environment.query_value());

        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            url,
            api_key: None,
            event_tx,
            event_rx: Some(event_rx),
            outbound_tx: Arc::new(Mutex::new(None)),
            pending: Arc::new(Mutex::new(HashMap::new())),
            request_counter: AtomicU64::new(0),
        })
    }

    /// Set the API key sent as the x-api-key header on connect
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Get the event receiver; can only be taken once
    pub fn take_receiver(&mut self) -> Option<mpsc::Receiver<WsEvent>> {
        self.event_rx.take()
    }

    /// Open the connection and start the read/write task
    pub async fn connect(&self) -> Result<()> {
        let mut request = self
            .url
            .as_str()
            .into_client_request()
            .map_err(|e| HyperethError::WebSocket(format!("invalid request: {e}")))?;

        if let Some(api_key) = &self.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|e| HyperethError::Config(format!("invalid API key header: {e}")))?;
            request.headers_mut().insert("x-api-key", value);
        }

        let (ws_stream, _response) = connect_async(request)
            .await
            .map_err(|e| HyperethError::WebSocket(format!("connection failed: {e}")))?;
        info!(url = %self.url, "ws connected");

        let (mut write, mut read) = ws_stream.split();
        let (outbound_tx, mut outbound_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        {
            let mut guard = self.outbound_tx.lock().await;
            if guard.is_some() {
                return Err(HyperethError::WebSocket("already connected".into()));
            }
            *guard = Some(outbound_tx);
        }

        let event_tx = self.event_tx.clone();
        let pending = self.pending.clone();
        let outbound_state = self.outbound_tx.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    outbound = outbound_rx.recv() => {
                        match outbound {
                            Some(message) => {
                                if write.send(message).await.is_err() {
                                    break;
                                }
                            }
                            None => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                break;
                            }
                        }
                    }
                    incoming = read.next() => {
                        match incoming {
                            Some(Ok(WsMessage::Close(_))) => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                break;
                            }
                            Some(Ok(WsMessage::Ping(payload))) => {
                                if write.send(WsMessage::Pong(payload)).await.is_err() {
                                    break;
                                }
                            }
                            Some(Ok(WsMessage::Pong(_))) => {}
                            Some(Ok(message)) => {
                                match Self::parse_message(message) {
                                    Some(WsEvent::Post(post)) => {
                                        let sender = pending.lock().await.remove(&post.id);
                                        match sender {
                                            Some(sender) => {
                                                let _ = sender.send(post.response);
                                            }
                                            None => {
                                                warn!(id = post.id, "ws response for unknown request id");
                                            }
                                        }
                                    }
                                    Some(event) => {
                                        if event_tx.send(event).await.is_err() {
                                            break;
                                        }
                                    }
                                    None => {}
                                }
                            }
                            Some(Err(_)) | None => {
                                break;
                            }
                        }
                    }
                }
            }

            // Fail in-flight requests by dropping their response senders.
            *outbound_state.lock().await = None;
            pending.lock().await.clear();
            info!("ws connection closed");
        });

        Ok(())
    }

    /// Close the connection; in-flight requests fail
    pub async fn disconnect(&self) {
        let sender = self.outbound_tx.lock().await.take();
        drop(sender);
    }

    /// Subscribe to a channel
    pub async fn subscribe(&self, subscription: &Subscription) -> Result<()> {
        let frame = serde_json::json!({
            "method": "subscribe",
            "subscription": subscription,
        });
        self.send_frame(&frame).await?;
        info!(subscription = %frame["subscription"], "ws subscribe sent");
        Ok(())
    }

    /// Unsubscribe from a channel; the payload must match the subscription
    pub async fn unsubscribe(&self, subscription: &Subscription) -> Result<()> {
        let frame = serde_json::json!({
            "method": "unsubscribe",
            "subscription": subscription,
        });
        self.send_frame(&frame).await?;
        info!(subscription = %frame["subscription"], "ws unsubscribe sent");
        Ok(())
    }

    /// Send an /info query over the socket
    pub async fn post_info(&self, request: &InfoRequest) -> Result<serde_json::Value> {
        self.post_request("info", serde_json::to_value(request)?).await
    }

    /// Send a signed /exchange action over the socket
    pub async fn post_action(&self, request: &ActionRequest) -> Result<ExchangeResponse> {
        let payload = self
            .post_request("action", serde_json::to_value(request)?)
            .await?;
        serde_json::from_value(payload).map_err(|e| {
            HyperethError::InvalidResponse(format!("failed to decode exchange response: {e}"))
        })
    }

    /// Submit a trade intent over the socket
    pub async fn post_trade_intent(
        &self,
        request: &TradeIntentRequest,
    ) -> Result<TradeIntentResponse> {
        let payload = self
            .post_request("trade_intent", serde_json::to_value(request)?)
            .await?;
        serde_json::from_value(payload).map_err(|e| {
            HyperethError::InvalidResponse(format!("failed to decode intent response: {e}"))
        })
    }

    async fn post_request(&self, kind: &str, payload: serde_json::Value) -> Result<serde_json::Value> {
        let id = self.request_counter.fetch_add(1, Ordering::Relaxed) + 1;
        let (response_tx, response_rx) = oneshot::channel();
        self.pending.lock().await.insert(id, response_tx);

        let frame = serde_json::json!({
            "method": "post",
            "id": id,
            "request": {"type": kind, "payload": payload},
        });

        if let Err(err) = self.send_frame(&frame).await {
            self.pending.lock().await.remove(&id);
            return Err(err);
        }
        debug!(id, kind, "ws post request sent");

        let response = match timeout(REQUEST_TIMEOUT, response_rx).await {
            Ok(Ok(response)) => response,
            Ok(Err(_)) => {
                return Err(HyperethError::WebSocket(
                    "connection closed before response".into(),
                ));
            }
            Err(_) => {
                self.pending.lock().await.remove(&id);
                return Err(HyperethError::Timeout {
                    duration: REQUEST_TIMEOUT.as_secs(),
                });
            }
        };

        if response.kind == "error" {
            let message = response
                .payload
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| response.payload.to_string());
            return Err(HyperethError::WsRequest(message));
        }

        Ok(response.payload)
    }

    async fn send_frame(&self, frame: &serde_json::Value) -> Result<()> {
        let sender = {
            let guard = self.outbound_tx.lock().await;
            guard
                .clone()
                .ok_or_else(|| HyperethError::WebSocket("not connected".into()))?
        };

        sender
            .send(WsMessage::Text(frame.to_string().into()))
            .await
            .map_err(|_| HyperethError::WebSocket("send channel closed".into()))
    }

    fn parse_message(message: WsMessage) -> Option<WsEvent> {
        let text: String = match message {
            WsMessage::Text(text) => text.to_string(),
            WsMessage::Binary(bytes) => String::from_utf8(bytes.to_vec()).ok()?,
            _ => return None,
        };

        match serde_json::from_str::<WsEvent>(&text) {
            Ok(event) => {
                if matches!(event, WsEvent::Other) {
                    log_other_message_once(&text);
                }
                Some(event)
            }
            Err(err) => {
                log_parse_fail_once(&err, &text);
                Some(WsEvent::Other)
            }
        }
    }
}

fn log_other_message_once(raw: &str) {
    let count = OTHER_LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count < OTHER_LOG_LIMIT {
        let preview = truncate_for_log(raw, RAW_LOG_MAX_BYTES);
        debug!(
            sample_index = count + 1,
            sample_limit = OTHER_LOG_LIMIT,
            bytes = raw.len(),
            message = %preview,
            "ws message channel unrecognized"
        );
    }
}

fn log_parse_fail_once(err: &serde_json::Error, raw: &str) {
    let count = PARSE_FAIL_LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count < PARSE_FAIL_LOG_LIMIT {
        let preview = truncate_for_log(raw, RAW_LOG_MAX_BYTES);
        debug!(
            sample_index = count + 1,
            sample_limit = PARSE_FAIL_LOG_LIMIT,
            error = %err,
            bytes = raw.len(),
            message = %preview,
            "ws message parse failed"
        );
    }
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut out = String::with_capacity(max_len + 3);
    out.push_str(&value[..max_len]);
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_websocket_creation() {
        let mut ws = HyperethWebSocket::new(Environment::Testnet).unwrap();
        assert!(ws.take_receiver().is_some());
        assert!(ws.take_receiver().is_none());
    }

    #[test]
    fn test_url_carries_env_param() {
        let ws = HyperethWebSocket::hyperliquid(Environment::Testnet).unwrap();
        assert_eq!(
            ws.url.as_str(),
            "wss://api.hypereth.io/v1/hl/ws?env=testnet"
        );

        let ws = HyperethWebSocket::new(Environment::Mainnet).unwrap();
        assert_eq!(ws.url.as_str(), "wss://api.hypereth.io/ws?env=mainnet");
    }

    #[tokio::test]
    async fn test_subscribe_requires_connection() {
        let ws = HyperethWebSocket::new(Environment::Testnet).unwrap();
        let err = ws.subscribe(&Subscription::AllMids).await.unwrap_err();
        assert!(matches!(err, HyperethError::WebSocket(_)));
    }

    #[test]
    fn test_parse_message_text_and_garbage() {
        let parsed = HyperethWebSocket::parse_message(WsMessage::Text(
            r#"{"channel": "allMids", "data": {"mids": {}}}"#.into(),
        ));
        assert!(matches!(parsed, Some(WsEvent::AllMids(_))));

        let parsed = HyperethWebSocket::parse_message(WsMessage::Text("not json".into()));
        assert!(matches!(parsed, Some(WsEvent::Other)));
    }
}
