/*
[INPUT]:  Raw WebSocket message JSON
[OUTPUT]: Parsed channel events and subscription payloads
[POS]:    WebSocket layer - message parsing and subscription formats
[UPDATE]: When adding new message types or changing format
*/

use std::collections::HashMap;

use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscription payload, tagged with the channel `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Subscription {
    AllMids,
    OrderUpdates { user: Address },
    Trades { coin: String },
    L2Book { coin: String },
    Candle { coin: String, interval: String },
}

/// An incoming message, dispatched on its `channel` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "channel", content = "data")]
pub enum WsEvent {
    #[serde(rename = "allMids")]
    AllMids(AllMidsData),
    #[serde(rename = "orderUpdates")]
    OrderUpdates(Vec<OrderUpdate>),
    #[serde(rename = "subscriptionResponse")]
    SubscriptionResponse(SubscriptionAck),
    #[serde(rename = "post")]
    Post(PostResponse),
    #[serde(rename = "trades")]
    Trades(Vec<WsTrade>),
    #[serde(rename = "l2Book")]
    L2Book(serde_json::Value),
    #[serde(rename = "candle")]
    Candle(serde_json::Value),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllMidsData {
    pub mids: HashMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub order: WsOrder,
    pub status: String,
    pub status_timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsOrder {
    pub coin: String,
    pub side: String,
    pub limit_px: Decimal,
    pub sz: Decimal,
    pub oid: u64,
    pub timestamp: u64,
    #[serde(default)]
    pub orig_sz: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WsTrade {
    pub coin: String,
    pub side: String,
    pub px: Decimal,
    pub sz: Decimal,
    pub time: u64,
    #[serde(default)]
    pub tid: Option<u64>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// Confirmation echoed back for subscribe/unsubscribe requests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubscriptionAck {
    pub method: String,
    #[serde(default)]
    pub subscription: serde_json::Value,
}

/// Response to a `method: post` request, correlated by `id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub response: PostPayload,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostPayload {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}
