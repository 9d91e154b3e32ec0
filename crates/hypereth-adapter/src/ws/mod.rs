/*
[INPUT]:  WebSocket configuration and subscription channels
[OUTPUT]: Real-time market data and correlated request/response exchange
[POS]:    WebSocket layer - real-time data streams and post requests
[UPDATE]: When adding new channels or changing connection logic
*/

pub mod client;
pub mod message;

pub use client::HyperethWebSocket;
pub use message::{
    AllMidsData, OrderUpdate, PostPayload, PostResponse, Subscription, SubscriptionAck, WsEvent,
    WsOrder, WsTrade,
};
