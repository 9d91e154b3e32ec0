/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public HyperETH adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod hyperliquid;
pub mod types;
pub mod ws;

// Re-export commonly used types from auth
pub use auth::{
    EvmWalletSigner,
    MockWalletSigner,
    WalletSigner,
    timestamp_nonce_ms,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    HyperethClient,
    HyperethError,
    Result,
};

// Re-export the Hyperliquid action and data surface
pub use hyperliquid::{
    Action,
    ActionRequest,
    AssetMap,
    CancelAction,
    CancelWire,
    ExchangeResponse,
    Grouping,
    Meta,
    OrderAction,
    OrderWire,
    Tif,
};

// Re-export all HyperETH API types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{
    HyperethWebSocket,
    Subscription,
    WsEvent,
};
