/*
[INPUT]:  Hyperliquid action definitions and signing requirements
[OUTPUT]: Signed actions, info queries, and exchange calls
[POS]:    Hyperliquid layer - proxied /info and /exchange integration
[UPDATE]: When Hyperliquid action or endpoint formats change
*/

pub mod actions;
pub mod builder;
pub mod exchange;
pub mod info;
pub mod meta;
pub mod signing;

pub use actions::{
    Action, ActionRequest, ApproveAgent, ApproveBuilderFee, CancelAction, CancelWire,
    ExchangeResponse, FilledOrder, Grouping, LimitParams, OrderAction, OrderResultStatus,
    OrderTypeWire, OrderWire, RestingOrder, Tif, TriggerParams, decimal_to_wire,
};
pub use builder::{BUILDER_ADDRESS, BUILDER_FEE_BPS, builder_max_fee_rate};
pub use exchange::{generate_agent_wallet, sign_cancel_action, sign_order_action};
pub use info::{Candle, CandleSnapshotRequest, Fill, InfoRequest, L2Book, L2Level, OpenOrder};
pub use meta::{AssetInfo, AssetMap, Meta, round_price, round_size};
pub use signing::{SIGNATURE_CHAIN_ID, Signature};
