/*
[INPUT]:  Order and cancel parameters, signed action envelopes
[OUTPUT]: Hyperliquid wire-format actions and exchange responses
[POS]:    Hyperliquid layer - /exchange action and response types
[UPDATE]: When Hyperliquid wire formats change
*/

use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::signing::{SIGNATURE_CHAIN_ID, Signature};
use crate::types::Environment;

/// Format a decimal for Hyperliquid wire fields: normalized, no trailing
/// zeros, no exponent.
pub fn decimal_to_wire(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Time-in-force for limit orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tif {
    Alo,
    Ioc,
    Gtc,
}

/// Order grouping mode; plain orders use `na`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grouping {
    #[serde(rename = "na")]
    Na,
    #[serde(rename = "normalTpsl")]
    NormalTpsl,
    #[serde(rename = "positionTpsl")]
    PositionTpsl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitParams {
    pub tif: Tif,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerParams {
    pub is_market: bool,
    pub trigger_px: String,
    pub tpsl: String,
}

/// Order type on the wire: `{"limit": {...}}` or `{"trigger": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderTypeWire {
    #[serde(rename = "limit")]
    Limit(LimitParams),
    #[serde(rename = "trigger")]
    Trigger(TriggerParams),
}

/// A single order in Hyperliquid wire format.
///
/// Field order matters: the MessagePack action hash covers these fields in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWire {
    /// Asset index from meta
    pub a: u32,
    /// Buy side
    pub b: bool,
    /// Price
    pub p: String,
    /// Size
    pub s: String,
    /// Reduce-only
    pub r: bool,
    /// Order type
    pub t: OrderTypeWire,
    /// Client order id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<String>,
}

impl OrderWire {
    /// Build a limit order wire from decimal price/size.
    pub fn limit(
        asset: u32,
        is_buy: bool,
        price: Decimal,
        size: Decimal,
        reduce_only: bool,
        tif: Tif,
    ) -> Self {
        Self {
            a: asset,
            b: is_buy,
            p: decimal_to_wire(price),
            s: decimal_to_wire(size),
            r: reduce_only,
            t: OrderTypeWire::Limit(LimitParams { tif }),
            c: None,
        }
    }
}

/// A single cancel in Hyperliquid wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelWire {
    /// Asset index from meta
    pub a: u32,
    /// Order id to cancel
    pub o: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAction {
    pub orders: Vec<OrderWire>,
    pub grouping: Grouping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelAction {
    pub cancels: Vec<CancelWire>,
}

/// Approve an agent wallet for trading (user-signed action).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveAgent {
    pub signature_chain_id: String,
    pub hyperliquid_chain: Environment,
    pub agent_address: Address,
    pub agent_name: String,
    pub nonce: u64,
}

impl ApproveAgent {
    pub fn new(environment: Environment, agent_address: Address, agent_name: &str, nonce: u64) -> Self {
        Self {
            signature_chain_id: SIGNATURE_CHAIN_ID.to_string(),
            hyperliquid_chain: environment,
            agent_address,
            agent_name: agent_name.to_string(),
            nonce,
        }
    }
}

/// Approve a builder fee cap for a builder address (user-signed action).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveBuilderFee {
    pub signature_chain_id: String,
    pub hyperliquid_chain: Environment,
    pub max_fee_rate: String,
    pub builder: Address,
    pub nonce: u64,
}

impl ApproveBuilderFee {
    pub fn new(environment: Environment, builder: Address, max_fee_rate: &str, nonce: u64) -> Self {
        Self {
            signature_chain_id: SIGNATURE_CHAIN_ID.to_string(),
            hyperliquid_chain: environment,
            max_fee_rate: max_fee_rate.to_string(),
            builder,
            nonce,
        }
    }
}

/// A Hyperliquid action, tagged with its wire `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "order")]
    Order(OrderAction),
    #[serde(rename = "cancel")]
    Cancel(CancelAction),
    #[serde(rename = "approveAgent")]
    ApproveAgent(ApproveAgent),
    #[serde(rename = "approveBuilderFee")]
    ApproveBuilderFee(ApproveBuilderFee),
}

/// Signed action envelope submitted to /exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub action: Action,
    pub nonce: u64,
    pub signature: Signature,
    pub vault_address: Option<Address>,
    pub expires_after: Option<u64>,
}

/// Response from /exchange: `{"status": "ok"|"err", "response": ...}` where
/// the response body is an object on success and a message string on error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub status: String,
    #[serde(default)]
    pub response: Option<ExchangeResponsePayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExchangeResponsePayload {
    Body(ExchangeResponseBody),
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeResponseBody {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ExchangeResponseData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeResponseData {
    #[serde(default)]
    pub statuses: Vec<OrderResultStatus>,
}

/// Per-order status inside an order/cancel response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderResultStatus {
    Resting { resting: RestingOrder },
    Filled { filled: FilledOrder },
    Error { error: String },
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestingOrder {
    pub oid: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilledOrder {
    pub oid: u64,
    pub total_sz: Decimal,
    pub avg_px: Decimal,
}

impl ExchangeResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Per-order statuses, empty when the response carries none.
    pub fn statuses(&self) -> &[OrderResultStatus] {
        match &self.response {
            Some(ExchangeResponsePayload::Body(body)) => body
                .data
                .as_ref()
                .map(|data| data.statuses.as_slice())
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Order id of the first resting order, if any.
    pub fn first_resting_oid(&self) -> Option<u64> {
        self.statuses().iter().find_map(|status| match status {
            OrderResultStatus::Resting { resting } => Some(resting.oid),
            _ => None,
        })
    }

    /// First per-order error, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.statuses().iter().find_map(|status| match status {
            OrderResultStatus::Error { error } => Some(error.as_str()),
            _ => None,
        })
    }

    /// Top-level error message when `status` is not ok.
    pub fn error_message(&self) -> Option<&str> {
        match &self.response {
            Some(ExchangeResponsePayload::Message(message)) if !self.is_ok() => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_decimal_to_wire_strips_zeros() {
        assert_eq!(decimal_to_wire(Decimal::new(210, 3)), "0.21");
        assert_eq!(decimal_to_wire("0.2100".parse().unwrap()), "0.21");
        assert_eq!(decimal_to_wire("50".parse().unwrap()), "50");
        assert_eq!(decimal_to_wire("50.000".parse().unwrap()), "50");
    }

    #[test]
    fn test_order_action_wire_shape() {
        let action = Action::Order(OrderAction {
            orders: vec![OrderWire::limit(
                173,
                true,
                "0.21".parse().unwrap(),
                "50".parse().unwrap(),
                false,
                Tif::Gtc,
            )],
            grouping: Grouping::Na,
        });

        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "order");
        assert_eq!(value["grouping"], "na");
        let order = &value["orders"][0];
        assert_eq!(order["a"], 173);
        assert_eq!(order["b"], true);
        assert_eq!(order["p"], "0.21");
        assert_eq!(order["s"], "50");
        assert_eq!(order["r"], false);
        assert_eq!(order["t"]["limit"]["tif"], "Gtc");
        assert!(order.get("c").is_none());
    }

    #[test]
    fn test_cancel_action_wire_shape() {
        let action = Action::Cancel(CancelAction {
            cancels: vec![CancelWire { a: 173, o: 991 }],
        });
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "cancel");
        assert_eq!(value["cancels"][0]["a"], 173);
        assert_eq!(value["cancels"][0]["o"], 991);
    }

    #[test]
    fn test_approve_agent_wire_shape() {
        let agent: Address = "0x97271b6b7f3b23a2f4700ae671b05515ae5c3319"
            .parse()
            .unwrap();
        let action = Action::ApproveAgent(ApproveAgent::new(
            Environment::Testnet,
            agent,
            "HyperEthBot",
            1_700_000_000_000,
        ));

        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "approveAgent");
        assert_eq!(value["signatureChainId"], "0x66eee");
        assert_eq!(value["hyperliquidChain"], "Testnet");
        assert_eq!(
            value["agentAddress"],
            "0x97271b6b7f3b23a2f4700ae671b05515ae5c3319"
        );
        assert_eq!(value["agentName"], "HyperEthBot");
    }

    #[test]
    fn test_exchange_response_resting() {
        let response: ExchangeResponse = serde_json::from_str(
            r#"{
                "status": "ok",
                "response": {
                    "type": "order",
                    "data": {"statuses": [{"resting": {"oid": 77}}, {"error": "too small"}]}
                }
            }"#,
        )
        .unwrap();

        assert!(response.is_ok());
        assert_eq!(response.first_resting_oid(), Some(77));
        assert_eq!(response.first_error(), Some("too small"));
    }

    #[test]
    fn test_exchange_response_error_string() {
        let response: ExchangeResponse =
            serde_json::from_str(r#"{"status": "err", "response": "bad nonce"}"#).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.error_message(), Some("bad nonce"));
        assert!(response.statuses().is_empty());
    }

    #[test]
    fn test_cancel_status_plain_string() {
        let response: ExchangeResponse = serde_json::from_str(
            r#"{
                "status": "ok",
                "response": {"type": "cancel", "data": {"statuses": ["success"]}}
            }"#,
        )
        .unwrap();
        assert_eq!(
            response.statuses(),
            &[OrderResultStatus::Plain("success".into())]
        );
    }
}
