/*
[INPUT]:  Info query parameters (coin, user, time ranges)
[OUTPUT]: Market data and account state from the proxied /info endpoint
[POS]:    Hyperliquid layer - /v1/hl/info queries (require x-api-key)
[UPDATE]: When adding new info queries or changing response formats
*/

use std::collections::HashMap;

use alloy::primitives::Address;
use reqwest::Method;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::meta::Meta;
use crate::http::{HyperethClient, HyperethError, Result};

/// Request body of the /info endpoint, tagged with its wire `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InfoRequest {
    AllMids,
    Meta,
    L2Book {
        coin: String,
    },
    CandleSnapshot {
        req: CandleSnapshotRequest,
    },
    OpenOrders {
        user: Address,
    },
    UserFills {
        user: Address,
    },
    #[serde(rename_all = "camelCase")]
    UserFunding {
        user: Address,
        start_time: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        end_time: Option<u64>,
    },
    UserRateLimit {
        user: Address,
    },
    OrderStatus {
        user: Address,
        oid: u64,
    },
    ExchangeStatus,
    #[serde(rename_all = "camelCase")]
    FundingHistory {
        coin: String,
        start_time: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        end_time: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleSnapshotRequest {
    pub coin: String,
    pub interval: String,
    pub start_time: u64,
    pub end_time: u64,
}

/// L2 order book snapshot; `levels[0]` are bids, `levels[1]` are asks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct L2Book {
    pub coin: String,
    pub time: u64,
    pub levels: Vec<Vec<L2Level>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct L2Level {
    pub px: Decimal,
    pub sz: Decimal,
    pub n: u32,
}

impl L2Book {
    pub fn bids(&self) -> &[L2Level] {
        self.levels.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn asks(&self) -> &[L2Level] {
        self.levels.get(1).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Open time, ms
    pub t: u64,
    /// Close time, ms
    #[serde(rename = "T")]
    pub t_close: u64,
    /// Coin
    pub s: String,
    /// Interval
    pub i: String,
    pub o: Decimal,
    pub c: Decimal,
    pub h: Decimal,
    pub l: Decimal,
    pub v: Decimal,
    /// Trade count
    pub n: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrder {
    pub coin: String,
    pub limit_px: Decimal,
    pub oid: u64,
    /// "B" for bid, "A" for ask
    pub side: String,
    pub sz: Decimal,
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub coin: String,
    pub px: Decimal,
    pub sz: Decimal,
    pub side: String,
    pub time: u64,
    pub oid: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_pnl: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl HyperethClient {
    /// Mid prices for all assets, coin -> price
    pub async fn all_mids(&self) -> Result<HashMap<String, Decimal>> {
        self.post_info(&InfoRequest::AllMids).await
    }

    /// Asset metadata for all perp assets
    pub async fn meta(&self) -> Result<Meta> {
        self.post_info(&InfoRequest::Meta).await
    }

    /// Current mid price for one asset
    pub async fn market_price(&self, coin: &str) -> Result<Decimal> {
        let mids = self.all_mids().await?;
        mids.get(coin).copied().ok_or_else(|| {
            HyperethError::InvalidResponse(format!("no mid price for asset {coin}"))
        })
    }

    /// L2 order book for a coin
    pub async fn l2_book(&self, coin: &str) -> Result<L2Book> {
        self.post_info(&InfoRequest::L2Book { coin: coin.to_string() }).await
    }

    /// Historical candles for a coin over [start_time, end_time] in ms
    pub async fn candle_snapshot(
        &self,
        coin: &str,
        interval: &str,
        start_time: u64,
        end_time: u64,
    ) -> Result<Vec<Candle>> {
        self.post_info(&InfoRequest::CandleSnapshot {
            req: CandleSnapshotRequest {
                coin: coin.to_string(),
                interval: interval.to_string(),
                start_time,
                end_time,
            },
        })
        .await
    }

    /// Open orders for a user address
    pub async fn open_orders(&self, user: Address) -> Result<Vec<OpenOrder>> {
        self.post_info(&InfoRequest::OpenOrders { user }).await
    }

    /// Trade fills for a user address
    pub async fn user_fills(&self, user: Address) -> Result<Vec<Fill>> {
        self.post_info(&InfoRequest::UserFills { user }).await
    }

    /// Funding payments for a user; returned as-is
    pub async fn user_funding(
        &self,
        user: Address,
        start_time: u64,
        end_time: Option<u64>,
    ) -> Result<serde_json::Value> {
        self.post_info(&InfoRequest::UserFunding { user, start_time, end_time })
            .await
    }

    /// Rate limit state for a user; returned as-is
    pub async fn user_rate_limit(&self, user: Address) -> Result<serde_json::Value> {
        self.post_info(&InfoRequest::UserRateLimit { user }).await
    }

    /// Status of a specific order; returned as-is
    pub async fn order_status(&self, user: Address, oid: u64) -> Result<serde_json::Value> {
        self.post_info(&InfoRequest::OrderStatus { user, oid }).await
    }

    /// Funding rate history for a coin; returned as-is
    pub async fn funding_history(
        &self,
        coin: &str,
        start_time: u64,
        end_time: Option<u64>,
    ) -> Result<serde_json::Value> {
        self.post_info(&InfoRequest::FundingHistory {
            coin: coin.to_string(),
            start_time,
            end_time,
        })
        .await
    }

    async fn post_info<T: DeserializeOwned>(&self, request: &InfoRequest) -> Result<T> {
        self.require_api_key()?;
        let builder = self.api_request(Method::POST, "/v1/hl/info")?;
        self.send_json(builder.json(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ClientConfig;
    use crate::types::Environment;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_info_request_wire_tags() {
        let value = serde_json::to_value(&InfoRequest::AllMids).unwrap();
        assert_eq!(value, serde_json::json!({"type": "allMids"}));

        let value = serde_json::to_value(&InfoRequest::L2Book { coin: "ETH".into() }).unwrap();
        assert_eq!(value, serde_json::json!({"type": "l2Book", "coin": "ETH"}));

        let user: Address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
        let value = serde_json::to_value(&InfoRequest::UserFunding {
            user,
            start_time: 5,
            end_time: None,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "userFunding",
                "user": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
                "startTime": 5,
            })
        );
    }

    #[test]
    fn test_candle_snapshot_request_shape() {
        let value = serde_json::to_value(&InfoRequest::CandleSnapshot {
            req: CandleSnapshotRequest {
                coin: "DOGE".into(),
                interval: "5m".into(),
                start_time: 100,
                end_time: 200,
            },
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "candleSnapshot",
                "req": {"coin": "DOGE", "interval": "5m", "startTime": 100, "endTime": 200},
            })
        );
    }

    #[tokio::test]
    async fn test_all_mids_query() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/v1/hl/info"))
            .and(query_param("env", "testnet"))
            .and(header("x-api-key", "hk_test_key"))
            .and(body_partial_json(serde_json::json!({"type": "allMids"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ETH": "1891.4",
                "DOGE": "0.21035",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = HyperethClient::with_config_and_base_urls(
            ClientConfig::default(),
            Environment::Testnet,
            &server.uri(),
            &server.uri(),
        )
        .expect("client init");
        client.set_api_key("hk_test_key");

        let mids = client.all_mids().await.expect("all mids");
        assert_eq!(mids["ETH"], "1891.4".parse().unwrap());
        assert_eq!(mids["DOGE"], "0.21035".parse().unwrap());
    }

    #[tokio::test]
    async fn test_l2_book_query() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/v1/hl/info"))
            .and(body_partial_json(serde_json::json!({"type": "l2Book", "coin": "ETH"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "coin": "ETH",
                "time": 1700000000000u64,
                "levels": [
                    [{"px": "1891.0", "sz": "10.5", "n": 3}],
                    [{"px": "1891.8", "sz": "4.2", "n": 1}],
                ],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = HyperethClient::with_config_and_base_urls(
            ClientConfig::default(),
            Environment::Testnet,
            &server.uri(),
            &server.uri(),
        )
        .expect("client init");
        client.set_api_key("hk_test_key");

        let book = client.l2_book("ETH").await.expect("l2 book");
        assert_eq!(book.bids().len(), 1);
        assert_eq!(book.asks()[0].px, "1891.8".parse().unwrap());
    }

    #[tokio::test]
    async fn test_info_requires_api_key() {
        let server = MockServer::start().await;
        let client = HyperethClient::with_config_and_base_urls(
            ClientConfig::default(),
            Environment::Testnet,
            &server.uri(),
            &server.uri(),
        )
        .expect("client init");

        assert!(client.all_mids().await.is_err());
    }
}
