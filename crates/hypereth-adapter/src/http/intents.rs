/*
[INPUT]:  Hyperliquid actions routed through managed agent wallets
[OUTPUT]: Trade intent submission results
[POS]:    HTTP layer - trade intent endpoint (require x-api-key)
[UPDATE]: When the intent payload format or routing changes
*/

use reqwest::Method;

use crate::http::{HyperethClient, Result};
use crate::hyperliquid::Action;
use crate::types::{TradeIntentRequest, TradeIntentResponse};

impl HyperethClient {
    /// Submit a trade intent for execution through a managed agent wallet
    ///
    /// POST /v1/trade/intent
    ///
    /// HyperETH signs the action with the managed agent wallet server-side;
    /// the nonce is a millisecond timestamp chosen by the caller.
    pub async fn submit_trade_intent(
        &self,
        action: Action,
        agent_wallet: &str,
        nonce: u64,
    ) -> Result<TradeIntentResponse> {
        self.require_api_key()?;

        let body = TradeIntentRequest::new(action, agent_wallet, nonce);
        let builder = self.api_request(Method::POST, "/v1/trade/intent")?;
        self.send_json(builder.json(&body)).await
    }
}
