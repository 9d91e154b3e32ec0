/*
[INPUT]:  Agent wallet names and addresses, x-api-key credentials
[OUTPUT]: Managed agent wallet registration, listing, and deletion results
[POS]:    HTTP layer - managed agent wallet endpoints (require x-api-key)
[UPDATE]: When agent wallet endpoints change
*/

use reqwest::Method;

use crate::http::{HyperethClient, Result};
use crate::types::{AgentWallet, AgentWalletDeletion, RegisterAgentWalletRequest};

impl HyperethClient {
    /// Register a new managed agent wallet on HyperETH for Hyperliquid
    ///
    /// POST /v1/hl/agent_wallet/register
    ///
    /// The returned wallet still needs on-chain approval by the main wallet
    /// (see `approve_agent`) before it can trade.
    pub async fn register_agent_wallet(&self, name: &str) -> Result<AgentWallet> {
        self.require_api_key()?;

        let body = RegisterAgentWalletRequest {
            name: name.to_string(),
        };
        let builder = self.api_request(Method::POST, "/v1/hl/agent_wallet/register")?;
        self.send_json(builder.json(&body)).await
    }

    /// List all agent wallets managed by HyperETH for this API key
    ///
    /// GET /v1/hl/agent_wallet
    pub async fn list_agent_wallets(&self) -> Result<Vec<AgentWallet>> {
        self.require_api_key()?;

        let builder = self.api_request(Method::GET, "/v1/hl/agent_wallet")?;
        self.send_json(builder).await
    }

    /// Remove a managed agent wallet from HyperETH
    ///
    /// DELETE /v1/hl/agent_wallet/{address}
    ///
    /// This does not revoke the agent on Hyperliquid itself.
    pub async fn delete_agent_wallet(&self, address: &str) -> Result<AgentWalletDeletion> {
        self.require_api_key()?;

        let endpoint = format!("/v1/hl/agent_wallet/{}", address);
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_json(builder).await
    }
}
