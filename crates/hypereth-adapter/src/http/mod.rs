/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod agent_wallets;
pub mod api_keys;
pub mod client;
pub mod error;
pub mod intents;

pub use client::{ClientConfig, HyperethClient};
pub use error::{HyperethError, Result};
