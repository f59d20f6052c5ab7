//! External call gateway - the one place requests leave the process
//!
//! Every tool builds a [`SearchParams`] and hands it to a [`SearchBackend`].
//! The backend answers with the decoded JSON body or a [`GatewayError`];
//! callers never probe the body for an `error` key themselves.

mod params;
mod serpapi;

pub use params::{ParamValue, SearchParams};
pub use serpapi::{SERPAPI_URL, SerpApiClient, SerpApiConfig};

use async_trait::async_trait;
use serde_json::Value;

/// Engine selectors used by the tools
pub const ENGINE_FLIGHTS: &str = "google_flights";
pub const ENGINE_FINANCE: &str = "google_finance";
pub const ENGINE_FINANCE_MARKETS: &str = "google_finance_markets";

/// Failure of a single search call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The API answered with an in-band `error` field
    #[error("{0}")]
    Api(String),

    /// Network failure, undecodable body, or similar
    #[error("{0}")]
    Transport(String),
}

impl GatewayError {
    pub fn message(&self) -> &str {
        match self {
            Self::Api(msg) | Self::Transport(msg) => msg,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// One-shot search backend. No retries; one call, one outcome.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<Value, GatewayError>;
}

/// Split a decoded body into success or in-band API error
pub fn classify_body(body: Value) -> Result<Value, GatewayError> {
    match body.get("error") {
        Some(Value::String(msg)) => Err(GatewayError::Api(msg.clone())),
        Some(Value::Null) | None => Ok(body),
        Some(other) => Err(GatewayError::Api(other.to_string())),
    }
}
