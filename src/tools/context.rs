//! Tool execution context - the gateway and credential shared by all tools

use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use serde_json::Value;

use crate::envelope::ResponseEnvelope;
use crate::error::{Result, SerpkitError};
use crate::gateway::{SearchBackend, SearchParams};

/// Environment variable holding the SerpAPI key
pub const API_KEY_ENV: &str = "SERP_API_KEY";

/// Default cap on returned flight itineraries
pub const DEFAULT_MAX_FLIGHT_RESULTS: usize = 5;

/// Where the SerpAPI key comes from. Resolved on every call, so a key added
/// to the environment after startup is picked up and a missing key is
/// reported per call rather than at launch.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Read the named environment variable at call time
    Env(String),
    /// Fixed key, e.g. from tests or an embedding application
    Fixed(String),
    /// No key available
    Missing,
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(var) => f.debug_tuple("Env").field(var).finish(),
            Self::Fixed(_) => f.write_str("Fixed(***)"),
            Self::Missing => f.write_str("Missing"),
        }
    }
}

impl Default for CredentialSource {
    fn default() -> Self {
        Self::Env(API_KEY_ENV.to_string())
    }
}

impl CredentialSource {
    /// Current key, or `MissingCredential` when absent or empty
    pub fn resolve(&self) -> Result<String> {
        let value = match self {
            Self::Env(var) => std::env::var(var).ok(),
            Self::Fixed(key) => Some(key.clone()),
            Self::Missing => None,
        };

        let env_var = match self {
            Self::Env(var) => var.as_str(),
            _ => API_KEY_ENV,
        };
        value
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SerpkitError::MissingCredential {
                env_var: env_var.to_string(),
            })
    }
}

/// Execution context handed to every tool
#[derive(Clone)]
pub struct ToolContext {
    backend: Arc<dyn SearchBackend>,
    credentials: CredentialSource,
    default_max_flight_results: usize,
}

impl ToolContext {
    pub fn new(backend: Arc<dyn SearchBackend>, credentials: CredentialSource) -> Self {
        Self {
            backend,
            credentials,
            default_max_flight_results: DEFAULT_MAX_FLIGHT_RESULTS,
        }
    }

    /// Override how many itineraries the flight tool returns by default
    pub fn with_default_max_flight_results(mut self, max: usize) -> Self {
        self.default_max_flight_results = max;
        self
    }

    pub fn default_max_flight_results(&self) -> usize {
        self.default_max_flight_results
    }

    pub fn credentials(&self) -> &CredentialSource {
        &self.credentials
    }

    /// Attach the credential and issue one request.
    ///
    /// A missing key short-circuits before the backend is touched.
    pub async fn search(&self, mut params: SearchParams) -> Result<Value> {
        let api_key = self.credentials.resolve()?;
        params.set("api_key", api_key);

        info!("Dispatching {} request", params.engine().unwrap_or("unknown"));
        debug!("Search params: {:?}", params.redacted());

        Ok(self.backend.search(&params).await?)
    }

    /// Issue a request and wrap the outcome in a [`ResponseEnvelope`].
    ///
    /// Upstream failures are prefixed with `error_prefix`; a missing
    /// credential is reported as-is.
    pub async fn search_envelope(
        &self,
        params: SearchParams,
        query: &str,
        tool: &str,
        error_prefix: &str,
    ) -> ResponseEnvelope {
        match self.search(params).await {
            Ok(data) => ResponseEnvelope::success(query, data, tool),
            Err(SerpkitError::Gateway(e)) => ResponseEnvelope::error(query, format!("{}{}", error_prefix, e), tool),
            Err(e) => ResponseEnvelope::error(query, e.to_string(), tool),
        }
    }
}
