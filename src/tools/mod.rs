//! Tool system for agent runtimes
//!
//! Each tool validates its arguments, builds a SerpAPI parameter map, calls the
//! gateway held by the [`ToolContext`], and shapes the answer. Tools never
//! fail outward: every problem ends up as an error result.

mod args;
mod compare_stocks;
mod context;
mod debug_response;
mod executor;
mod financials;
mod flights;
mod graph_data;
mod help;
mod market_data;
mod stock_news;
mod stock_quote;

pub use args::{
    DebugArgs, FinancialsArgs, FlightSearchArgs, GraphArgs, LocaleArgs, MarketDataArgs, StockNewsArgs,
    StockQuoteArgs,
};
pub use context::{API_KEY_ENV, CredentialSource, ToolContext};
pub use executor::ToolExecutor;
pub use help::{HELP_RESOURCE_URI, help_text};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::ResponseEnvelope;

/// A tool that can be called by an agent
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches the caller's tool_use name)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error>;
}

/// Result from tool execution
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    pub content: Value,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Bare `{"error": message}` result
    pub fn error_message(message: impl Into<String>) -> Self {
        Self::error(serde_json::json!({ "error": message.into() }))
    }

    pub fn from_envelope(envelope: &ResponseEnvelope) -> Self {
        Self {
            content: envelope.to_value(),
            is_error: !envelope.is_success(),
        }
    }
}

/// Tool definition advertised to the caller
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Convert to the MCP `tools/list` entry format
    pub fn to_mcp_schema(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema,
        })
    }
}

/// A tool invocation: name plus JSON arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub input: Value,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
        }
    }
}

// Re-export individual tools for direct access if needed
pub use compare_stocks::{CompareStocksTool, compare_stocks};
pub use debug_response::{DebugApiResponseTool, debug_api_response};
pub use financials::{FinancialsTool, get_financials};
pub use flights::{FlightSearchResponse, GoogleFlightsTool, google_flights};
pub use graph_data::{GraphDataTool, get_graph_data};
pub use market_data::{MarketDataTool, get_market_data};
pub use stock_news::{StockNewsTool, get_stock_news};
pub use stock_quote::{StockQuoteTool, get_stock_quote};

#[cfg(test)]
pub(crate) mod testing;
