//! compare_stocks tool - side-by-side price comparison

use async_trait::async_trait;
use serde_json::Value;

use super::args::{GraphArgs, parse_args, query_hint};
use super::graph_data::{period_lookup, period_schema};
use super::{Tool, ToolContext, ToolResult};
use crate::envelope::ResponseEnvelope;

const TOOL_TAG: &str = "comparison";

/// Compare several tickers. `q` carries the comma-separated list as typed.
pub async fn compare_stocks(ctx: &ToolContext, args: GraphArgs) -> ResponseEnvelope {
    period_lookup(ctx, args, TOOL_TAG).await
}

pub struct CompareStocksTool;

#[async_trait]
impl Tool for CompareStocksTool {
    fn name(&self) -> &'static str {
        "compare_stocks"
    }

    fn description(&self) -> &'static str {
        "Compare multiple stocks over a period. Returns the complete API response."
    }

    fn input_schema(&self) -> Value {
        period_schema("Tickers to compare, e.g. AAPL:NASDAQ,MSFT:NASDAQ")
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let args: GraphArgs = match parse_args(input.clone()) {
            Ok(args) => args,
            Err(msg) => {
                let envelope = ResponseEnvelope::error(query_hint(&input, "q"), msg, TOOL_TAG);
                return Ok(ToolResult::from_envelope(&envelope));
            }
        };

        Ok(ToolResult::from_envelope(&compare_stocks(ctx, args).await))
    }
}
