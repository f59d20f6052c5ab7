//! get_market_data tool - market trend lists (indexes, gainers, ...)

use async_trait::async_trait;
use serde_json::Value;

use super::args::{MarketDataArgs, parse_args, query_hint};
use super::{Tool, ToolContext, ToolResult};
use crate::envelope::ResponseEnvelope;
use crate::gateway::{ENGINE_FINANCE_MARKETS, SearchParams};
use crate::vocab::{MarketTrend, Vocabulary};

const TOOL_TAG: &str = "market_data";

/// Market overview for one trend list. Defaults to `indexes`.
pub async fn get_market_data(ctx: &ToolContext, args: MarketDataArgs) -> ResponseEnvelope {
    let trend_text = args.trend.unwrap_or_else(|| MarketTrend::default().as_str().to_string());
    let trend = match MarketTrend::parse(&trend_text) {
        Ok(trend) => trend,
        Err(e) => return ResponseEnvelope::error(&trend_text, e.to_string(), TOOL_TAG),
    };

    let mut params = SearchParams::for_engine(ENGINE_FINANCE_MARKETS);
    params.set("trend", trend.as_str());
    args.locale.apply(&mut params);

    ctx.search_envelope(params, trend.as_str(), TOOL_TAG, "API Error: ").await
}

pub struct MarketDataTool;

#[async_trait]
impl Tool for MarketDataTool {
    fn name(&self) -> &'static str {
        "get_market_data"
    }

    fn description(&self) -> &'static str {
        "Get market trends, indexes, and most active stocks. Returns the complete API response."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "trend": {
                    "type": "string",
                    "enum": MarketTrend::values(),
                    "description": "Trend list to fetch (default: indexes)"
                },
                "gl": {"type": "string", "description": "Country code for localization"},
                "hl": {"type": "string", "description": "Language code for localization"}
            },
            "required": []
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let args: MarketDataArgs = match parse_args(input.clone()) {
            Ok(args) => args,
            Err(msg) => {
                let envelope = ResponseEnvelope::error(query_hint(&input, "trend"), msg, TOOL_TAG);
                return Ok(ToolResult::from_envelope(&envelope));
            }
        };

        Ok(ToolResult::from_envelope(&get_market_data(ctx, args).await))
    }
}
