//! debug_api_response tool - raw passthrough to any SerpAPI engine

use async_trait::async_trait;
use serde_json::Value;

use super::args::{DebugArgs, parse_args, query_hint};
use super::{Tool, ToolContext, ToolResult};
use crate::envelope::ResponseEnvelope;
use crate::gateway::{ENGINE_FINANCE, ENGINE_FINANCE_MARKETS, SearchParams};

const TOOL_TAG: &str = "debug";

/// Send `q` to an arbitrary engine and return the raw body.
///
/// `q` goes out as `q` for `google_finance` and as `trend` for
/// `google_finance_markets`; other engines get only the locale parameters.
pub async fn debug_api_response(ctx: &ToolContext, args: DebugArgs) -> ResponseEnvelope {
    let engine = args
        .engine
        .clone()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| ENGINE_FINANCE.to_string());

    let mut params = SearchParams::for_engine(engine.as_str());
    match engine.as_str() {
        ENGINE_FINANCE => {
            params.set("q", args.q.as_str());
        }
        ENGINE_FINANCE_MARKETS => {
            params.set("trend", args.q.as_str());
        }
        _ => {}
    }
    args.locale.apply(&mut params);

    let envelope = ctx.search_envelope(params, &args.q, TOOL_TAG, "Debug API Error: ").await;
    if envelope.is_success() { envelope.with_engine(engine) } else { envelope }
}

pub struct DebugApiResponseTool;

#[async_trait]
impl Tool for DebugApiResponseTool {
    fn name(&self) -> &'static str {
        "debug_api_response"
    }

    fn description(&self) -> &'static str {
        "Debug tool to inspect raw API responses from any engine."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "q": {"type": "string", "description": "Query (ticker, or trend for google_finance_markets)"},
                "engine": {"type": "string", "description": "SerpAPI engine (default: google_finance)"},
                "gl": {"type": "string", "description": "Country code for localization"},
                "hl": {"type": "string", "description": "Language code for localization"}
            },
            "required": ["q"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let args: DebugArgs = match parse_args(input.clone()) {
            Ok(args) => args,
            Err(msg) => {
                let envelope = ResponseEnvelope::error(query_hint(&input, "q"), msg, TOOL_TAG);
                return Ok(ToolResult::from_envelope(&envelope));
            }
        };

        Ok(ToolResult::from_envelope(&debug_api_response(ctx, args).await))
    }
}
