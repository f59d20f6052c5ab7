//! get_graph_data tool - historical price graph for a ticker

use async_trait::async_trait;
use serde_json::Value;

use super::args::{GraphArgs, parse_args, query_hint};
use super::{Tool, ToolContext, ToolResult};
use crate::envelope::ResponseEnvelope;
use crate::gateway::{ENGINE_FINANCE, SearchParams};
use crate::vocab::{GraphPeriod, Vocabulary};

const TOOL_TAG: &str = "graph_data";

/// Price history over a period (default `1d`)
pub async fn get_graph_data(ctx: &ToolContext, args: GraphArgs) -> ResponseEnvelope {
    period_lookup(ctx, args, TOOL_TAG).await
}

/// Shared by graph data and stock comparison: both send `q` and `period`
/// to the finance engine and differ only in the envelope tag.
pub(super) async fn period_lookup(ctx: &ToolContext, args: GraphArgs, tool: &str) -> ResponseEnvelope {
    let period = match args.period.as_deref() {
        None => GraphPeriod::default(),
        Some(p) => match GraphPeriod::parse(p) {
            Ok(period) => period,
            Err(e) => return ResponseEnvelope::error(&args.q, e.to_string(), tool),
        },
    };

    let mut params = SearchParams::for_engine(ENGINE_FINANCE);
    params.set("q", args.q.as_str()).set("period", period.as_str());
    args.locale.apply(&mut params);

    ctx.search_envelope(params, &args.q, tool, "API Error: ").await
}

/// JSON schema shared with compare_stocks
pub(super) fn period_schema(q_description: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "q": {"type": "string", "description": q_description},
            "period": {
                "type": "string",
                "enum": GraphPeriod::values(),
                "description": "Time span of the graph (default: 1d)"
            },
            "gl": {"type": "string", "description": "Country code for localization"},
            "hl": {"type": "string", "description": "Language code for localization"}
        },
        "required": ["q"]
    })
}

pub struct GraphDataTool;

#[async_trait]
impl Tool for GraphDataTool {
    fn name(&self) -> &'static str {
        "get_graph_data"
    }

    fn description(&self) -> &'static str {
        "Get historical price data and graph information for a stock. Returns the complete API response."
    }

    fn input_schema(&self) -> Value {
        period_schema("Ticker, e.g. AAPL:NASDAQ")
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let args: GraphArgs = match parse_args(input.clone()) {
            Ok(args) => args,
            Err(msg) => {
                let envelope = ResponseEnvelope::error(query_hint(&input, "q"), msg, TOOL_TAG);
                return Ok(ToolResult::from_envelope(&envelope));
            }
        };

        Ok(ToolResult::from_envelope(&get_graph_data(ctx, args).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{RecordingBackend, context_with};
    use serde_json::json;

    #[tokio::test]
    async fn test_default_period() {
        let backend = RecordingBackend::replying(json!({"graph": []}));
        let ctx = context_with(backend.clone());

        let env = get_graph_data(&ctx, GraphArgs::new("GOOGL:NASDAQ")).await;

        let call = backend.last_call();
        assert_eq!(call.get_str("period"), Some("1d"));
        // No normalization outside the quote tool
        assert_eq!(call.get_str("q"), Some("GOOGL:NASDAQ"));
        assert_eq!(env.tool, "graph_data");
        assert!(env.is_success());
    }

    #[tokio::test]
    async fn test_explicit_period() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let mut args = GraphArgs::new("NASDAQ:AAPL");
        args.period = Some("ytd".to_string());
        get_graph_data(&ctx, args).await;

        let call = backend.last_call();
        assert_eq!(call.get_str("period"), Some("ytd"));
        assert_eq!(call.get_str("q"), Some("NASDAQ:AAPL"));
    }

    #[tokio::test]
    async fn test_invalid_period() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let mut args = GraphArgs::new("AAPL");
        args.period = Some("2w".to_string());
        let env = get_graph_data(&ctx, args).await;

        assert_eq!(
            env.error_message(),
            Some("Invalid period '2w'. Valid periods: 1d, 5d, 1m, 6m, ytd, 1y, 5y, max")
        );
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_schema_lists_periods() {
        let schema = GraphDataTool.input_schema();
        assert_eq!(schema["properties"]["period"]["enum"].as_array().unwrap().len(), 8);
        assert_eq!(schema["required"], json!(["q"]));
    }
}
