//! get_stock_quote tool - full Google Finance page for one ticker

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use super::args::{StockQuoteArgs, parse_args, query_hint};
use super::{Tool, ToolContext, ToolResult};
use crate::envelope::ResponseEnvelope;
use crate::error::ValidationError;
use crate::gateway::{ENGINE_FINANCE, SearchParams};
use crate::query::normalize_query;

const TOOL_TAG: &str = "stock_quote";

/// Quote lookup. `EXCHANGE:SYMBOL` queries are rewritten to `SYMBOL:EXCHANGE`
/// before dispatch; the envelope keeps the caller's original query.
pub async fn get_stock_quote(ctx: &ToolContext, args: StockQuoteArgs) -> ResponseEnvelope {
    if args.q.trim().is_empty() {
        return ResponseEnvelope::error(&args.q, ValidationError::EmptyQuery.to_string(), TOOL_TAG);
    }

    let normalized = normalize_query(&args.q);
    if normalized != args.q {
        debug!("get_stock_quote: normalized '{}' to '{}'", args.q, normalized);
    }

    let mut params = SearchParams::for_engine(ENGINE_FINANCE);
    params.set("q", normalized);
    args.locale.apply(&mut params);

    ctx.search_envelope(params, &args.q, TOOL_TAG, "API Error: ").await
}

pub struct StockQuoteTool;

#[async_trait]
impl Tool for StockQuoteTool {
    fn name(&self) -> &'static str {
        "get_stock_quote"
    }

    fn description(&self) -> &'static str {
        "Get comprehensive stock information for a ticker (e.g. AAPL, AAPL:NASDAQ or NASDAQ:AAPL). Returns the complete API response."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "q": {
                    "type": "string",
                    "description": "Ticker, optionally SYMBOL:EXCHANGE or EXCHANGE:SYMBOL"
                },
                "gl": {
                    "type": "string",
                    "description": "Country code for localization"
                },
                "hl": {
                    "type": "string",
                    "description": "Language code for localization"
                }
            },
            "required": ["q"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let args: StockQuoteArgs = match parse_args(input.clone()) {
            Ok(args) => args,
            Err(msg) => {
                let envelope = ResponseEnvelope::error(query_hint(&input, "q"), msg, TOOL_TAG);
                return Ok(ToolResult::from_envelope(&envelope));
            }
        };

        Ok(ToolResult::from_envelope(&get_stock_quote(ctx, args).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{RecordingBackend, context_with, context_without_key};
    use serde_json::json;

    #[tokio::test]
    async fn test_exchange_first_query_is_normalized() {
        let backend = RecordingBackend::replying(json!({"summary": {"title": "Apple Inc"}}));
        let ctx = context_with(backend.clone());

        let env = get_stock_quote(&ctx, StockQuoteArgs::new("NASDAQ:AAPL")).await;

        let call = backend.last_call();
        assert_eq!(call.engine(), Some("google_finance"));
        assert_eq!(call.get_str("q"), Some("AAPL:NASDAQ"));
        assert_eq!(env.query, "NASDAQ:AAPL");
        assert_eq!(env.tool, "stock_quote");
        assert_eq!(env.api_response().unwrap()["summary"]["title"], "Apple Inc");
    }

    #[tokio::test]
    async fn test_empty_query_rejected_without_call() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let env = get_stock_quote(&ctx, StockQuoteArgs::new("   ")).await;
        assert_eq!(env.error_message(), Some("Query cannot be empty"));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_without_key(backend.clone());

        let env = get_stock_quote(&ctx, StockQuoteArgs::new("AAPL")).await;
        assert_eq!(env.error_message(), Some("SERP_API_KEY not configured"));
        assert_eq!(env.tool, "stock_quote");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_locale_passed_through() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let mut args = StockQuoteArgs::new("AAPL");
        args.locale.gl = Some("us".to_string());
        get_stock_quote(&ctx, args).await;

        let call = backend.last_call();
        assert_eq!(call.get_str("gl"), Some("us"));
        assert!(!call.contains("hl"));
    }

    #[tokio::test]
    async fn test_execute_with_bad_arguments() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let result = StockQuoteTool.execute(json!({"q": 42}), &ctx).await.unwrap();
        assert!(result.is_error);
        assert_eq!(result.content["tool"], "stock_quote");
        assert!(result.content["error"].as_str().unwrap().starts_with("Invalid arguments"));
        assert!(backend.calls().is_empty());
    }
}
