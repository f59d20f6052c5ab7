//! get_financials tool - income statement, balance sheet, cash flow

use async_trait::async_trait;
use serde_json::Value;

use super::args::{FinancialsArgs, parse_args, query_hint};
use super::{Tool, ToolContext, ToolResult};
use crate::envelope::ResponseEnvelope;
use crate::gateway::{ENGINE_FINANCE, SearchParams};
use crate::vocab::{FinancialWindow, Vocabulary};

const TOOL_TAG: &str = "financials";

/// Financial statements for a ticker, optionally restricted to a window
pub async fn get_financials(ctx: &ToolContext, args: FinancialsArgs) -> ResponseEnvelope {
    let window = match args.window.as_deref().filter(|w| !w.is_empty()) {
        None => None,
        Some(w) => match FinancialWindow::parse(w) {
            Ok(window) => Some(window),
            Err(e) => return ResponseEnvelope::error(&args.q, e.to_string(), TOOL_TAG),
        },
    };

    let mut params = SearchParams::for_engine(ENGINE_FINANCE);
    params.set("q", args.q.as_str());
    if let Some(window) = window {
        params.set("window", window.as_str());
    }
    args.locale.apply(&mut params);

    ctx.search_envelope(params, &args.q, TOOL_TAG, "API Error: ").await
}

pub struct FinancialsTool;

#[async_trait]
impl Tool for FinancialsTool {
    fn name(&self) -> &'static str {
        "get_financials"
    }

    fn description(&self) -> &'static str {
        "Get detailed financial statements for a stock. Returns the complete API response."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "q": {"type": "string", "description": "Ticker, e.g. AAPL:NASDAQ"},
                "window": {
                    "type": "string",
                    "enum": FinancialWindow::values(),
                    "description": "Reporting window (optional)"
                },
                "gl": {"type": "string", "description": "Country code for localization"},
                "hl": {"type": "string", "description": "Language code for localization"}
            },
            "required": ["q"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let args: FinancialsArgs = match parse_args(input.clone()) {
            Ok(args) => args,
            Err(msg) => {
                let envelope = ResponseEnvelope::error(query_hint(&input, "q"), msg, TOOL_TAG);
                return Ok(ToolResult::from_envelope(&envelope));
            }
        };

        Ok(ToolResult::from_envelope(&get_financials(ctx, args).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{RecordingBackend, context_with, context_without_key};
    use serde_json::json;

    #[tokio::test]
    async fn test_window_omitted_by_default() {
        let backend = RecordingBackend::replying(json!({"financials": []}));
        let ctx = context_with(backend.clone());

        let env = get_financials(&ctx, FinancialsArgs::new("MSFT:NASDAQ")).await;

        let call = backend.last_call();
        assert!(!call.contains("window"));
        assert_eq!(call.get_str("q"), Some("MSFT:NASDAQ"));
        assert_eq!(env.tool, "financials");
        assert!(env.is_success());
    }

    #[tokio::test]
    async fn test_window_sent_when_valid() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let mut args = FinancialsArgs::new("MSFT:NASDAQ");
        args.window = Some("3month".to_string());
        get_financials(&ctx, args).await;

        assert_eq!(backend.last_call().get_str("window"), Some("3month"));
    }

    #[tokio::test]
    async fn test_invalid_window() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let mut args = FinancialsArgs::new("MSFT");
        args.window = Some("decade".to_string());
        let env = get_financials(&ctx, args).await;

        assert_eq!(
            env.error_message(),
            Some("Invalid window 'decade'. Valid windows: week, month, 3month, 6month, year")
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_uses_same_message() {
        let ctx = context_without_key(RecordingBackend::replying(json!({})));
        let env = get_financials(&ctx, FinancialsArgs::new("MSFT")).await;
        assert_eq!(env.error_message(), Some("SERP_API_KEY not configured"));
    }
}
