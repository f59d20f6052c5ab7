//! get_stock_news tool - news feed for a ticker

use async_trait::async_trait;
use serde_json::Value;

use super::args::{DEFAULT_NEWS_COUNT, StockNewsArgs, parse_args, query_hint};
use super::{Tool, ToolContext, ToolResult};
use crate::envelope::ResponseEnvelope;
use crate::error::ValidationError;
use crate::gateway::{ENGINE_FINANCE, SearchParams};
use crate::vocab::{NewsCategory, Vocabulary};

const TOOL_TAG: &str = "news";

const MIN_NEWS: i64 = 1;
const MAX_NEWS: i64 = 100;

/// News for a ticker. Parameters equal to the API defaults (`num=10`,
/// `category=all`, `start=0`) are left out of the request.
pub async fn get_stock_news(ctx: &ToolContext, args: StockNewsArgs) -> ResponseEnvelope {
    if !(MIN_NEWS..=MAX_NEWS).contains(&args.num) {
        let err = ValidationError::OutOfRange {
            min: MIN_NEWS as u32,
            max: MAX_NEWS as u32,
        };
        return ResponseEnvelope::error(&args.q, err.to_string(), TOOL_TAG);
    }

    let category = match args.category.as_deref().filter(|c| !c.is_empty()) {
        None => None,
        Some(c) => match NewsCategory::parse(c) {
            Ok(category) => Some(category),
            Err(e) => return ResponseEnvelope::error(&args.q, e.to_string(), TOOL_TAG),
        },
    };

    let mut params = SearchParams::for_engine(ENGINE_FINANCE);
    params.set("q", args.q.as_str());
    if let Some(category) = category.filter(|c| *c != NewsCategory::All) {
        params.set("category", category.as_str());
    }
    if args.num != DEFAULT_NEWS_COUNT {
        params.set("num", args.num);
    }
    if let Some(start) = args.start.filter(|s| *s != 0) {
        params.set("start", start);
    }
    args.locale.apply(&mut params);

    ctx.search_envelope(params, &args.q, TOOL_TAG, "API Error: ").await
}

pub struct StockNewsTool;

#[async_trait]
impl Tool for StockNewsTool {
    fn name(&self) -> &'static str {
        "get_stock_news"
    }

    fn description(&self) -> &'static str {
        "Get the latest news for a stock. Returns the complete API response."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "q": {"type": "string", "description": "Ticker, e.g. AAPL:NASDAQ"},
                "category": {
                    "type": "string",
                    "enum": NewsCategory::values(),
                    "description": "News category (optional)"
                },
                "num": {
                    "type": "integer",
                    "minimum": MIN_NEWS,
                    "maximum": MAX_NEWS,
                    "description": "Number of news items (default: 10)"
                },
                "start": {"type": "integer", "description": "Result offset"},
                "gl": {"type": "string", "description": "Country code for localization"},
                "hl": {"type": "string", "description": "Language code for localization"}
            },
            "required": ["q"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let args: StockNewsArgs = match parse_args(input.clone()) {
            Ok(args) => args,
            Err(msg) => {
                let envelope = ResponseEnvelope::error(query_hint(&input, "q"), msg, TOOL_TAG);
                return Ok(ToolResult::from_envelope(&envelope));
            }
        };

        Ok(ToolResult::from_envelope(&get_stock_news(ctx, args).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{RecordingBackend, context_with, context_without_key};
    use serde_json::json;

    #[tokio::test]
    async fn test_defaults_leave_optional_params_out() {
        let backend = RecordingBackend::replying(json!({"news_results": []}));
        let ctx = context_with(backend.clone());

        let env = get_stock_news(&ctx, StockNewsArgs::new("AAPL")).await;

        let call = backend.last_call();
        assert!(!call.contains("num"));
        assert!(!call.contains("category"));
        assert!(!call.contains("start"));
        assert_eq!(env.tool, "news");
        assert!(env.is_success());
    }

    #[tokio::test]
    async fn test_num_out_of_range_rejected() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        for num in [0, 101, 150, -5] {
            let mut args = StockNewsArgs::new("AAPL");
            args.num = num;
            let env = get_stock_news(&ctx, args).await;
            assert_eq!(env.error_message(), Some("Number of news items must be between 1 and 100"));
        }
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_range_checked_before_credential() {
        let ctx = context_without_key(RecordingBackend::replying(json!({})));
        let mut args = StockNewsArgs::new("AAPL");
        args.num = 150;
        let env = get_stock_news(&ctx, args).await;
        assert!(env.error_message().unwrap().contains("between 1 and 100"));
    }

    #[tokio::test]
    async fn test_non_default_values_sent() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let mut args = StockNewsArgs::new("AAPL");
        args.num = 25;
        args.start = Some(20);
        args.category = Some("opinion".to_string());
        get_stock_news(&ctx, args).await;

        let call = backend.last_call();
        assert_eq!(call.get_int("num"), Some(25));
        assert_eq!(call.get_int("start"), Some(20));
        assert_eq!(call.get_str("category"), Some("opinion"));
    }

    #[tokio::test]
    async fn test_category_all_not_sent() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let mut args = StockNewsArgs::new("AAPL");
        args.category = Some("all".to_string());
        args.start = Some(0);
        get_stock_news(&ctx, args).await;

        let call = backend.last_call();
        assert!(!call.contains("category"));
        assert!(!call.contains("start"));
    }

    #[tokio::test]
    async fn test_invalid_category() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        let mut args = StockNewsArgs::new("AAPL");
        args.category = Some("rumors".to_string());
        let env = get_stock_news(&ctx, args).await;

        assert_eq!(
            env.error_message(),
            Some("Invalid category 'rumors'. Valid categories: all, latest, opinion, press_releases")
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_boundaries_accepted() {
        let backend = RecordingBackend::replying(json!({}));
        let ctx = context_with(backend.clone());

        for num in [1, 100] {
            let mut args = StockNewsArgs::new("AAPL");
            args.num = num;
            assert!(get_stock_news(&ctx, args).await.is_success());
        }
        assert_eq!(backend.calls().len(), 2);
    }
}
