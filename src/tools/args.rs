//! Typed argument structs for each tool
//!
//! Vocabulary fields stay `String` here and are validated by the handlers,
//! so a bad value produces the tool's own error message rather than a serde one.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::gateway::SearchParams;

/// Default number of news items SerpAPI returns
pub const DEFAULT_NEWS_COUNT: i64 = 10;

/// Localization knobs shared by the finance tools
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleArgs {
    /// Country code, e.g. "us"
    pub gl: Option<String>,
    /// Language code, e.g. "en"
    pub hl: Option<String>,
}

impl LocaleArgs {
    pub fn apply(&self, params: &mut SearchParams) {
        params.set_opt_str("gl", self.gl.as_deref());
        params.set_opt_str("hl", self.hl.as_deref());
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchArgs {
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub airline_name: Option<String>,
    #[serde(default)]
    pub travel_class: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub max_price: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub max_results: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub passengers: Option<i64>,
}

impl FlightSearchArgs {
    pub fn new(
        departure_airport: impl Into<String>,
        arrival_airport: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            departure_airport: departure_airport.into(),
            arrival_airport: arrival_airport.into(),
            departure_date: departure_date.into(),
            return_date: None,
            airline_name: None,
            travel_class: None,
            max_price: None,
            max_results: None,
            passengers: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockQuoteArgs {
    pub q: String,
    #[serde(flatten)]
    pub locale: LocaleArgs,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketDataArgs {
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(flatten)]
    pub locale: LocaleArgs,
}

/// Arguments for both graph data and stock comparison
#[derive(Debug, Clone, Deserialize)]
pub struct GraphArgs {
    pub q: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(flatten)]
    pub locale: LocaleArgs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FinancialsArgs {
    pub q: String,
    #[serde(default)]
    pub window: Option<String>,
    #[serde(flatten)]
    pub locale: LocaleArgs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockNewsArgs {
    pub q: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_news_count", deserialize_with = "lenient_news_count")]
    pub num: i64,
    #[serde(default, deserialize_with = "lenient_int")]
    pub start: Option<i64>,
    #[serde(flatten)]
    pub locale: LocaleArgs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DebugArgs {
    pub q: String,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(flatten)]
    pub locale: LocaleArgs,
}

impl StockQuoteArgs {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            locale: LocaleArgs::default(),
        }
    }
}

impl GraphArgs {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            period: None,
            locale: LocaleArgs::default(),
        }
    }
}

impl FinancialsArgs {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            window: None,
            locale: LocaleArgs::default(),
        }
    }
}

impl DebugArgs {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            engine: None,
            locale: LocaleArgs::default(),
        }
    }
}

impl StockNewsArgs {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            category: None,
            num: DEFAULT_NEWS_COUNT,
            start: None,
            locale: LocaleArgs::default(),
        }
    }
}

fn default_news_count() -> i64 {
    DEFAULT_NEWS_COUNT
}

/// Accept `2`, `"2"`, or null for an integer argument
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid integer: {}", n))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer: '{}'", s))),
        Some(other) => Err(D::Error::custom(format!("invalid integer: {}", other))),
    }
}

/// News count: lenient like [`lenient_int`], null falls back to the default
fn lenient_news_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_int(deserializer)?.unwrap_or(DEFAULT_NEWS_COUNT))
}

/// Deserialize tool arguments, reporting failures as a plain message
pub fn parse_args<T: for<'de> Deserialize<'de>>(input: Value) -> Result<T, String> {
    // A missing argument object means "all defaults"
    let input = if input.is_null() { Value::Object(Default::default()) } else { input };
    serde_json::from_value(input).map_err(|e| format!("Invalid arguments: {}", e))
}

/// Best-effort query string for error envelopes when argument parsing fails
pub fn query_hint(input: &Value, key: &str) -> String {
    input.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}
