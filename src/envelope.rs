//! Uniform response envelope returned by the finance tools

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

/// Outcome carried by an envelope. Exactly one of these keys is emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Response { api_response: Value },
    Error { error: String },
}

/// `{tool, query, timestamp, success, api_response | error}`
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub tool: String,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    pub timestamp: String,
    success: bool,
    #[serde(flatten)]
    payload: Payload,
}

impl ResponseEnvelope {
    /// Wrap an upstream payload, untouched
    pub fn success(query: impl Into<String>, data: Value, tool: impl Into<String>) -> Self {
        Self::build(query.into(), tool.into(), Payload::Response { api_response: data })
    }

    /// Wrap a failure message
    pub fn error(query: impl Into<String>, message: impl Into<String>, tool: impl Into<String>) -> Self {
        Self::build(query.into(), tool.into(), Payload::Error { error: message.into() })
    }

    /// Record the engine that served the request
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    fn build(query: String, tool: String, payload: Payload) -> Self {
        Self {
            tool,
            query,
            engine: None,
            timestamp: now_iso(),
            success: matches!(payload, Payload::Response { .. }),
            payload,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn api_response(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Response { api_response } => Some(api_response),
            Payload::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.payload {
            Payload::Error { error } => Some(error),
            Payload::Response { .. } => None,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({
                "tool": self.tool,
                "query": self.query,
                "timestamp": self.timestamp,
                "success": false,
                "error": format!("Failed to serialize response: {}", e),
            })
        })
    }
}

/// Local time in ISO-8601, microsecond precision
pub fn now_iso() -> String {
    let now: DateTime<Local> = Local::now();
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let data = json!({"summary": {"title": "Apple Inc"}, "markets": [1, 2, 3]});
        let env = ResponseEnvelope::success("AAPL", data.clone(), "stock_quote");
        let value = env.to_value();

        assert_eq!(value["tool"], "stock_quote");
        assert_eq!(value["query"], "AAPL");
        assert_eq!(value["success"], true);
        assert_eq!(value["api_response"], data);
        assert!(value.get("error").is_none());
        assert!(value.get("engine").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let env = ResponseEnvelope::error("bonds", "Invalid trend 'bonds'", "market_data");
        let value = env.to_value();

        assert_eq!(value["tool"], "market_data");
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Invalid trend 'bonds'");
        assert!(value.get("api_response").is_none());
        assert!(!env.is_success());
        assert_eq!(env.error_message(), Some("Invalid trend 'bonds'"));
    }

    #[test]
    fn test_exactly_one_outcome_key() {
        let envelopes = [
            ResponseEnvelope::success("q", json!(null), "news"),
            ResponseEnvelope::success("q", json!({"error_count": 0}), "news"),
            ResponseEnvelope::error("q", "", "news"),
        ];
        for env in envelopes {
            let value = env.to_value();
            let has_response = value.get("api_response").is_some();
            let has_error = value.get("error").is_some();
            assert!(has_response ^ has_error);
            assert_eq!(value["success"].as_bool(), Some(has_response));
        }
    }

    #[test]
    fn test_payload_embedded_verbatim() {
        let data = json!({"nested": {"deep": [{"x": 1.5}]}, "error_like": "not an error"});
        let env = ResponseEnvelope::success("q", data.clone(), "debug");
        assert_eq!(env.api_response(), Some(&data));
    }

    #[test]
    fn test_with_engine() {
        let env = ResponseEnvelope::success("AAPL", json!({}), "debug").with_engine("google_finance");
        let value = env.to_value();
        assert_eq!(value["engine"], "google_finance");
    }

    #[test]
    fn test_timestamp_is_iso() {
        let env = ResponseEnvelope::error("q", "boom", "graph_data");
        assert!(chrono::NaiveDateTime::parse_from_str(&env.timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
