//! SerpAPI HTTP backend

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use super::{GatewayError, SearchBackend, SearchParams, classify_body};
use crate::error::{Result, SerpkitError};

/// SerpAPI JSON endpoint
pub const SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// Connection settings for the SerpAPI client
#[derive(Debug, Clone)]
pub struct SerpApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self {
            base_url: SERPAPI_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// reqwest-backed [`SearchBackend`]
pub struct SerpApiClient {
    client: Client,
    config: SerpApiConfig,
}

impl SerpApiClient {
    pub fn new(config: SerpApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SerpkitError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl SearchBackend for SerpApiClient {
    async fn search(&self, params: &SearchParams) -> std::result::Result<Value, GatewayError> {
        debug!("SerpApiClient: GET {} {:?}", self.config.base_url, params.redacted());

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params.to_query_pairs())
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        // SerpAPI reports most failures as JSON with an `error` field,
        // even on non-2xx statuses, so decode before looking at the status
        let status = response.status();
        let text = response.text().await.map_err(|e| GatewayError::Transport(e.to_string()))?;

        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(GatewayError::Transport(e.to_string())),
            Err(_) => {
                warn!("SerpApiClient: HTTP {} with non-JSON body", status);
                return Err(GatewayError::Transport(format!("HTTP {}: {}", status, text)));
            }
        };

        let result = match classify_body(body) {
            Ok(_) if !status.is_success() => Err(GatewayError::Transport(format!("HTTP {}: {}", status, text))),
            other => other,
        };
        if let Err(e) = &result {
            warn!("SerpApiClient: {} engine returned error: {}", params.engine().unwrap_or("?"), e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return the client pointed at it
    async fn serve_once(status_line: &'static str, body: &'static str) -> SerpApiClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        SerpApiClient::new(SerpApiConfig {
            base_url: format!("http://{}/search.json", addr),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn params() -> SearchParams {
        let mut params = SearchParams::for_engine("google_finance");
        params.set("q", "AAPL:NASDAQ");
        params
    }

    #[test]
    fn test_default_config() {
        let config = SerpApiConfig::default();
        assert_eq!(config.base_url, "https://serpapi.com/search.json");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_client_creation() {
        let client = SerpApiClient::new(SerpApiConfig::default()).unwrap();
        assert_eq!(client.base_url(), SERPAPI_URL);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = SerpApiClient::new(SerpApiConfig {
            base_url: "http://127.0.0.1:9/search.json".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let params = SearchParams::for_engine("google_finance");
        let err = client.search(&params).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_success_body_returned() {
        let client = serve_once("200 OK", r#"{"summary":{"title":"Apple Inc"}}"#).await;
        let body = client.search(&params()).await.unwrap();
        assert_eq!(body["summary"]["title"], "Apple Inc");
    }

    #[tokio::test]
    async fn test_in_band_error_wins_over_status() {
        let client = serve_once("401 Unauthorized", r#"{"error":"Invalid API key"}"#).await;
        let err = client.search(&params()).await.unwrap_err();
        assert_eq!(err, GatewayError::Api("Invalid API key".to_string()));
    }

    #[tokio::test]
    async fn test_in_band_error_on_success_status() {
        let client = serve_once("200 OK", r#"{"error":"Google hasn't returned any results for this query."}"#).await;
        let err = client.search(&params()).await.unwrap_err();
        assert!(err.is_api());
    }

    #[tokio::test]
    async fn test_error_status_without_error_field() {
        let client = serve_once("500 Internal Server Error", r#"{"x":1}"#).await;
        let err = client.search(&params()).await.unwrap_err();
        assert_eq!(err, GatewayError::Transport(r#"HTTP 500 Internal Server Error: {"x":1}"#.to_string()));
    }

    #[tokio::test]
    async fn test_non_json_success_is_transport_error() {
        let client = serve_once("200 OK", "<html>").await;
        let err = client.search(&params()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
        assert!(!err.message().starts_with("HTTP"));
    }

    #[tokio::test]
    async fn test_non_json_error_status_is_transport_error() {
        let client = serve_once("502 Bad Gateway", "<html>").await;
        let err = client.search(&params()).await.unwrap_err();
        assert_eq!(err, GatewayError::Transport("HTTP 502 Bad Gateway: <html>".to_string()));
    }
}
