use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serpkit::gateway::{SERPAPI_URL, SerpApiConfig};
use serpkit::tools::{API_KEY_ENV, CredentialSource};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub serpapi: SerpApiSettings,
    pub flights: FlightsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerpApiSettings {
    pub base_url: String,
    /// Environment variable the API key is read from
    pub api_key_env: String,
    pub timeout_ms: u64,
}

impl Default for SerpApiSettings {
    fn default() -> Self {
        Self {
            base_url: SERPAPI_URL.to_string(),
            api_key_env: API_KEY_ENV.to_string(),
            timeout_ms: 60000,
        }
    }
}

impl SerpApiSettings {
    pub fn client_config(&self) -> SerpApiConfig {
        SerpApiConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }

    pub fn credentials(&self) -> CredentialSource {
        CredentialSource::Env(self.api_key_env.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightsConfig {
    pub max_results: usize,
}

impl Default for FlightsConfig {
    fn default() -> Self {
        Self { max_results: 5 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            serpapi: SerpApiSettings::default(),
            flights: FlightsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.serpapi.base_url, "https://serpapi.com/search.json");
        assert_eq!(config.serpapi.api_key_env, "SERP_API_KEY");
        assert_eq!(config.serpapi.timeout_ms, 60000);
        assert_eq!(config.flights.max_results, 5);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("serpkit.yml");
        fs::write(&path, "serpapi:\n  timeout_ms: 5000\nflights:\n  max_results: 3\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.serpapi.timeout_ms, 5000);
        assert_eq!(config.serpapi.api_key_env, "SERP_API_KEY");
        assert_eq!(config.flights.max_results, 3);
        assert_eq!(config.serpapi.client_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "serpapi: [not, a, map]\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_credentials_follow_configured_variable() {
        let mut settings = SerpApiSettings::default();
        settings.api_key_env = "MY_SERP_KEY".to_string();
        assert_eq!(settings.credentials(), CredentialSource::Env("MY_SERP_KEY".to_string()));
    }
}
