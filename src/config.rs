use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::error;

use crate::api::gemini::{DEFAULT_GEMINI_MODEL, GEMINI_BASE_URL};
use crate::api::news::NEWS_API_BASE_URL;
use crate::pipeline::SummaryLimit;

pub const APP_DIR: &str = "finance-assistant";
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// API keys. Never written to the settings file; a missing key only shows
/// up when the call using it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub news_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            news_api_key: std::env::var(NEWS_API_KEY_VAR).ok(),
            gemini_api_key: std::env::var(GEMINI_API_KEY_VAR).ok(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_news_base_url")]
    pub news_base_url: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// Articles summarized per search.
    #[serde(default = "default_summary_limit")]
    pub summary_limit: usize,
    #[serde(skip)]
    pub credentials: Credentials,
}

fn default_news_base_url() -> String {
    NEWS_API_BASE_URL.to_string()
}

fn default_gemini_base_url() -> String {
    GEMINI_BASE_URL.to_string()
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_summary_limit() -> usize {
    SummaryLimit::DEFAULT.get()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_base_url: default_news_base_url(),
            gemini_base_url: default_gemini_base_url(),
            gemini_model: default_gemini_model(),
            summary_limit: default_summary_limit(),
            credentials: Credentials::default(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(APP_DIR);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Settings from the default location plus credentials from the environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.credentials = Credentials::from_env();
        Ok(config)
    }

    /// Settings from `path`, writing defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content).inspect_err(|e| {
            error!(path = %path.display(), "malformed config file: {}", e);
        })?;
        config.summary_limit = config.summary_limit().get();
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn summary_limit(&self) -> SummaryLimit {
        SummaryLimit::new(self.summary_limit)
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"summary_limit": 3}"#).unwrap();
        assert_eq!(config.summary_limit, 3);
        assert_eq!(config.news_base_url, NEWS_API_BASE_URL);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn credentials_never_serialized() {
        let config = Config::default().with_credentials(Credentials {
            news_api_key: Some("news-secret".into()),
            gemini_api_key: Some("gemini-secret".into()),
        });
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
