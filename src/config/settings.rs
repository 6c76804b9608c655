use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const PORT_ENV: &str = "PORT";
pub const UPSTREAM_URL_ENV: &str = "RELAY_UPSTREAM_URL";
pub const MODEL_ENV: &str = "RELAY_MODEL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    /// Only ever read from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// `/v1/chat/completions` is appended to this.
    pub base_url: String,
    pub model: String,
    pub referer: String,
    pub ask_title: String,
    pub humanize_title: String,
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api".to_string(),
            model: "deepseek/deepseek-chat-v3-0324:free".to_string(),
            referer: "http://localhost:3000".to_string(),
            ask_title: "DeepSeek Assistant API".to_string(),
            humanize_title: "JumboIA Humanizer".to_string(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = match Self::find_config_file() {
            Some(path) => Self::from_file(path)?,
            None => Settings::default(),
        };
        settings.apply_env(|name| std::env::var(name).ok())?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Overlays environment values. Blank values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        self.api_key = get(API_KEY_ENV);

        if let Some(port) = get(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: port.clone(),
            })?;
        }
        if let Some(url) = get(UPSTREAM_URL_ENV) {
            self.upstream.base_url = url;
        }
        if let Some(model) = get(MODEL_ENV) {
            self.upstream.model = model;
        }
        Ok(())
    }

    fn find_config_file() -> Option<&'static str> {
        let possible_names = ["custom-config.toml", "config.toml"];

        possible_names
            .into_iter()
            .find(|name| Path::new(name).exists())
    }
}
