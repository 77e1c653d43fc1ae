// src/config.rs
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "llama.json";

/// Session preferences, read once before the chat loop starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(rename = "ollamaURL")]
    pub endpoint_url: String,
    pub model_name: String,
    pub context_window_size: u32,
    pub human_name: String,
    #[serde(rename = "AIName")]
    pub ai_name: String,
    pub system_prompt: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `.env`, then the file named by `LLAMA_CONFIG` (or `llama.json`),
    /// then applies `LLAMA_URL` / `LLAMA_MODEL` overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let path = std::env::var("LLAMA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        debug!(%path, "loading config");

        let mut config = Self::load(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("LLAMA_URL").filter(|v| !v.trim().is_empty()) {
            self.endpoint_url = url;
        }
        if let Some(model) = lookup("LLAMA_MODEL").filter(|v| !v.trim().is_empty()) {
            self.model_name = model;
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
