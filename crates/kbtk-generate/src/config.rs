//! Provider configuration: defaults, then an optional file, then
//! `ANTHROPIC_*` environment variables.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const ENV_PREFIX: &str = "ANTHROPIC";

#[derive(Debug, Error)]
pub enum ProviderConfigError {
    #[error("failed to load provider config: {0}")]
    Load(#[from] config::ConfigError),
    #[error("missing API key: set ANTHROPIC_API_KEY or `api_key` in the config file")]
    MissingApiKey,
}

#[derive(Clone, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl ProviderConfig {
    /// Load from the process environment and an optional config file.
    pub fn load(path: Option<&Path>) -> Result<Self, ProviderConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, ProviderConfigError> {
        let mut builder = Config::builder()
            .set_default("api_key", "")?
            .set_default("model", DEFAULT_MODEL)?
            .set_default("max_tokens", i64::from(DEFAULT_MAX_TOKENS))?
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let cfg: ProviderConfig = builder.add_source(env).build()?.try_deserialize()?;
        if cfg.api_key.trim().is_empty() {
            return Err(ProviderConfigError::MissingApiKey);
        }
        Ok(cfg)
    }

    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }

    pub fn count_tokens_url(&self) -> String {
        format!("{}/v1/messages/count_tokens", self.base_url.trim_end_matches('/'))
    }
}
