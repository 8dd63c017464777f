use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("unexpected status code {status}: {body}")]
    Status { status: u16, body: String },
    #[error("API Error: {0}")]
    Api(String),
    #[error("Invalid API response format: {0}")]
    InvalidResponse(String),
}

/// Token usage and cost of one generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub cost_in_rupiah: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    pub stats: GenerationStats,
}

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Generation, GenerationError>;
}
