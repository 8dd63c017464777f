#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

Generation provider plumbing: the provider trait, the Anthropic Messages
client, token/cost accounting, prompt templates and provider configuration.
Use `kbtk-io` instead of depending on this crate directly.
"#]

pub mod anthropic;
pub mod config;
pub mod cost;
pub mod prompts;
pub mod provider;

pub use anthropic::{AnthropicClient, TokenCounter};
pub use crate::config::{ProviderConfig, ProviderConfigError};
pub use cost::CostCalculator;
pub use prompts::{ExtractedInputs, build_prompt};
pub use provider::{Generation, GenerationError, GenerationProvider, GenerationStats};
