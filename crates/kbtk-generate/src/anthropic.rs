//! Anthropic Messages API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::ProviderConfig;
use crate::cost::{CostCalculator, approximate_token_count, estimate_input_tokens};
use crate::provider::{Generation, GenerationError, GenerationProvider, GenerationStats};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const TOKEN_COUNTING_BETA: &str = "token-counting-2024-11-01";
const USER_AGENT: &str = concat!("kbtk-planner/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Usage {
    #[serde(default)]
    output_tokens: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct CountTokensResponse {
    input_tokens: u64,
}

fn build_http(config: &ProviderConfig) -> Result<Client, GenerationError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| GenerationError::Http(e.to_string()))
}

/// Turn a raw Messages API response body into a [`Generation`].
///
/// Input tokens are estimated from the prompt; output tokens come from the
/// response `usage` block.
pub fn parse_messages_response(
    body: &str,
    prompt: &str,
    costs: &CostCalculator,
) -> Result<Generation, GenerationError> {
    let parsed: MessagesResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

    if parsed.kind.as_deref() == Some("error") {
        let message = parsed.error.map(|e| e.message).unwrap_or_default();
        return Err(GenerationError::Api(message));
    }

    let text = parsed
        .content
        .into_iter()
        .next()
        .and_then(|c| c.text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| GenerationError::InvalidResponse("missing content[0].text".to_string()))?;

    let input_tokens = estimate_input_tokens(prompt);
    let output_tokens = parsed.usage.unwrap_or_default().output_tokens.unwrap_or(0);

    Ok(Generation {
        text,
        stats: GenerationStats {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
            cost_in_rupiah: costs.cost_in_rupiah(input_tokens, output_tokens),
        },
    })
}

#[derive(Debug)]
pub struct AnthropicClient {
    http: Client,
    config: ProviderConfig,
    costs: CostCalculator,
}

impl AnthropicClient {
    pub fn new(config: ProviderConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            http: build_http(&config)?,
            config,
            costs: CostCalculator::default(),
        })
    }

    pub fn with_costs(mut self, costs: CostCalculator) -> Self {
        self.costs = costs;
        self
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl GenerationProvider for AnthropicClient {
    #[instrument(skip_all, fields(model = %self.config.model, prompt_chars = prompt.chars().count()))]
    async fn generate(&self, prompt: &str) -> Result<Generation, GenerationError> {
        let request = MessagesRequest {
            model: &self.config.model,
            messages: [Message { role: "user", content: prompt }],
            max_tokens: Some(self.config.max_tokens),
        };

        let response = self
            .http
            .post(self.config.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Http(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "messages response received");

        // Error payloads carry a JSON body; anything else on a failed status is opaque.
        match parse_messages_response(&body, prompt, &self.costs) {
            Err(GenerationError::InvalidResponse(_)) if !status.is_success() => Err(GenerationError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            }),
            Ok(generation) => {
                info!(
                    input_tokens = generation.stats.input_tokens,
                    output_tokens = generation.stats.output_tokens,
                    cost_in_rupiah = generation.stats.cost_in_rupiah,
                    "generation complete"
                );
                Ok(generation)
            }
            Err(e) => Err(e),
        }
    }
}

/// Prompt token counting through the count_tokens endpoint, with a
/// word-based fallback.
#[derive(Debug)]
pub struct TokenCounter {
    http: Client,
    config: ProviderConfig,
}

impl TokenCounter {
    pub fn new(config: ProviderConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            http: build_http(&config)?,
            config,
        })
    }

    pub async fn count_tokens(&self, text: &str) -> u64 {
        match self.request_count(text).await {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "token counting failed; using word-based approximation");
                approximate_token_count(text)
            }
        }
    }

    async fn request_count(&self, text: &str) -> Result<u64, GenerationError> {
        let request = MessagesRequest {
            model: &self.config.model,
            messages: [Message { role: "user", content: text }],
            max_tokens: None,
        };

        let response = self
            .http
            .post(self.config.count_tokens_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("anthropic-beta", TOKEN_COUNTING_BETA)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default().chars().take(200).collect(),
            });
        }

        let parsed: CountTokensResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
        Ok(parsed.input_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_and_usage() {
        let body = r##"{"type":"message","content":[{"type":"text","text":"# RPPH\n- satu"}],"usage":{"input_tokens":12,"output_tokens":500}}"##;
        let generation = parse_messages_response(body, "abcdefgh", &CostCalculator::default()).unwrap();
        assert_eq!(generation.text, "# RPPH\n- satu");
        assert_eq!(
            generation.stats,
            GenerationStats { input_tokens: 2, output_tokens: 500, total_tokens: 502, cost_in_rupiah: 121 }
        );
    }

    #[test]
    fn api_error_payload_is_surfaced() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        let err = parse_messages_response(body, "p", &CostCalculator::default()).unwrap_err();
        assert_eq!(err, GenerationError::Api("Overloaded".to_string()));
        assert_eq!(err.to_string(), "API Error: Overloaded");
    }

    #[test]
    fn missing_text_is_invalid() {
        let body = r#"{"type":"message","content":[]}"#;
        let err = parse_messages_response(body, "p", &CostCalculator::default()).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }

    #[test]
    fn missing_usage_counts_zero_output_tokens() {
        let body = r#"{"content":[{"text":"ok"}]}"#;
        let generation = parse_messages_response(body, "", &CostCalculator::default()).unwrap();
        assert_eq!(generation.stats.output_tokens, 0);
        assert_eq!(generation.stats.total_tokens, 0);
    }

    #[test]
    fn request_serializes_single_user_message() {
        let request = MessagesRequest {
            model: "m",
            messages: [Message { role: "user", content: "hi" }],
            max_tokens: Some(4096),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"model":"m","messages":[{"role":"user","content":"hi"}],"max_tokens":4096})
        );
    }
}
