//! OpenAI chat-completions provider implementation.

use async_trait::async_trait;

use super::provider::{
    CompletionRequest, CompletionResponse, LlmProvider, StopReason, TokenUsage,
};
use crate::{Error, Result};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// LLM provider using the OpenAI chat-completions API.
///
/// Also works against any compatible endpoint via [`with_api_base`].
///
/// [`with_api_base`]: OpenAiProvider::with_api_base
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    api_base: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model ID (e.g., "gpt-4o-mini")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Overrides the API base URL (for OpenAI-compatible servers).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        // Chat-completions folds the system prompt into the message list.
        let mut messages: Vec<serde_json::Value> = Vec::new();
        if let Some(system) = &request.system_prompt {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        for msg in &request.messages {
            messages.push(serde_json::json!(msg));
        }

        let mut body = serde_json::json!({
            "model": self.model,
            "max_tokens": request.max_tokens,
            "messages": messages,
        });

        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        if !request.stop_sequences.is_empty() {
            body["stop"] = serde_json::json!(request.stop_sequences);
        }

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::llm_with_source("Failed to call OpenAI API", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::llm(format!(
                "OpenAI API error {}: {}",
                status, error_text
            )));
        }

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::llm_with_source("Failed to parse OpenAI response", e))?;

        let choice = &response_body["choices"][0];

        let content = choice["message"]["content"]
            .as_str()
            .ok_or_else(|| Error::llm("Missing content in OpenAI response"))?
            .to_string();

        let usage = response_body["usage"]
            .as_object()
            .ok_or_else(|| Error::llm("Missing usage data in OpenAI response"))?;

        let input_tokens = usage["prompt_tokens"]
            .as_u64()
            .ok_or_else(|| Error::llm("Invalid prompt_tokens"))?;
        let output_tokens = usage["completion_tokens"]
            .as_u64()
            .ok_or_else(|| Error::llm("Invalid completion_tokens"))?;

        let finish_reason = choice["finish_reason"]
            .as_str()
            .ok_or_else(|| Error::llm("Missing finish_reason"))?;

        let stop_reason = match finish_reason {
            "stop" => StopReason::EndTurn,
            "length" => StopReason::MaxTokens,
            "content_filter" | "stop_sequence" => StopReason::StopSequence,
            other => return Err(Error::llm(format!("Unknown finish reason: {}", other))),
        };

        Ok(CompletionResponse {
            content,
            tokens_used: TokenUsage {
                input: input_tokens,
                output: output_tokens,
            },
            stop_reason,
        })
    }
}
