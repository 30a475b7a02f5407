//! Mock LLM provider for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::provider::{
    CompletionRequest, CompletionResponse, LlmProvider, StopReason, TokenUsage,
};
use crate::{Error, Result};

/// Mock LLM provider that returns canned responses.
///
/// Useful for testing summarization and question-answering flows without
/// making actual API calls.
#[derive(Clone)]
pub struct MockLlmProvider {
    state: Arc<Mutex<MockState>>,
}

struct MockState {
    canned: Vec<String>,
    index: usize,
    requests: Vec<CompletionRequest>,
}

impl MockLlmProvider {
    /// Creates a new mock provider with canned responses.
    ///
    /// Responses are returned in order. After all responses are used,
    /// the provider cycles back to the first response. An empty response
    /// list makes every completion fail with `Error::Llm`.
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                canned: responses,
                index: 0,
                requests: Vec::new(),
            })),
        }
    }

    /// Creates a mock provider with a single response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    /// Requests recorded so far, for asserting on prompt construction.
    pub async fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.state.lock().await.requests.clone()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let mut state = self.state.lock().await;
        state.requests.push(request);

        let content = state
            .canned
            .get(state.index)
            .cloned()
            .ok_or_else(|| Error::llm("mock provider has no canned responses"))?;
        state.index = (state.index + 1) % state.canned.len();

        Ok(CompletionResponse {
            content,
            tokens_used: TokenUsage {
                input: 10, // Mock values
                output: 20,
            },
            stop_reason: StopReason::EndTurn,
        })
    }
}
