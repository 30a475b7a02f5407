//! LLM provider abstractions and implementations.

mod mock;
mod openai;
mod provider;
mod retry;

pub use mock::MockLlmProvider;
pub use openai::OpenAiProvider;
pub use provider::{
    CompletionRequest, CompletionResponse, LlmProvider, Message, Role, StopReason, TokenUsage,
};
pub use retry::RetryWrapper;
