//! Retry layer for transient LLM failures.
//!
//! Hosted completion endpoints fail transiently: rate limits, gateway
//! errors, dropped connections. `RetryWrapper` sits between a caller and
//! any [`LlmProvider`] and re-issues the request with exponential backoff
//! while [`Error::is_retryable`] holds. Domain errors surface on the
//! first failure without a retry.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use std::sync::Arc;
use std::time::Duration;

use super::provider::{CompletionRequest, CompletionResponse, LlmProvider};
use crate::{Error, Result};

/// Retrying decorator over an [`LlmProvider`].
///
/// Callers that talk to a hosted provider (search summaries, PDF
/// question answering) wrap it once and pass the wrapper where a plain
/// provider is expected.
pub struct RetryWrapper {
    inner: Arc<dyn LlmProvider>,
    max_retries: u32,
    initial_delay: Duration,
    max_delay: Duration,
}

impl RetryWrapper {
    /// Wrap a provider with the default policy: up to 3 retries after
    /// the first attempt, delays starting at 1 second and capped at 10.
    pub fn new(inner: Arc<dyn LlmProvider>) -> Self {
        Self {
            inner,
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
        }
    }

    /// Set how many retries follow a failed first attempt.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the delay before the first retry.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the ceiling on backoff delays.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }
}

#[async_trait]
impl LlmProvider for RetryWrapper {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.initial_delay)
            .with_max_delay(self.max_delay)
            .with_max_times(self.max_retries as usize);

        let inner = self.inner.clone();
        (|| {
            let request = request.clone();
            let inner = inner.clone();
            async move { inner.complete(request).await }
        })
        .retry(backoff)
        .when(Error::is_retryable)
        .await
    }
}
