//! Natural-language summaries of search results.

use libris_core::llm::{CompletionRequest, LlmProvider, Message};
use libris_core::Result;

use crate::types::SearchResult;

const SYSTEM_PROMPT: &str =
    "You are an assistant whose job is to summarize book search results.";

/// Summarize semantic search results for a query.
///
/// Empty results short-circuit to a fixed message without calling the
/// LLM. Otherwise the results are rendered into a summarization prompt
/// and the completion content is returned.
pub async fn summarize_results(
    llm: &dyn LlmProvider,
    query: &str,
    results: &[SearchResult],
) -> Result<String> {
    if results.is_empty() {
        return Ok(format!("No similar books found for the query: '{query}'."));
    }

    let mut listing = String::new();
    for result in results {
        listing.push_str(&format!(
            "- {} (distance {:.3}): {}\n",
            result.title, result.distance, result.description
        ));
    }

    let prompt = format!(
        "Summarize the following books based on the query '{query}'. \
         Include the number of books found and a brief description of each:\n\n\
         {listing}\n\
         Generate a concise summary."
    );

    let request = CompletionRequest::new(vec![Message::user(prompt)])
        .with_system_prompt(SYSTEM_PROMPT)
        .with_max_tokens(150)
        .with_temperature(0.2);

    let response = llm.complete(request).await?;
    Ok(response.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use libris_core::llm::{CompletionResponse, MockLlmProvider, RetryWrapper};
    use libris_core::Error;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    fn result(title: &str) -> SearchResult {
        SearchResult {
            id: "1".into(),
            title: title.into(),
            description: "A description".into(),
            distance: 0.25,
        }
    }

    #[tokio::test]
    async fn test_empty_results_skip_llm() {
        let llm = MockLlmProvider::with_response("should never appear");

        let summary = summarize_results(&llm, "space opera", &[]).await.unwrap();

        assert_eq!(
            summary,
            "No similar books found for the query: 'space opera'."
        );
        assert!(llm.recorded_requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_summary_returns_completion() {
        let llm = MockLlmProvider::with_response("One book found: Dune.");

        let summary = summarize_results(&llm, "desert", &[result("Dune")])
            .await
            .unwrap();
        assert_eq!(summary, "One book found: Dune.");
    }

    #[tokio::test]
    async fn test_prompt_includes_query_and_titles() {
        let llm = MockLlmProvider::with_response("ok");

        summarize_results(&llm, "desert epics", &[result("Dune")])
            .await
            .unwrap();

        let recorded = llm.recorded_requests().await;
        let prompt = &recorded[0].messages[0].content;
        assert!(prompt.contains("desert epics"));
        assert!(prompt.contains("Dune"));
        assert_eq!(
            recorded[0].system_prompt.as_deref(),
            Some(SYSTEM_PROMPT)
        );
    }

    /// Rejects the first completion with a retryable error, then delegates.
    struct FlakyLlm {
        delegate: MockLlmProvider,
        failures: Mutex<u32>,
    }

    #[async_trait]
    impl LlmProvider for FlakyLlm {
        async fn complete(&self, request: CompletionRequest) -> libris_core::Result<CompletionResponse> {
            let mut failures = self.failures.lock().await;
            if *failures > 0 {
                *failures -= 1;
                return Err(Error::llm("upstream rate limited"));
            }
            drop(failures);
            self.delegate.complete(request).await
        }
    }

    #[tokio::test]
    async fn test_summary_survives_transient_llm_failure() {
        let flaky = Arc::new(FlakyLlm {
            delegate: MockLlmProvider::with_response("Found one desert epic: Dune."),
            failures: Mutex::new(1),
        });
        let llm = RetryWrapper::new(flaky)
            .with_initial_delay(Duration::from_millis(1))
            .with_max_delay(Duration::from_millis(2));

        let summary = summarize_results(&llm, "desert", &[result("Dune")])
            .await
            .unwrap();
        assert_eq!(summary, "Found one desert epic: Dune.");
    }
}
