//! Index-then-answer orchestration over a single PDF.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use libris_core::llm::{CompletionRequest, LlmProvider, Message};
use libris_core::{Error, Result};
use libris_vector::cosine_distance;
use libris_vector::embedding::EmbeddingProvider;

use crate::loader::load_pdf;
use crate::splitter::TextSplitter;

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Characters per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Shared characters between consecutive chunks.
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Chunks retrieved per question.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    100
}

fn default_top_k() -> usize {
    3
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            top_k: default_top_k(),
        }
    }
}

/// An answered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The question as asked.
    pub question: String,
    /// The generated answer.
    pub answer: String,
}

/// Question answering over one indexed document.
///
/// Indexing replaces any previous document; the pipeline holds at most
/// one chunk index at a time, matching the upload-then-ask flow.
pub struct PdfQaPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
    config: RagConfig,
    index: RwLock<Option<ChunkIndex>>,
}

struct ChunkIndex {
    chunks: Vec<String>,
    embeddings: Vec<Vec<f32>>,
}

impl PdfQaPipeline {
    /// Create a pipeline with default configuration.
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, llm: Arc<dyn LlmProvider>) -> Self {
        Self::with_config(embedder, llm, RagConfig::default())
    }

    /// Create a pipeline with explicit configuration.
    pub fn with_config(
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
        config: RagConfig,
    ) -> Self {
        Self {
            embedder,
            llm,
            config,
            index: RwLock::new(None),
        }
    }

    /// Whether a document is currently indexed.
    pub async fn is_ready(&self) -> bool {
        self.index.read().await.is_some()
    }

    /// Number of indexed chunks.
    pub async fn chunk_count(&self) -> usize {
        self.index
            .read()
            .await
            .as_ref()
            .map_or(0, |idx| idx.chunks.len())
    }

    /// Extract, split, embed, and index a PDF, replacing any previous
    /// document.
    pub async fn index_pdf(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = load_pdf(path)?;
        self.index_text(&text).await
    }

    /// Split, embed, and index raw text, replacing any previous document.
    ///
    /// # Errors
    ///
    /// `Error::InvalidData` when the text contains no indexable content.
    pub async fn index_text(&self, text: &str) -> Result<()> {
        let splitter = TextSplitter::new(self.config.chunk_size, self.config.chunk_overlap)?;
        let chunks = splitter.split(text);
        if chunks.is_empty() {
            return Err(Error::invalid_data("Document contains no indexable text"));
        }

        let refs: Vec<&str> = chunks.iter().map(String::as_str).collect();
        let embeddings = self.embedder.embed_batch(&refs).await?;

        info!("indexed document into {} chunks", chunks.len());
        *self.index.write().await = Some(ChunkIndex { chunks, embeddings });
        Ok(())
    }

    /// Answer a question against the indexed document.
    ///
    /// # Errors
    ///
    /// `Error::InvalidData` when no document has been indexed yet.
    pub async fn answer(&self, question: &str) -> Result<Answer> {
        let guard = self.index.read().await;
        let index = guard
            .as_ref()
            .ok_or_else(|| Error::invalid_data("No PDF loaded. Please upload a PDF first."))?;

        let context = self.retrieve(index, question).await?;
        debug!(
            "answering {:?} with {} retrieved chunks",
            question,
            context.len()
        );

        let prompt = build_prompt(question, &context);
        let request = CompletionRequest::new(vec![Message::user(prompt)])
            .with_system_prompt(
                "Answer the question using only the provided document excerpts. \
                 If the excerpts do not contain the answer, say so.",
            )
            .with_temperature(0.0);

        let response = self.llm.complete(request).await?;
        Ok(Answer {
            question: question.to_string(),
            answer: response.content,
        })
    }

    /// The `top_k` chunks closest to the question.
    async fn retrieve(&self, index: &ChunkIndex, question: &str) -> Result<Vec<String>> {
        let query = self.embedder.embed(question).await?;

        let mut scored: Vec<(usize, f32)> = index
            .embeddings
            .iter()
            .enumerate()
            .map(|(i, emb)| (i, cosine_distance(&query, emb)))
            .collect();
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.config.top_k);

        Ok(scored
            .into_iter()
            .map(|(i, _)| index.chunks[i].clone())
            .collect())
    }
}

fn build_prompt(question: &str, context: &[String]) -> String {
    let mut prompt = String::from("Document excerpts:\n\n");
    for (i, chunk) in context.iter().enumerate() {
        prompt.push_str(&format!("[{}] {}\n\n", i + 1, chunk));
    }
    prompt.push_str(&format!("Question: {question}"));
    prompt
}

// ============================================================================
// Tests
// ============================================================================
