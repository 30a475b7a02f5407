//! Embedding provider trait and mock implementation.
//!
//! The hosted embedding model is an external collaborator; implementations
//! wrap whichever backend the deployment uses. The mock produces
//! deterministic unit vectors so search behavior is testable offline.

use async_trait::async_trait;
use libris_core::Result;

/// Trait for generating text embeddings.
///
/// Implementations must be `Send + Sync` so a single provider can be
/// shared across async tasks.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for a batch of texts.
    ///
    /// Default implementation calls `embed` for each text sequentially.
    /// Backends with native batching should override this.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// The embedding dimension.
    fn dimension(&self) -> usize;

    /// The provider name for diagnostics.
    fn name(&self) -> &str;
}

/// A mock embedding provider for testing.
///
/// Components are derived from an FNV-style rolling hash of the input, so
/// identical texts embed identically and distinct texts diverge. Vectors
/// are unit-normalized; the empty string embeds to the zero vector.
pub struct MockEmbeddingProvider {
    dimension: usize,
}

impl MockEmbeddingProvider {
    /// Create a new mock provider with the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn deterministic_embedding(&self, text: &str) -> Vec<f32> {
        if text.is_empty() {
            return vec![0.0; self.dimension];
        }

        let mut embedding = Vec::with_capacity(self.dimension);
        let mut hash: u64 = 0xcbf29ce484222325;
        for byte in text.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x100000001b3);
        }
        for i in 0..self.dimension {
            let mixed = hash.wrapping_add(i as u64).wrapping_mul(0x9e3779b97f4a7c15);
            // Map the top bits into [-1, 1)
            embedding.push(((mixed >> 40) as f32 / 8388608.0) - 1.0);
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for val in &mut embedding {
                *val /= norm;
            }
        }
        embedding
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.deterministic_embedding(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| self.deterministic_embedding(t))
            .collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// Tests
// ============================================================================
