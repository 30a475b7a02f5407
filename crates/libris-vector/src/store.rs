//! Vector store seam and the in-memory implementation.

use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use libris_core::Result;

use crate::embedding::EmbeddingProvider;
use crate::types::{BookDocument, SearchParams, SearchResult};

/// Async boundary to the vector database.
///
/// A hosted vector database implements this over its client SDK; the
/// in-memory store below keeps everything local.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert or replace a document by id.
    async fn upsert(&self, document: BookDocument) -> Result<()>;

    /// Search for documents similar to the query.
    ///
    /// Results are filtered to `distance <= params.distance_threshold`,
    /// ordered by ascending distance, and truncated to `params.limit`.
    async fn search(&self, params: SearchParams) -> Result<Vec<SearchResult>>;

    /// Number of stored documents.
    async fn len(&self) -> Result<usize>;

    /// Whether the store holds no documents.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

/// In-memory [`VectorStore`] using cosine distance.
pub struct InMemoryVectorStore {
    provider: Arc<dyn EmbeddingProvider>,
    entries: RwLock<HashMap<String, Entry>>,
}

struct Entry {
    document: BookDocument,
    embedding: Vec<f32>,
}

impl InMemoryVectorStore {
    /// Create an empty store over the given embedding provider.
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            provider,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

/// Cosine distance between two vectors: `1 - cos(a, b)`.
///
/// Zero-magnitude vectors are treated as maximally dissimilar from
/// everything (distance 1.0, the similarity-zero point).
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    1.0 - dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(&self, document: BookDocument) -> Result<()> {
        let embedding = self.provider.embed(&document.embedding_text()).await?;
        let mut entries = self.entries.write().await;
        entries.insert(
            document.id.clone(),
            Entry {
                document,
                embedding,
            },
        );
        Ok(())
    }

    async fn search(&self, params: SearchParams) -> Result<Vec<SearchResult>> {
        let query_embedding = self.provider.embed(&params.query).await?;
        let entries = self.entries.read().await;

        let mut results: Vec<SearchResult> = entries
            .values()
            .map(|entry| SearchResult {
                id: entry.document.id.clone(),
                title: entry.document.title.clone(),
                description: entry.document.description.clone(),
                distance: cosine_distance(&query_embedding, &entry.embedding),
            })
            .filter(|r| r.distance <= params.distance_threshold)
            .collect();

        results.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(params.limit);

        debug!(
            "semantic search {:?}: {} hits within {}",
            params.query,
            results.len(),
            params.distance_threshold
        );
        Ok(results)
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbeddingProvider;

    fn store() -> InMemoryVectorStore {
        InMemoryVectorStore::new(Arc::new(MockEmbeddingProvider::new(32)))
    }

    #[test]
    fn test_cosine_distance_identical() {
        let v = vec![0.6, 0.8];
        assert!(cosine_distance(&v, &v).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_distance_orthogonal() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!((cosine_distance(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_distance_opposite() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_distance(&a, &b) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_distance_zero_vector() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert!((cosine_distance(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_upsert_and_len() {
        let store = store();
        assert!(store.is_empty().await.unwrap());

        store
            .upsert(BookDocument::new("1", "Dune", "Desert planet epic"))
            .await
            .unwrap();
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_id() {
        let store = store();
        store
            .upsert(BookDocument::new("1", "Dune", "First edition"))
            .await
            .unwrap();
        store
            .upsert(BookDocument::new("1", "Dune", "Second edition"))
            .await
            .unwrap();

        assert_eq!(store.len().await.unwrap(), 1);
        let results = store
            .search(SearchParams::new("Dune. Second edition").with_distance_threshold(2.0))
            .await
            .unwrap();
        assert_eq!(results[0].description, "Second edition");
    }

    #[tokio::test]
    async fn test_exact_text_query_ranks_first() {
        let store = store();
        store
            .upsert(BookDocument::new("1", "Dune", "Desert planet epic"))
            .await
            .unwrap();
        store
            .upsert(BookDocument::new("2", "Neuromancer", "Cyberspace heist"))
            .await
            .unwrap();

        // Querying with a document's exact embedding text gives distance ~0
        let results = store
            .search(SearchParams::new("Dune. Desert planet epic").with_distance_threshold(2.0))
            .await
            .unwrap();

        assert_eq!(results[0].id, "1");
        assert!(results[0].distance.abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_threshold_filters_results() {
        let store = store();
        store
            .upsert(BookDocument::new("1", "Dune", "Desert planet epic"))
            .await
            .unwrap();

        // A strict threshold over an unrelated query yields nothing
        let results = store
            .search(SearchParams::new("unrelated").with_distance_threshold(0.0001))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_limit_truncates() {
        let store = store();
        for i in 0..5 {
            store
                .upsert(BookDocument::new(
                    i.to_string(),
                    format!("Book {i}"),
                    "Some description",
                ))
                .await
                .unwrap();
        }

        let results = store
            .search(
                SearchParams::new("books")
                    .with_limit(2)
                    .with_distance_threshold(2.0),
            )
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_results_sorted_by_distance() {
        let store = store();
        for i in 0..4 {
            store
                .upsert(BookDocument::new(
                    i.to_string(),
                    format!("Title {i}"),
                    format!("Description number {i}"),
                ))
                .await
                .unwrap();
        }

        let results = store
            .search(SearchParams::new("query text").with_distance_threshold(2.0))
            .await
            .unwrap();

        for pair in results.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }
}
