//! Common types for semantic book search.

use serde::{Deserialize, Serialize};

/// A book prepared for embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    /// Catalog identifier, as a string key.
    pub id: String,

    /// Book title.
    pub title: String,

    /// Book description.
    #[serde(default)]
    pub description: String,
}

impl BookDocument {
    /// Create a new document.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// The text submitted to the embedding provider.
    ///
    /// Title and description are joined with a sentence break so both
    /// contribute to the embedding.
    pub fn embedding_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// Parameters for a semantic search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    pub query: String,

    /// Maximum results to return.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Maximum cosine distance for a result to count as similar
    /// (0.0 = identical direction, 2.0 = opposite).
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f32,
}

fn default_limit() -> usize {
    3
}

fn default_distance_threshold() -> f32 {
    0.8
}

impl SearchParams {
    /// Create params for a query with default limit and threshold.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: default_limit(),
            distance_threshold: default_distance_threshold(),
        }
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the distance threshold.
    pub fn with_distance_threshold(mut self, threshold: f32) -> Self {
        self.distance_threshold = threshold;
        self
    }
}

/// A single semantic search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document identifier.
    pub id: String,

    /// Book title.
    pub title: String,

    /// Book description.
    pub description: String,

    /// Cosine distance from the query (lower is more similar).
    pub distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_text_composition() {
        let doc = BookDocument::new("1", "Dune", "Desert planet epic");
        assert_eq!(doc.embedding_text(), "Dune. Desert planet epic");
    }

    #[test]
    fn test_search_params_defaults() {
        let params = SearchParams::new("space opera");
        assert_eq!(params.limit, 3);
        assert!((params.distance_threshold - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_search_params_builder() {
        let params = SearchParams::new("q")
            .with_limit(10)
            .with_distance_threshold(1.0);
        assert_eq!(params.limit, 10);
        assert!((params.distance_threshold - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: SearchParams = serde_json::from_str(r#"{"query": "dune"}"#).unwrap();
        assert_eq!(params.query, "dune");
        assert_eq!(params.limit, 3);
    }
}
