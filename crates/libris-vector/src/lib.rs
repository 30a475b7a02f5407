//! Libris Vector — semantic search over the book catalog.
//!
//! Books are embedded as `"{title}. {description}"` documents and matched
//! against free-text queries by cosine distance. The embedding model and
//! the vector database are external collaborators behind traits; the
//! in-memory store keeps tests and embedded deployments self-contained.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  libris-vector                  │
//! ├─────────────────────────────────────────────────┤
//! │  EmbeddingProvider trait                        │
//! │  └── MockEmbeddingProvider (deterministic)      │
//! ├─────────────────────────────────────────────────┤
//! │  VectorStore trait                              │
//! │  └── InMemoryVectorStore (cosine distance)      │
//! ├─────────────────────────────────────────────────┤
//! │  Result summarization (LlmProvider)             │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod embedding;
pub mod store;
pub mod summary;
pub mod types;

// Re-exports — core types
pub use types::{BookDocument, SearchParams, SearchResult};

// Re-exports — traits and fallbacks
pub use embedding::{EmbeddingProvider, MockEmbeddingProvider};
pub use store::{InMemoryVectorStore, VectorStore, cosine_distance};

// Re-exports — summarization
pub use summary::summarize_results;
