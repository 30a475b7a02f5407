//! Libris — book catalog service components under one roof.
//!
//! This umbrella crate re-exports the workspace members. The catalog
//! (books, reviews, title statistics) is always available; identity,
//! semantic search, and PDF question answering are feature-gated:
//!
//! - `auth`: token validation and group-based access control
//! - `vector`: embedding-based search with LLM summaries
//! - `rag`: ad-hoc question answering over an uploaded PDF
//! - `full`: everything above

pub use libris_core::{Error, Result};

/// Shared domain types, errors, and the LLM seam.
pub mod core {
    pub use libris_core::*;
}

/// Books, reviews, and title statistics.
pub mod catalog {
    pub use libris_catalog::*;
}

/// Token validation and group-based access control.
#[cfg(feature = "auth")]
pub mod auth {
    pub use libris_auth::*;
}

/// Semantic search over the catalog.
#[cfg(feature = "vector")]
pub mod vector {
    pub use libris_vector::*;
}

/// PDF question answering.
#[cfg(feature = "rag")]
pub mod rag {
    pub use libris_rag::*;
}
