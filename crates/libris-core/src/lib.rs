//! Libris Core — shared types, errors, domain models, and LLM providers.
//!
//! This crate provides the foundational types used across all Libris crates.
//! It has no internal Libris dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`model`]: Book and review domain models with draft validation
//! - [`llm`]: LLM provider abstraction (trait, OpenAI backend, mock, retry)

pub mod error;
pub mod llm;
pub mod model;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use model::{Book, BookDraft, Review, ReviewDraft};
