//! Libris RAG — ad-hoc question answering over an uploaded PDF.
//!
//! One PDF is indexed at a time: its text is extracted, split into
//! overlapping character windows, embedded, and held in memory. Questions
//! retrieve the closest chunks and stuff them into a single prompt for
//! the LLM.
//!
//! # Modules
//!
//! - [`loader`]: PDF text extraction
//! - [`splitter`]: Character-window text splitting with overlap
//! - [`pipeline`]: Index-then-answer orchestration

pub mod loader;
pub mod pipeline;
pub mod splitter;

pub use loader::load_pdf;
pub use pipeline::{Answer, PdfQaPipeline, RagConfig};
pub use splitter::TextSplitter;
