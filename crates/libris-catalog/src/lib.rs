//! Libris Catalog — book and review management plus title statistics.
//!
//! The catalog is the domain heart of Libris: CRUD over books and their
//! reviews behind a storage seam, and a small pure statistics engine over
//! the title collection.
//!
//! # Modules
//!
//! - [`stats`]: Title-statistics engine (longest-title count, word ranking)
//! - [`store`]: `BookStore` seam and the in-memory fallback
//! - [`service`]: `CatalogService` orchestrating validation and storage

pub mod service;
pub mod stats;
pub mod store;

pub use service::CatalogService;
pub use stats::{count_longest_titles, most_common_words};
pub use store::{BookStore, MemoryStore};
