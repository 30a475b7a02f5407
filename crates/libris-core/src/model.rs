//! Book and review domain models.
//!
//! `Book` and `Review` are stored entities with assigned ids. `BookDraft`
//! and `ReviewDraft` are the caller-supplied shapes; both validate their
//! fields before the catalog accepts them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned identifier.
    pub id: i64,
    /// Title (3–100 characters).
    pub title: String,
    /// Author (3–50 characters).
    pub author: String,
    /// Publication year (positive).
    pub year: i32,
    /// Description (10–1000 characters).
    pub description: String,
}

/// Caller-supplied book data, validated before insertion or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub description: String,
}

impl BookDraft {
    /// Create a draft from its parts.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            description: description.into(),
        }
    }

    /// Validate field constraints.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidData` naming the first violated field.
    pub fn validate(&self) -> Result<()> {
        check_len("title", &self.title, 3, 100)?;
        check_len("author", &self.author, 3, 50)?;
        if self.year <= 0 {
            return Err(Error::invalid_data("year must be positive"));
        }
        check_len("description", &self.description, 10, 1000)?;
        Ok(())
    }
}

/// A review attached to a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Assigned identifier.
    pub id: i64,
    /// The book this review belongs to.
    pub book_id: i64,
    /// Review text.
    pub review: String,
}

/// Caller-supplied review data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub review: String,
}

impl ReviewDraft {
    /// Create a draft from review text.
    pub fn new(review: impl Into<String>) -> Self {
        Self {
            review: review.into(),
        }
    }

    /// Validate that the review text is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.review.trim().is_empty() {
            return Err(Error::invalid_data("review must not be empty"));
        }
        Ok(())
    }
}

fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(Error::invalid_data(format!(
            "{field} must be {min}-{max} characters, got {len}"
        )));
    }
    Ok(())
}
