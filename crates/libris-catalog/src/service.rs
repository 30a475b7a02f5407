//! Catalog service orchestrating validation, storage, and statistics.
//!
//! `CatalogService` is what the caller boundary (HTTP, CLI, MCP) talks to.
//! It validates drafts, enforces the duplicate-title rule, scopes reviews
//! to their book, and exposes the title-statistics entry points.

use log::{debug, info};
use std::sync::Arc;

use libris_core::{Book, BookDraft, Error, Result, Review, ReviewDraft};

use crate::stats;
use crate::store::BookStore;

/// Book and review operations over a [`BookStore`].
pub struct CatalogService<S: BookStore> {
    store: Arc<S>,
}

impl<S: BookStore> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: BookStore> CatalogService<S> {
    /// Create a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    // ------------------------------------------------------------------
    // Books
    // ------------------------------------------------------------------

    /// All books in the catalog.
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        self.store.list_books().await
    }

    /// A single book by id.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` when no book has the id.
    pub async fn get_book(&self, id: i64) -> Result<Book> {
        self.store
            .get_book(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("Book {id} not found")))
    }

    /// Add a new book.
    ///
    /// # Errors
    ///
    /// `Error::InvalidData` when the draft fails validation;
    /// `Error::Conflict` when another book already has the title
    /// (case-insensitive).
    pub async fn add_book(&self, draft: BookDraft) -> Result<Book> {
        draft.validate()?;
        if self.store.find_by_title_ci(&draft.title).await?.is_some() {
            return Err(Error::conflict("Book with this title already exists"));
        }
        let book = self.store.insert_book(draft).await?;
        info!("added book {} ({:?})", book.id, book.title);
        Ok(book)
    }

    /// Update an existing book.
    ///
    /// The duplicate-title check ignores the book being updated, so
    /// re-submitting a book's own title is not a conflict.
    pub async fn update_book(&self, id: i64, draft: BookDraft) -> Result<Book> {
        draft.validate()?;
        if let Some(existing) = self.store.find_by_title_ci(&draft.title).await? {
            if existing.id != id {
                return Err(Error::conflict("Book with this title already exists"));
            }
        }
        self.store
            .update_book(id, draft)
            .await?
            .ok_or_else(|| Error::not_found(format!("Book {id} not found")))
    }

    /// Delete a book and its reviews.
    pub async fn delete_book(&self, id: i64) -> Result<()> {
        if !self.store.delete_book(id).await? {
            return Err(Error::not_found(format!("Book {id} not found")));
        }
        info!("deleted book {id}");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------

    /// All reviews for a book. The book must exist; a book with no
    /// reviews yields an empty vec.
    pub async fn list_reviews(&self, book_id: i64) -> Result<Vec<Review>> {
        self.get_book(book_id).await?;
        self.store.reviews_for_book(book_id).await
    }

    /// A single review scoped to its book.
    pub async fn get_review(&self, book_id: i64, review_id: i64) -> Result<Review> {
        self.store.get_review(book_id, review_id).await?.ok_or_else(|| {
            Error::not_found(format!("Review {review_id} for book {book_id} not found"))
        })
    }

    /// Add a review to an existing book.
    pub async fn add_review(&self, book_id: i64, draft: ReviewDraft) -> Result<Review> {
        draft.validate()?;
        self.get_book(book_id).await?;
        self.store.insert_review(book_id, draft).await
    }

    /// Replace the text of an existing review.
    pub async fn update_review(
        &self,
        book_id: i64,
        review_id: i64,
        draft: ReviewDraft,
    ) -> Result<Review> {
        draft.validate()?;
        self.get_book(book_id).await?;
        self.store
            .update_review(book_id, review_id, draft)
            .await?
            .ok_or_else(|| {
                Error::not_found(format!("Review {review_id} for book {book_id} not found"))
            })
    }

    /// Delete a review scoped to its book.
    pub async fn delete_review(&self, book_id: i64, review_id: i64) -> Result<()> {
        if !self.store.delete_review(book_id, review_id).await? {
            return Err(Error::not_found(format!(
                "Review {review_id} for book {book_id} not found"
            )));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Title statistics
    // ------------------------------------------------------------------

    /// Count how many books tie for the longest title word count.
    pub async fn count_longest_titles(&self) -> Result<usize> {
        let titles = self.titles().await?;
        debug!("computing longest-title count over {} titles", titles.len());
        Ok(stats::count_longest_titles(&titles))
    }

    /// The `top_k` most frequent words across all titles.
    pub async fn most_common_title_words(&self, top_k: usize) -> Result<Vec<(String, usize)>> {
        if top_k == 0 {
            return Ok(Vec::new());
        }
        let titles = self.titles().await?;
        Ok(stats::most_common_words(&titles, top_k))
    }

    async fn titles(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .list_books()
            .await?
            .into_iter()
            .map(|b| b.title)
            .collect())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> CatalogService<MemoryStore> {
        CatalogService::new(Arc::new(MemoryStore::new()))
    }

    fn draft(title: &str) -> BookDraft {
        BookDraft::new(title, "Test Author", 2021, "A perfectly valid description.")
    }

    #[tokio::test]
    async fn test_add_and_get_book() {
        let svc = service();
        let added = svc.add_book(draft("New Book")).await.unwrap();
        let fetched = svc.get_book(added.id).await.unwrap();
        assert_eq!(fetched.title, "New Book");
    }

    #[tokio::test]
    async fn test_get_missing_book_is_not_found() {
        let svc = service();
        let err = svc.get_book(42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_duplicate_title_conflicts() {
        let svc = service();
        svc.add_book(draft("Test Book")).await.unwrap();

        let err = svc.add_book(draft("Test Book")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_duplicate_check_is_case_insensitive() {
        let svc = service();
        svc.add_book(draft("Test Book")).await.unwrap();

        let err = svc.add_book(draft("TEST BOOK")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn test_add_invalid_draft_rejected() {
        let svc = service();
        let mut bad = draft("Ok Title Here");
        bad.description = "short".into();
        let err = svc.add_book(bad).await.unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        // Nothing was stored
        assert!(svc.list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_book_keeps_own_title() {
        let svc = service();
        let book = svc.add_book(draft("Stable Title")).await.unwrap();

        // Same title, different author: not a conflict with itself
        let mut update = draft("Stable Title");
        update.author = "Another Author".into();
        let updated = svc.update_book(book.id, update).await.unwrap();
        assert_eq!(updated.author, "Another Author");
    }

    #[tokio::test]
    async fn test_update_book_conflicts_with_other_title() {
        let svc = service();
        svc.add_book(draft("First Title")).await.unwrap();
        let second = svc.add_book(draft("Second Title")).await.unwrap();

        let err = svc
            .update_book(second.id, draft("first title"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let svc = service();
        let err = svc.update_book(7, draft("Ghost Title")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_book() {
        let svc = service();
        let book = svc.add_book(draft("Doomed Book")).await.unwrap();
        svc.delete_book(book.id).await.unwrap();

        assert!(matches!(
            svc.get_book(book.id).await.unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            svc.delete_book(book.id).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_review_lifecycle() {
        let svc = service();
        let book = svc.add_book(draft("Reviewed Book")).await.unwrap();

        let review = svc
            .add_review(book.id, ReviewDraft::new("Great read"))
            .await
            .unwrap();
        assert_eq!(review.book_id, book.id);

        let updated = svc
            .update_review(book.id, review.id, ReviewDraft::new("Even better on reread"))
            .await
            .unwrap();
        assert_eq!(updated.review, "Even better on reread");

        let listed = svc.list_reviews(book.id).await.unwrap();
        assert_eq!(listed.len(), 1);

        svc.delete_review(book.id, review.id).await.unwrap();
        assert!(svc.list_reviews(book.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_review_requires_existing_book() {
        let svc = service();
        let err = svc
            .add_review(99, ReviewDraft::new("Orphan review"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stats_over_stored_titles() {
        let svc = service();
        svc.add_book(draft("The Longest")).await.unwrap();
        svc.add_book(draft("The Longest Title")).await.unwrap();
        svc.add_book(draft("The Longest Title of Book")).await.unwrap();

        assert_eq!(svc.count_longest_titles().await.unwrap(), 1);

        // "longest" and "the" both occur three times; ties order alphabetically
        let ranking = svc.most_common_title_words(2).await.unwrap();
        assert_eq!(ranking[0], ("longest".to_string(), 3));
        assert_eq!(ranking[1], ("the".to_string(), 3));
    }

    #[tokio::test]
    async fn test_stats_empty_catalog() {
        let svc = service();
        assert_eq!(svc.count_longest_titles().await.unwrap(), 0);
        assert!(svc.most_common_title_words(5).await.unwrap().is_empty());
    }
}
