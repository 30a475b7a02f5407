//! Storage seam for the catalog.
//!
//! Persistence is an external collaborator (a relational database in the
//! deployed system). [`BookStore`] is the boundary the catalog service
//! talks to; [`MemoryStore`] is the in-memory fallback used in tests and
//! for embedded use, the same role the simple in-memory backends play for
//! the vector and search crates.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use libris_core::{Book, BookDraft, Result, Review, ReviewDraft};

/// Async storage boundary for books and reviews.
///
/// Implementations own id assignment. Review operations are scoped by
/// book: a review is only reachable through the book it belongs to.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, ordered by id.
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// A single book by id.
    async fn get_book(&self, id: i64) -> Result<Option<Book>>;

    /// Insert a new book and return it with its assigned id.
    async fn insert_book(&self, draft: BookDraft) -> Result<Book>;

    /// Overwrite an existing book's fields. Returns `None` when absent.
    async fn update_book(&self, id: i64, draft: BookDraft) -> Result<Option<Book>>;

    /// Delete a book and its reviews. Returns whether anything was deleted.
    async fn delete_book(&self, id: i64) -> Result<bool>;

    /// Case-insensitive title lookup, for duplicate detection.
    async fn find_by_title_ci(&self, title: &str) -> Result<Option<Book>>;

    /// All reviews for a book, ordered by id.
    async fn reviews_for_book(&self, book_id: i64) -> Result<Vec<Review>>;

    /// A single review, scoped to its book.
    async fn get_review(&self, book_id: i64, review_id: i64) -> Result<Option<Review>>;

    /// Insert a review for a book and return it with its assigned id.
    async fn insert_review(&self, book_id: i64, draft: ReviewDraft) -> Result<Review>;

    /// Replace a review's text. Returns `None` when the review does not
    /// exist under that book.
    async fn update_review(
        &self,
        book_id: i64,
        review_id: i64,
        draft: ReviewDraft,
    ) -> Result<Option<Review>>;

    /// Delete a review scoped to its book. Returns whether it existed.
    async fn delete_review(&self, book_id: i64, review_id: i64) -> Result<bool>;
}

/// In-memory [`BookStore`] with monotonic id assignment.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    books: BTreeMap<i64, Book>,
    reviews: BTreeMap<i64, Review>,
    next_book_id: i64,
    next_review_id: i64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list_books(&self) -> Result<Vec<Book>> {
        let inner = self.inner.read().await;
        Ok(inner.books.values().cloned().collect())
    }

    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        let inner = self.inner.read().await;
        Ok(inner.books.get(&id).cloned())
    }

    async fn insert_book(&self, draft: BookDraft) -> Result<Book> {
        let mut inner = self.inner.write().await;
        inner.next_book_id += 1;
        let book = Book {
            id: inner.next_book_id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
            description: draft.description,
        };
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update_book(&self, id: i64, draft: BookDraft) -> Result<Option<Book>> {
        let mut inner = self.inner.write().await;
        match inner.books.get_mut(&id) {
            Some(book) => {
                book.title = draft.title;
                book.author = draft.author;
                book.year = draft.year;
                book.description = draft.description;
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_book(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        if inner.books.remove(&id).is_none() {
            return Ok(false);
        }
        // Reviews cascade with their book
        inner.reviews.retain(|_, r| r.book_id != id);
        Ok(true)
    }

    async fn find_by_title_ci(&self, title: &str) -> Result<Option<Book>> {
        let needle = title.to_lowercase();
        let inner = self.inner.read().await;
        Ok(inner
            .books
            .values()
            .find(|b| b.title.to_lowercase() == needle)
            .cloned())
    }

    async fn reviews_for_book(&self, book_id: i64) -> Result<Vec<Review>> {
        let inner = self.inner.read().await;
        Ok(inner
            .reviews
            .values()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn get_review(&self, book_id: i64, review_id: i64) -> Result<Option<Review>> {
        let inner = self.inner.read().await;
        Ok(inner
            .reviews
            .get(&review_id)
            .filter(|r| r.book_id == book_id)
            .cloned())
    }

    async fn insert_review(&self, book_id: i64, draft: ReviewDraft) -> Result<Review> {
        let mut inner = self.inner.write().await;
        inner.next_review_id += 1;
        let review = Review {
            id: inner.next_review_id,
            book_id,
            review: draft.review,
        };
        inner.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn update_review(
        &self,
        book_id: i64,
        review_id: i64,
        draft: ReviewDraft,
    ) -> Result<Option<Review>> {
        let mut inner = self.inner.write().await;
        match inner
            .reviews
            .get_mut(&review_id)
            .filter(|r| r.book_id == book_id)
        {
            Some(review) => {
                review.review = draft.review;
                Ok(Some(review.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_review(&self, book_id: i64, review_id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let exists = inner
            .reviews
            .get(&review_id)
            .is_some_and(|r| r.book_id == book_id);
        if exists {
            inner.reviews.remove(&review_id);
        }
        Ok(exists)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> BookDraft {
        BookDraft::new(title, "Test Author", 2021, "A perfectly valid description.")
    }

    #[tokio::test]
    async fn test_insert_assigns_monotonic_ids() {
        let store = MemoryStore::new();
        let a = store.insert_book(draft("First Book")).await.unwrap();
        let b = store.insert_book(draft("Second Book")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_list_books_ordered_by_id() {
        let store = MemoryStore::new();
        store.insert_book(draft("Book One")).await.unwrap();
        store.insert_book(draft("Book Two")).await.unwrap();

        let books = store.list_books().await.unwrap();
        assert_eq!(books.len(), 2);
        assert!(books[0].id < books[1].id);
    }

    #[tokio::test]
    async fn test_find_by_title_ci() {
        let store = MemoryStore::new();
        store.insert_book(draft("The Left Hand")).await.unwrap();

        let found = store.find_by_title_ci("the LEFT hand").await.unwrap();
        assert!(found.is_some());
        assert!(store.find_by_title_ci("Missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_book_absent() {
        let store = MemoryStore::new();
        let updated = store.update_book(99, draft("Whatever Title")).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_delete_book_cascades_reviews() {
        let store = MemoryStore::new();
        let book = store.insert_book(draft("Reviewed Book")).await.unwrap();
        store
            .insert_review(book.id, ReviewDraft::new("Loved it"))
            .await
            .unwrap();

        assert!(store.delete_book(book.id).await.unwrap());
        let leftover = store.reviews_for_book(book.id).await.unwrap();
        assert!(leftover.is_empty());
    }

    #[tokio::test]
    async fn test_review_scoped_to_book() {
        let store = MemoryStore::new();
        let a = store.insert_book(draft("Book Alpha")).await.unwrap();
        let b = store.insert_book(draft("Book Beta")).await.unwrap();
        let review = store
            .insert_review(a.id, ReviewDraft::new("For alpha"))
            .await
            .unwrap();

        // Fetching the review under the wrong book misses
        assert!(store.get_review(b.id, review.id).await.unwrap().is_none());
        assert!(store.get_review(a.id, review.id).await.unwrap().is_some());

        // Deleting under the wrong book is a no-op
        assert!(!store.delete_review(b.id, review.id).await.unwrap());
        assert!(store.delete_review(a.id, review.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_review_text() {
        let store = MemoryStore::new();
        let book = store.insert_book(draft("Edited Book")).await.unwrap();
        let review = store
            .insert_review(book.id, ReviewDraft::new("First take"))
            .await
            .unwrap();

        let updated = store
            .update_review(book.id, review.id, ReviewDraft::new("Second take"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.review, "Second take");
    }
}
