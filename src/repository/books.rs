//! Books repository: the in-memory catalog collection

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::book::{Book, BookPayload, BookQuery, BookShort};

/// Ordered collection of books, shared between handlers.
///
/// Books are kept in insertion order; listings never re-sort them.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List books matching the query, projected to their short form
    pub async fn list(&self, query: &BookQuery) -> Vec<BookShort> {
        let books = self.books.read().await;
        books
            .iter()
            .filter(|book| query.matches(book))
            .map(BookShort::from)
            .collect()
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: &str) -> Option<Book> {
        let books = self.books.read().await;
        books.iter().find(|book| book.id == id).cloned()
    }

    pub async fn exists(&self, id: &str) -> bool {
        let books = self.books.read().await;
        books.iter().any(|book| book.id == id)
    }

    /// Append a book at the end of the collection.
    /// Returns whether the book is present once the write completes.
    pub async fn insert(&self, book: Book) -> bool {
        let id = book.id.clone();
        let mut books = self.books.write().await;
        books.push(book);
        books.iter().any(|b| b.id == id)
    }

    /// Apply a payload to an existing book. Returns false when the ID is unknown.
    pub async fn update(&self, id: &str, payload: BookPayload, now: DateTime<Utc>) -> bool {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.apply(payload, now);
                true
            }
            None => false,
        }
    }

    /// Remove a book. Returns false when the ID is unknown.
    pub async fn delete(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}
