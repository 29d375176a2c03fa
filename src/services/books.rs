//! Book catalog service: validation, identifiers and timestamps

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BookQuery, BookShort},
    repository::Repository,
};

use super::ids::{IdGenerator, RandomIdGenerator};

/// Client-facing messages of the bookshelf API
pub mod messages {
    pub const CREATED: &str = "Buku berhasil ditambahkan";
    pub const CREATE_FAILED: &str = "Buku gagal ditambahkan";
    pub const UPDATED: &str = "Buku berhasil diperbarui";
    pub const DELETED: &str = "Buku berhasil dihapus";
    pub const NOT_FOUND: &str = "Buku tidak ditemukan";
    pub const UPDATE_NOT_FOUND: &str = "Gagal memperbarui buku. Id tidak ditemukan";
    pub const DELETE_NOT_FOUND: &str = "Buku gagal dihapus. Id tidak ditemukan";
}

/// Write operation a payload is validated for; selects the error wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update,
}

impl WriteAction {
    fn failure_prefix(self) -> &'static str {
        match self {
            WriteAction::Create => "Gagal menambahkan buku",
            WriteAction::Update => "Gagal memperbarui buku",
        }
    }
}

/// Check a create/update payload. The first failing rule wins:
/// missing name, then `readPage > pageCount`, then negative counters.
pub fn validate_payload(payload: &BookPayload, action: WriteAction) -> AppResult<()> {
    let prefix = action.failure_prefix();

    if !payload.has_name() {
        return Err(AppError::Validation(format!(
            "{}. Mohon isi nama buku",
            prefix
        )));
    }

    if payload.read_page_exceeds_page_count() {
        return Err(AppError::Validation(format!(
            "{}. readPage tidak boleh lebih besar dari pageCount",
            prefix
        )));
    }

    payload.validate().map_err(|_| {
        AppError::Validation(format!(
            "{}. pageCount dan readPage tidak boleh negatif",
            prefix
        ))
    })
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    ids: Arc<dyn IdGenerator>,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self::with_id_generator(repository, Arc::new(RandomIdGenerator::default()))
    }

    pub fn with_id_generator(repository: Repository, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// List books matching the filters, in insertion order
    pub async fn list_books(&self, query: &BookQuery) -> Vec<BookShort> {
        self.repository.books.list(query).await
    }

    /// Number of books in the catalog
    pub async fn count(&self) -> usize {
        self.repository.books.len().await
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(messages::NOT_FOUND.to_string()))
    }

    /// Create a book and return its new ID
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<String> {
        validate_payload(&payload, WriteAction::Create)?;

        let id = self.ids.generate();
        let book = Book::new(id.clone(), payload, Utc::now());
        if !self.repository.books.insert(book).await {
            return Err(AppError::Internal(messages::CREATE_FAILED.to_string()));
        }

        tracing::info!("Book created: id={}", id);
        Ok(id)
    }

    /// Update a book. The payload is validated before the ID is looked up.
    pub async fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        validate_payload(&payload, WriteAction::Update)?;

        if !self.repository.books.update(id, payload, Utc::now()).await {
            return Err(AppError::NotFound(messages::UPDATE_NOT_FOUND.to_string()));
        }

        tracing::info!("Book updated: id={}", id);
        Ok(())
    }

    /// Delete a book
    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        if !self.repository.books.delete(id).await {
            return Err(AppError::NotFound(messages::DELETE_NOT_FOUND.to_string()));
        }

        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::QueryFlag;

    fn service() -> BooksService {
        BooksService::new(Repository::new())
    }

    fn payload(name: &str, page_count: i64, read_page: i64, reading: bool) -> BookPayload {
        BookPayload {
            name: Some(name.to_string()),
            year: Some(2010),
            author: Some("John Doe".to_string()),
            summary: Some("Lorem ipsum".to_string()),
            publisher: Some("Dicoding Indonesia".to_string()),
            page_count: Some(page_count),
            read_page: Some(read_page),
            reading,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();
        let id = service
            .create_book(payload("Dicoding", 100, 100, false))
            .await
            .unwrap();
        assert_eq!(id.len(), 16);

        let book = service.get_book(&id).await.unwrap();
        assert_eq!(book.name, "Dicoding");
        assert_eq!(book.year, Some(2010));
        assert_eq!(book.page_count, Some(100));
        assert!(book.finished);
        assert!(!book.reading);
        assert_eq!(book.inserted_at, book.updated_at);
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let service = service();
        for name in [None, Some(String::new())] {
            // the name rule wins even when the page rule also fails
            let mut bad = payload("", 10, 20, false);
            bad.name = name;
            let err = service.create_book(bad).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(err.message(), "Gagal menambahkan buku. Mohon isi nama buku");
        }
        assert!(service.repository.books.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_rejects_read_page_over_page_count() {
        let service = service();
        let err = service
            .create_book(payload("X", 50, 60, false))
            .await
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
        );
        assert_eq!(service.repository.books.len().await, 0);
    }

    #[tokio::test]
    async fn test_create_with_read_page_only() {
        let service = service();
        let read_only = BookPayload {
            name: Some("A".to_string()),
            read_page: Some(5),
            ..Default::default()
        };
        let id = service.create_book(read_only).await.unwrap();

        let book = service.get_book(&id).await.unwrap();
        assert_eq!(book.read_page, Some(5));
        assert_eq!(book.page_count, None);
        assert!(!book.finished);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_pages() {
        let service = service();
        let err = service
            .create_book(payload("X", -5, -10, false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(service.repository.books.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let service = service();

        let err = service
            .update_book("missing", payload("", 10, 1, false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.message(), "Gagal memperbarui buku. Mohon isi nama buku");

        let err = service
            .update_book("missing", payload("Valid", 10, 11, false))
            .await
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
        );

        let err = service
            .update_book("missing", payload("Valid", 10, 1, false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.message(), messages::UPDATE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let service = service();
        let id = service
            .create_book(payload("Draft", 100, 10, true))
            .await
            .unwrap();
        let before = service.get_book(&id).await.unwrap();

        let mut changes = payload("Final", 200, 200, false);
        changes.author = None;
        service.update_book(&id, changes).await.unwrap();

        let after = service.get_book(&id).await.unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.inserted_at, before.inserted_at);
        assert!(after.updated_at >= before.updated_at);
        assert_eq!(after.name, "Final");
        assert_eq!(after.author, None);
        assert!(after.finished);
        assert!(!after.reading);
    }

    #[tokio::test]
    async fn test_delete_is_not_idempotent() {
        let service = service();
        let id = service
            .create_book(payload("Gone", 1, 0, false))
            .await
            .unwrap();

        service.delete_book(&id).await.unwrap();
        let err = service.get_book(&id).await.unwrap_err();
        assert_eq!(err.message(), messages::NOT_FOUND);

        let err = service.delete_book(&id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.message(), messages::DELETE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_filters() {
        let service = service();
        let finished = service
            .create_book(payload("Dicoding", 100, 100, false))
            .await
            .unwrap();
        let reading = service
            .create_book(payload("War and Peace", 1200, 300, true))
            .await
            .unwrap();

        let all = service.list_books(&BookQuery::default()).await;
        assert_eq!(
            all.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            vec![finished.as_str(), reading.as_str()]
        );

        let query = BookQuery {
            finished: QueryFlag::Yes,
            ..Default::default()
        };
        let books = service.list_books(&query).await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, finished);

        let query = BookQuery {
            finished: QueryFlag::No,
            ..Default::default()
        };
        let books = service.list_books(&query).await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, reading);

        let query = BookQuery {
            name: Some("PEACE".to_string()),
            reading: QueryFlag::Yes,
            ..Default::default()
        };
        let books = service.list_books(&query).await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "War and Peace");
    }

    struct FixedIds;

    impl IdGenerator for FixedIds {
        fn generate(&self) -> String {
            "fixed-id-0000000".to_string()
        }
    }

    #[tokio::test]
    async fn test_custom_id_generator() {
        let service = BooksService::with_id_generator(Repository::new(), Arc::new(FixedIds));
        let id = service
            .create_book(payload("Injected", 1, 1, false))
            .await
            .unwrap();
        assert_eq!(id, "fixed-id-0000000");
    }
}
