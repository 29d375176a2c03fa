//! Repository layer holding the catalog data

pub mod books;

/// Main repository struct holding every collection
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create an empty in-memory repository
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}
