//! Book (catalog entry) model and related types.
//!
//! Field names on the wire are camelCase (`pageCount`, `readPage`, `insertedAt`)
//! to stay compatible with existing bookshelf clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Length of generated book identifiers
pub const BOOK_ID_LEN: usize = 16;

/// Full book record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// 16-character identifier, generated on creation
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Total number of pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    /// Pages read so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_page: Option<i64>,
    /// `page_count == read_page`, computed on every write
    pub finished: bool,
    /// Currently being read (set by the client)
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a validated payload
    pub fn new(id: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: None,
            read_page: None,
            finished: false,
            reading: false,
            inserted_at: now,
            updated_at: now,
        };
        book.apply(payload, now);
        book
    }

    /// Replace every client-editable field, recompute `finished` and touch `updated_at`.
    /// `id` and `inserted_at` are never changed.
    pub fn apply(&mut self, payload: BookPayload, now: DateTime<Utc>) {
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading;
        self.finished = self.page_count == self.read_page;
        self.updated_at = now;
    }
}

/// Short book representation for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Create / update request body.
///
/// Everything except `name` and the page counters is passed through untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Book title (required, non-empty)
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[validate(range(min = 0))]
    pub page_count: Option<i64>,
    #[validate(range(min = 0))]
    pub read_page: Option<i64>,
    #[serde(default)]
    pub reading: bool,
}

impl BookPayload {
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Only checked when both counters are present
    pub fn read_page_exceeds_page_count(&self) -> bool {
        match (self.read_page, self.page_count) {
            (Some(read_page), Some(page_count)) => read_page > page_count,
            _ => false,
        }
    }
}

/// Boolean query filter encoded as `"1"` / `"0"`.
///
/// Only the exact string `"1"` means true; any other value that is present
/// means false. An absent parameter does not filter at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryFlag {
    #[default]
    Any,
    Yes,
    No,
}

impl QueryFlag {
    /// Whether `value` passes this filter
    pub fn matches(self, value: bool) -> bool {
        match self {
            QueryFlag::Any => true,
            QueryFlag::Yes => value,
            QueryFlag::No => !value,
        }
    }
}

impl From<&str> for QueryFlag {
    fn from(s: &str) -> Self {
        match s {
            "1" => QueryFlag::Yes,
            _ => QueryFlag::No,
        }
    }
}

impl From<Option<&str>> for QueryFlag {
    fn from(s: Option<&str>) -> Self {
        s.map(QueryFlag::from).unwrap_or_default()
    }
}

/// Book listing filters
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// `1` for books being read, `0` for the others
    #[param(value_type = Option<String>)]
    pub reading: QueryFlag,
    /// `1` for finished books, `0` for unfinished ones
    #[param(value_type = Option<String>)]
    pub finished: QueryFlag,
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
}

impl BookQuery {
    /// Build the filters from decoded query pairs.
    ///
    /// A repeated key never fails the request: its first value is used.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        Self {
            reading: QueryFlag::from(first("reading")),
            finished: QueryFlag::from(first("finished")),
            name: first("name").map(str::to_string),
        }
    }

    /// Apply the filters in order: reading, finished, then name
    pub fn matches(&self, book: &Book) -> bool {
        if !self.reading.matches(book.reading) {
            return false;
        }
        if !self.finished.matches(book.finished) {
            return false;
        }
        match &self.name {
            Some(needle) => book.name.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }
}
