//! Response envelopes shared by the book endpoints

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::book::{Book, BookShort};

/// Outcome marker present in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Body of every failed request
#[derive(Serialize, ToSchema)]
pub struct FailResponse {
    pub status: ResponseStatus,
    pub message: String,
}

/// Success body carrying only a message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: &str) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookCreatedData {
    pub book_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub data: BookCreatedData,
}

#[derive(Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookShort>,
}

#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: ResponseStatus,
    pub data: BookListData,
}

#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub status: ResponseStatus,
    pub data: BookData,
}
