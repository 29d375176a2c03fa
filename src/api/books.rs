//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookPayload, BookQuery},
    services::books::messages,
    AppState,
};

use super::envelope::{
    BookCreatedData, BookCreatedResponse, BookData, BookListData, BookListResponse, BookResponse,
    MessageResponse, ResponseStatus,
};

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<BookListResponse> {
    let query = BookQuery::from_pairs(&pairs);
    let books = state.services.books.list_books(&query).await;

    Json(BookListResponse {
        status: ResponseStatus::Success,
        data: BookListData { books },
    })
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::api::envelope::FailResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get_book(&book_id).await?;

    Ok(Json(BookResponse {
        status: ResponseStatus::Success,
        data: BookData { book },
    }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Invalid input", body = crate::api::envelope::FailResponse),
        (status = 500, description = "Book could not be stored", body = crate::api::envelope::FailResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<BookPayload>, AppError>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book_id = state.services.books.create_book(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            status: ResponseStatus::Success,
            message: messages::CREATED.to_string(),
            data: BookCreatedData { book_id },
        }),
    ))
}

/// Replace the editable fields of a book
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid input", body = crate::api::envelope::FailResponse),
        (status = 404, description = "Book not found", body = crate::api::envelope::FailResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<BookPayload>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update_book(&book_id, payload).await?;
    Ok(Json(MessageResponse::success(messages::UPDATED)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::api::envelope::FailResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete_book(&book_id).await?;
    Ok(Json(MessageResponse::success(messages::DELETED)))
}
