//! Book endpoints.
//!
//! Everything lives on `/books`; the target book, when there is one, is
//! selected with the `id` query parameter.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header::ALLOW,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookId, BookIdQuery, BookPayload},
        response::{ApiResponse, BookListResponse, BookResponse, StatusResponse},
    },
    AppState,
};

/// List all books, or fetch one when `id` is given
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book list, or the single requested book", body = BookListResponse),
        (status = 400, description = "Empty or malformed id", body = StatusResponse),
        (status = 404, description = "Book not found", body = StatusResponse),
        (status = 500, description = "Storage unavailable", body = StatusResponse)
    )
)]
pub async fn get_books(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<BookIdQuery>, AppError>,
) -> AppResult<Response> {
    match query.id.as_deref() {
        None => {
            let books = state.services.books.list().await?;
            Ok(Json(ApiResponse::success("Books retrieved successfully", books)).into_response())
        }
        Some("") => Err(AppError::InvalidId(
            "The 'id' parameter cannot be empty".to_string(),
        )),
        Some(raw) => {
            let id: BookId = raw.parse()?;
            let book = state.services.books.get_by_id(&id).await?;
            Ok(Json(ApiResponse::success("Book retrieved successfully", book)).into_response())
        }
    }
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 400, description = "Malformed payload or missing fields", body = StatusResponse),
        (status = 500, description = "Storage unavailable", body = StatusResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<Book>>> {
    let payload = BookPayload::from_json(&body)?;
    let book = state.services.books.create(payload).await?;
    Ok(Json(ApiResponse::success("Successfully created book", book)))
}

/// Replace title and author of a book
#[utoipa::path(
    put,
    path = "/books",
    tag = "books",
    params(BookIdQuery),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Missing or malformed id, malformed payload or missing fields", body = StatusResponse),
        (status = 404, description = "Book not found", body = StatusResponse),
        (status = 500, description = "Storage unavailable", body = StatusResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<BookIdQuery>, AppError>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<Book>>> {
    // The id is checked before the body is looked at
    let id = query.require()?;
    let payload = BookPayload::from_json(&body)?;
    let book = state.services.books.update(&id, payload).await?;
    Ok(Json(ApiResponse::success("Successfully updated book", book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book deleted", body = StatusResponse),
        (status = 400, description = "Missing or malformed id", body = StatusResponse),
        (status = 404, description = "Book not found", body = StatusResponse),
        (status = 500, description = "Storage unavailable", body = StatusResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<BookIdQuery>, AppError>,
) -> AppResult<Json<StatusResponse>> {
    let id = query.require()?;
    state.services.books.delete(&id).await?;
    Ok(Json(StatusResponse::success("Successfully deleted book")))
}

/// Any other method on `/books`
pub async fn method_not_allowed() -> impl IntoResponse {
    ([(ALLOW, "GET, POST, PUT, DELETE")], AppError::MethodNotAllowed)
}
