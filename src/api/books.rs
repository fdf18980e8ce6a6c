//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::AppResult, models::BookSummary};

/// List the catalog, one entry per ISBN
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Catalog entries", body = Vec<BookSummary>),
        (status = 204, description = "Catalog is empty"),
        (status = 503, description = "Persistence service unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Response> {
    let books = state.services.books.get_all_books().await?;

    if books.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(books).into_response())
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = BookSummary),
        (status = 404, description = "No copy with this ISBN", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookSummary>> {
    let book = state.services.books.get_book_by_isbn(&isbn).await?;
    Ok(Json(book))
}
