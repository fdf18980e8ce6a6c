//! Reserve queue endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::reservation::{CreateReservationRequest, ReserveDto},
};

/// Take a queue ticket for a book with no available copy
#[utoipa::path(
    post,
    path = "/reserves",
    tag = "reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reserve created", body = ReserveDto),
        (status = 400, description = "Unknown user or ISBN", body = crate::error::ErrorResponse),
        (status = 409, description = "A copy is available", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reserve(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReserveDto>)> {
    request.validate()?;

    let reserve = state
        .services
        .reserves
        .create_reserve(&request.username, &request.book_isbn)
        .await?;

    Ok((StatusCode::CREATED, Json(reserve.into())))
}
