//! Reservation endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::reservation::{CreateReservationRequest, ReservationDto},
};

use super::AuthenticatedUser;

/// Reserve a book whose copies are all borrowed
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Book available, already reserved or borrowed by the user", body = crate::error::ErrorResponse),
        (status = 404, description = "No borrowed copy to reserve", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationDto>)> {
    claims.require_reader()?;
    request.validate()?;

    let reservation = state
        .services
        .reservations
        .create_reservation(&request.username, &request.book_isbn)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into())))
}
