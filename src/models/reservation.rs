//! Reservation and reserve (queue ticket) models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Reservation placed on a borrowed copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub username: String,
    pub book_id: i32,
    pub reservation_date: NaiveDate,
    /// Only known after creation, from the backend's count for the ISBN
    pub queue_position: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub username: String,
    pub book_id: i32,
    pub reservation_date: NaiveDate,
}

/// Create reservation request (also used for reserves)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(rename = "bookISBN")]
    #[validate(length(min = 1, message = "Book ISBN is required"))]
    pub book_isbn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub username: String,
    pub book_id: i32,
    pub reservation_date: NaiveDate,
    pub position_in_queue: i32,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            username: r.username,
            book_id: r.book_id,
            reservation_date: r.reservation_date,
            position_in_queue: r.queue_position,
        }
    }
}

/// Queue ticket for a title whose copies are all out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reserve {
    pub id: i32,
    pub username: String,
    pub book_id: i32,
    pub reserve_date: NaiveDate,
    pub queue_number: i32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReserve {
    pub username: String,
    pub book_id: i32,
    pub queue_number: i32,
    pub reserve_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReserveDto {
    pub id: i32,
    pub username: String,
    pub book_id: i32,
    pub reserve_date: NaiveDate,
    pub queue_number: i32,
    pub status: String,
}

impl From<Reserve> for ReserveDto {
    fn from(r: Reserve) -> Self {
        Self {
            id: r.id,
            username: r.username,
            book_id: r.book_id,
            reserve_date: r.reserve_date,
            queue_number: r.queue_number,
            status: r.status,
        }
    }
}
