//! Reservations in the persistence service

use async_trait::async_trait;
use tonic::transport::Channel;

use super::{
    format_wire_date, parse_wire_date,
    proto::{
        reservation_service_client::ReservationServiceClient, CreateReservationRequest,
        DtoReservation, GetReservationCountByIsbnRequest, GetReservationsByIsbnRequest,
    },
};
use crate::{
    error::{AppError, AppResult},
    models::{NewReservation, Reservation},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn create_reservation(&self, reservation: NewReservation) -> AppResult<Option<Reservation>>;

    async fn reservations_by_isbn(&self, isbn: &str) -> AppResult<Vec<Reservation>>;

    /// Number of reservations queued on the ISBN
    async fn reservation_count_by_isbn(&self, isbn: &str) -> AppResult<i32>;
}

#[derive(Clone)]
pub struct GrpcReservationStore {
    client: ReservationServiceClient<Channel>,
}

impl GrpcReservationStore {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: ReservationServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl ReservationStore for GrpcReservationStore {
    async fn create_reservation(&self, reservation: NewReservation) -> AppResult<Option<Reservation>> {
        tracing::debug!(
            username = %reservation.username,
            book_id = reservation.book_id,
            "Sending gRPC request to create reservation"
        );
        let response = self
            .client
            .clone()
            .create_reservation(CreateReservationRequest {
                username: reservation.username,
                book_id: reservation.book_id,
                reservation_date: format_wire_date(reservation.reservation_date),
            })
            .await?
            .into_inner();

        match response.reservation {
            Some(dto) if response.success => Ok(Some(dto.try_into()?)),
            _ => {
                tracing::warn!("Backend did not create reservation: {}", response.message);
                Ok(None)
            }
        }
    }

    async fn reservations_by_isbn(&self, isbn: &str) -> AppResult<Vec<Reservation>> {
        tracing::debug!(isbn, "Sending gRPC request to get reservations by ISBN");
        let response = self
            .client
            .clone()
            .get_reservations_by_isbn(GetReservationsByIsbnRequest { isbn: isbn.to_string() })
            .await?
            .into_inner();

        response.reservations.into_iter().map(Reservation::try_from).collect()
    }

    async fn reservation_count_by_isbn(&self, isbn: &str) -> AppResult<i32> {
        let response = self
            .client
            .clone()
            .get_reservation_count_by_isbn(GetReservationCountByIsbnRequest { isbn: isbn.to_string() })
            .await?
            .into_inner();

        if !response.success {
            return Err(AppError::Grpc(format!(
                "Failed to count reservations for ISBN {}: {}",
                isbn, response.message
            )));
        }
        Ok(response.number_of_reservations)
    }
}

impl TryFrom<DtoReservation> for Reservation {
    type Error = AppError;

    fn try_from(dto: DtoReservation) -> Result<Self, Self::Error> {
        Ok(Reservation {
            id: dto.id,
            username: dto.username,
            book_id: dto.book_id,
            reservation_date: parse_wire_date(&dto.reservation_date)?,
            queue_position: 0,
        })
    }
}
