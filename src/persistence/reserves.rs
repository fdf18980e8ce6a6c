//! Reserve queue tickets in the persistence service

use async_trait::async_trait;
use tonic::transport::Channel;

use super::{
    format_wire_date, parse_wire_date,
    proto::{
        reserve_service_client::ReserveServiceClient, CreateReserveRequest, DtoReserve,
        GetReservesByIsbnRequest,
    },
};
use crate::{
    error::{AppError, AppResult},
    models::{NewReserve, Reserve},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReserveStore: Send + Sync {
    async fn create_reserve(&self, reserve: NewReserve) -> AppResult<Option<Reserve>>;

    async fn reserves_by_isbn(&self, isbn: &str) -> AppResult<Vec<Reserve>>;
}

#[derive(Clone)]
pub struct GrpcReserveStore {
    client: ReserveServiceClient<Channel>,
}

impl GrpcReserveStore {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: ReserveServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl ReserveStore for GrpcReserveStore {
    async fn create_reserve(&self, reserve: NewReserve) -> AppResult<Option<Reserve>> {
        tracing::debug!(
            username = %reserve.username,
            book_id = reserve.book_id,
            queue_number = reserve.queue_number,
            "Sending gRPC request to create reserve"
        );
        let response = self
            .client
            .clone()
            .create_reserve(CreateReserveRequest {
                username: reserve.username,
                book_id: reserve.book_id,
                queue_number: reserve.queue_number,
                reserve_date: format_wire_date(reserve.reserve_date),
                status: reserve.status,
            })
            .await?
            .into_inner();

        match response.reserve {
            Some(dto) if response.success => Ok(Some(dto.try_into()?)),
            _ => {
                tracing::warn!("Backend did not create reserve: {}", response.message);
                Ok(None)
            }
        }
    }

    async fn reserves_by_isbn(&self, isbn: &str) -> AppResult<Vec<Reserve>> {
        let response = self
            .client
            .clone()
            .get_reserves_by_isbn(GetReservesByIsbnRequest { isbn: isbn.to_string() })
            .await?
            .into_inner();

        response.reserves.into_iter().map(Reserve::try_from).collect()
    }
}

impl TryFrom<DtoReserve> for Reserve {
    type Error = AppError;

    fn try_from(dto: DtoReserve) -> Result<Self, Self::Error> {
        Ok(Reserve {
            id: dto.id,
            username: dto.username,
            book_id: dto.book_id,
            reserve_date: parse_wire_date(&dto.reserve_date)?,
            queue_number: dto.queue_number,
            status: dto.status,
        })
    }
}
