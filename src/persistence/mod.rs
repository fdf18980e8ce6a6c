//! Persistence layer: gRPC clients for the remote persistence service.
//!
//! Every entity has a store trait that the services depend on, and a
//! `Grpc*Store` implementation that talks to the backend through a shared
//! tonic [`Channel`]. The traits are the seam used by tests.

pub mod books;
pub mod loans;
pub mod reservations;
pub mod reserves;
pub mod users;

use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use tonic::transport::{Channel, Endpoint};

use crate::{
    config::PersistenceConfig,
    error::{AppError, AppResult},
};

pub use books::{BookStore, GrpcBookStore};
pub use loans::{GrpcLoanStore, LoanStore};
pub use reservations::{GrpcReservationStore, ReservationStore};
pub use reserves::{GrpcReserveStore, ReserveStore};
pub use users::{GrpcUserStore, UserStore};

/// Messages and clients generated from `proto/library.proto`
#[allow(clippy::all)]
pub mod proto {
    include!("proto/library.rs");
}

/// All stores, shared by the services
#[derive(Clone)]
pub struct Persistence {
    pub books: Arc<dyn BookStore>,
    pub loans: Arc<dyn LoanStore>,
    pub reservations: Arc<dyn ReservationStore>,
    pub reserves: Arc<dyn ReserveStore>,
    pub users: Arc<dyn UserStore>,
}

impl Persistence {
    /// Build the stores over a lazily connected channel. The first request
    /// opens the connection, so the server can start before the backend.
    pub fn connect_lazy(config: &PersistenceConfig) -> AppResult<Self> {
        let channel = Endpoint::from_shared(config.url.clone())?
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_lazy();

        Ok(Self::from_channel(channel))
    }

    pub fn from_channel(channel: Channel) -> Self {
        Self {
            books: Arc::new(GrpcBookStore::new(channel.clone())),
            loans: Arc::new(GrpcLoanStore::new(channel.clone())),
            reservations: Arc::new(GrpcReservationStore::new(channel.clone())),
            reserves: Arc::new(GrpcReserveStore::new(channel.clone())),
            users: Arc::new(GrpcUserStore::new(channel)),
        }
    }
}

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` date sent by the backend. A trailing time part is ignored.
pub(crate) fn parse_wire_date(value: &str) -> AppResult<NaiveDate> {
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, WIRE_DATE_FORMAT)
        .map_err(|e| AppError::Internal(format!("Invalid date '{}' from persistence service: {}", value, e)))
}

pub(crate) fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}
