//! Business logic services

pub mod auth;
pub mod books;
pub mod loans;
pub mod reservations;
pub mod reserves;
pub mod validation;

use crate::{config::AppConfig, persistence::Persistence};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub loans: loans::LoansService,
    pub reservations: reservations::ReservationsService,
    pub reserves: reserves::ReservesService,
    persistence: Persistence,
}

impl Services {
    /// Create all services over the given persistence stores
    pub fn new(persistence: Persistence, config: &AppConfig) -> Self {
        Self {
            auth: auth::AuthService::new(
                persistence.clone(),
                config.auth.clone(),
                config.server.branch,
            ),
            books: books::BooksService::new(persistence.clone()),
            loans: loans::LoansService::new(persistence.clone(), config.loans.clone()),
            reservations: reservations::ReservationsService::new(persistence.clone()),
            reserves: reserves::ReservesService::new(persistence.clone()),
            persistence,
        }
    }

    /// Round trip to the persistence service, used by the readiness probe
    pub async fn check_persistence(&self) -> crate::error::AppResult<()> {
        self.persistence.books.all_books().await.map(|_| ())
    }
}
