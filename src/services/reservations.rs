//! Reservation service

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookState, Loan, NewReservation, Reservation},
    persistence::Persistence,
};

#[derive(Clone)]
pub struct ReservationsService {
    persistence: Persistence,
    /// Serialises reservation creation within this process
    lock: Arc<Mutex<()>>,
}

impl ReservationsService {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            persistence,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Reserve the copy of a title that is due back first
    pub async fn create_reservation(&self, username: &str, isbn: &str) -> AppResult<Reservation> {
        let _guard = self.lock.lock().await;
        self.create_reservation_on(username, isbn, Local::now().date_naive())
            .await
    }

    async fn create_reservation_on(&self, username: &str, isbn: &str, today: NaiveDate) -> AppResult<Reservation> {
        tracing::info!(username, isbn, "Creating reservation");

        if self.persistence.users.user_by_username(username).await?.is_none() {
            return Err(AppError::InvalidInput(format!("User not found with username: {}", username)));
        }

        let copies = self.persistence.books.books_by_isbn(isbn).await?;
        if copies.is_empty() {
            return Err(AppError::InvalidInput(format!("No books found with ISBN: {}", isbn)));
        }

        let already_reserved = self
            .persistence
            .reservations
            .reservations_by_isbn(isbn)
            .await?
            .iter()
            .any(|r| r.username.eq_ignore_ascii_case(username));
        if already_reserved {
            return Err(AppError::InvalidInput(
                "User already has an active reservation for this book.".into(),
            ));
        }

        if copies.iter().any(Book::is_available) {
            return Err(AppError::InvalidInput(
                "Book is currently available. Cannot reserve, but borrow instead.".into(),
            ));
        }

        let loans = self.persistence.loans.loans_by_isbn(isbn).await?;
        if loans
            .iter()
            .any(|loan| !loan.returned && loan.username.eq_ignore_ascii_case(username))
        {
            return Err(AppError::InvalidInput(
                "User already has an unreturned loan for this book.".into(),
            ));
        }

        let target = earliest_due_copy(&copies, &loans).ok_or_else(|| {
            AppError::NotFound(format!("No suitable book found for reservation with ISBN: {}", isbn))
        })?;
        tracing::debug!(book_id = target.id, "Selected copy for reservation");

        let mut reservation = self
            .persistence
            .reservations
            .create_reservation(NewReservation {
                username: username.to_string(),
                book_id: target.id,
                reservation_date: today,
            })
            .await?
            .filter(|r| r.id > 0)
            .ok_or_else(|| AppError::Internal("Failed to create reservation".into()))?;

        self.persistence
            .books
            .update_state(target.id, BookState::Reserved)
            .await?;

        reservation.queue_position = self
            .persistence
            .reservations
            .reservation_count_by_isbn(isbn)
            .await?;

        tracing::info!(
            reservation_id = reservation.id,
            position = reservation.queue_position,
            "Reservation created"
        );
        Ok(reservation)
    }
}

/// Copy whose earliest unreturned loan is due first. Ties keep backend order.
fn earliest_due_copy<'a>(copies: &'a [Book], loans: &[Loan]) -> Option<&'a Book> {
    let mut best: Option<(&Book, NaiveDate)> = None;

    for copy in copies {
        let due = loans
            .iter()
            .filter(|loan| !loan.returned && loan.book_id == copy.id)
            .map(|loan| loan.due_date)
            .min();

        if let Some(due) = due {
            match best {
                Some((_, best_due)) if best_due <= due => {}
                _ => best = Some((copy, due)),
            }
        }
    }

    best.map(|(copy, _)| copy)
}
