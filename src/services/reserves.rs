//! Reserve (queue ticket) service

use chrono::Local;

use crate::{
    error::{AppError, AppResult},
    models::{Book, NewReserve, Reserve},
    persistence::Persistence,
};

const PENDING: &str = "Pending";

#[derive(Clone)]
pub struct ReservesService {
    persistence: Persistence,
}

impl ReservesService {
    pub fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }

    /// Queue a user for a title whose copies are all out
    pub async fn create_reserve(&self, username: &str, isbn: &str) -> AppResult<Reserve> {
        tracing::info!(username, isbn, "Creating reserve");

        let known_user = self
            .persistence
            .users
            .user_by_username(username)
            .await?
            .is_some_and(|user| user.username == username);
        if !known_user {
            return Err(AppError::InvalidInput(format!("User not found with username: {}", username)));
        }

        let copies = self.persistence.books.books_by_isbn(isbn).await?;
        let first_copy = copies
            .first()
            .ok_or_else(|| AppError::InvalidInput("No book with this ISBN exists".into()))?;

        if copies.iter().any(Book::is_available) {
            return Err(AppError::Conflict("Book is available, borrowing should happen instead.".into()));
        }

        let queued = self.persistence.reserves.reserves_by_isbn(isbn).await?.len();
        let queue_number = i32::try_from(queued + 1)
            .map_err(|_| AppError::Internal("Reserve queue is too long".into()))?;

        let reserve = self
            .persistence
            .reserves
            .create_reserve(NewReserve {
                username: username.to_string(),
                book_id: first_copy.id,
                queue_number,
                reserve_date: Local::now().date_naive(),
                status: PENDING.to_string(),
            })
            .await?
            .ok_or_else(|| AppError::Internal("Failed to create reserve".into()))?;

        tracing::info!(reserve_id = reserve.id, queue_number, "Reserve created");
        Ok(reserve)
    }
}
