//! Loan management service

use chrono::{Duration, Local, NaiveDate};

use crate::{
    config::LoansConfig,
    error::{AppError, AppResult},
    models::{BookState, Loan, NewLoan},
    persistence::Persistence,
};

#[derive(Clone)]
pub struct LoansService {
    persistence: Persistence,
    config: LoansConfig,
}

impl LoansService {
    pub fn new(persistence: Persistence, config: LoansConfig) -> Self {
        Self { persistence, config }
    }

    /// Borrow the first available copy of a title
    pub async fn create_loan(&self, username: &str, isbn: &str) -> AppResult<Loan> {
        self.create_loan_on(username, isbn, Local::now().date_naive()).await
    }

    pub(crate) async fn create_loan_on(&self, username: &str, isbn: &str, today: NaiveDate) -> AppResult<Loan> {
        tracing::info!(username, isbn, "Creating loan");

        if self.persistence.users.user_by_username(username).await?.is_none() {
            return Err(AppError::InvalidInput(format!("User not found with username: {}", username)));
        }

        let has_active_loan = self
            .persistence
            .loans
            .loans_by_isbn(isbn)
            .await?
            .iter()
            .any(|loan| !loan.returned && loan.username.eq_ignore_ascii_case(username));
        if has_active_loan {
            return Err(AppError::Conflict("User already has an active loan for this book".into()));
        }

        let copies = self.persistence.books.books_by_isbn(isbn).await?;
        if copies.is_empty() {
            return Err(AppError::InvalidInput("No books found with the specified ISBN".into()));
        }

        let book = copies
            .into_iter()
            .find(|b| b.is_available())
            .ok_or_else(|| AppError::InvalidInput("No available copies of this book".into()))?;
        tracing::debug!(book_id = book.id, "Selected available copy");

        let loan = self
            .persistence
            .loans
            .create_loan(NewLoan {
                username: username.to_string(),
                book_id: book.id,
                borrow_date: today,
                due_date: today + Duration::days(self.config.duration_days),
            })
            .await?
            .filter(|loan| loan.loan_id > 0)
            .ok_or_else(|| AppError::Internal("Failed to create loan".into()))?;

        self.persistence
            .books
            .update_state(book.id, BookState::Borrowed)
            .await?;

        tracing::info!(loan_id = loan.loan_id, due_date = %loan.due_date, "Loan created");
        Ok(loan)
    }

    /// Push the due date of a loan forward by one extension period
    pub async fn extend_loan(&self, loan_id: i32, username: &str) -> AppResult<Loan> {
        self.extend_loan_on(loan_id, username, Local::now().date_naive()).await
    }

    pub(crate) async fn extend_loan_on(&self, loan_id: i32, username: &str, today: NaiveDate) -> AppResult<Loan> {
        tracing::info!(loan_id, username, "Extending loan");

        let mut loan = self
            .persistence
            .loans
            .loan_by_id(loan_id)
            .await?
            .ok_or_else(|| AppError::InvalidInput(format!("Loan not found with ID: {}", loan_id)))?;

        if !loan.username.eq_ignore_ascii_case(username) {
            return Err(AppError::Conflict("Only the borrower can extend this loan".into()));
        }

        let extendable_from = loan.due_date - Duration::days(1);
        if today < extendable_from {
            return Err(AppError::Conflict(format!(
                "You can extend your loan starting from: {}",
                extendable_from
            )));
        }

        if loan.extensions >= self.config.max_extensions {
            return Err(AppError::Conflict(format!(
                "Loan has already been extended the maximum of {} times",
                self.config.max_extensions
            )));
        }

        loan.due_date += Duration::days(self.config.extension_days);
        loan.extensions += 1;
        self.persistence.loans.extend_loan(&loan).await?;

        tracing::info!(loan_id, due_date = %loan.due_date, extensions = loan.extensions, "Loan extended");
        Ok(loan)
    }

    /// Unreturned loans of a user
    pub async fn get_active_loans(&self, username: &str) -> AppResult<Vec<Loan>> {
        let loans = self.persistence.loans.active_loans_by_username(username).await?;
        if loans.is_empty() {
            return Err(AppError::NotFound(format!("No active loans found for user: {}", username)));
        }
        Ok(loans)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::persistence::{books::MockBookStore, loans::MockLoanStore, users::MockUserStore};
    use crate::services::testing::{book, loan, persistence, user};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn users_with(username: &'static str) -> MockUserStore {
        let mut users = MockUserStore::new();
        users
            .expect_user_by_username()
            .returning(move |name| Ok((name == username).then(|| user(username))));
        users
    }

    #[tokio::test]
    async fn test_create_loan_borrows_first_available_copy() {
        let today = date(2025, 3, 1);

        let mut loans = MockLoanStore::new();
        loans.expect_loans_by_isbn().returning(|_| Ok(vec![]));
        loans
            .expect_create_loan()
            .withf(move |new| new.book_id == 2 && new.borrow_date == today && new.due_date == date(2025, 3, 31))
            .returning(|new| {
                Ok(Some(Loan {
                    loan_id: 10,
                    book_id: new.book_id,
                    username: new.username,
                    borrow_date: new.borrow_date,
                    due_date: new.due_date,
                    returned: false,
                    extensions: 0,
                }))
            });

        let mut books = MockBookStore::new();
        books.expect_books_by_isbn().returning(|_| {
            Ok(vec![
                book(1, "111", BookState::Borrowed),
                book(2, "111", BookState::Available),
                book(3, "111", BookState::Available),
            ])
        });
        books
            .expect_update_state()
            .with(eq(2), eq(BookState::Borrowed))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut p = persistence();
        p.users = Arc::new(users_with("anna"));
        p.loans = Arc::new(loans);
        p.books = Arc::new(books);

        let service = LoansService::new(p, LoansConfig::default());
        let loan = service.create_loan_on("anna", "111", today).await.unwrap();

        assert_eq!(loan.loan_id, 10);
        assert_eq!(loan.due_date, date(2025, 3, 31));
    }

    #[tokio::test]
    async fn test_create_loan_unknown_user() {
        let mut p = persistence();
        p.users = Arc::new(users_with("anna"));

        let service = LoansService::new(p, LoansConfig::default());
        let result = service.create_loan("bo", "111").await;

        assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg.contains("bo")));
    }

    #[tokio::test]
    async fn test_duplicate_active_loan_checked_before_availability() {
        let mut loans = MockLoanStore::new();
        loans
            .expect_loans_by_isbn()
            .returning(|_| Ok(vec![loan(1, 1, "ANNA", date(2025, 3, 31), false)]));

        let mut p = persistence();
        p.users = Arc::new(users_with("anna"));
        p.loans = Arc::new(loans);

        let service = LoansService::new(p, LoansConfig::default());
        let result = service.create_loan("anna", "111").await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_returned_loan_does_not_block_new_loan_but_no_copy_available() {
        let mut loans = MockLoanStore::new();
        loans
            .expect_loans_by_isbn()
            .returning(|_| Ok(vec![loan(1, 1, "anna", date(2025, 1, 31), true)]));

        let mut books = MockBookStore::new();
        books
            .expect_books_by_isbn()
            .returning(|_| Ok(vec![book(1, "111", BookState::Borrowed)]));

        let mut p = persistence();
        p.users = Arc::new(users_with("anna"));
        p.loans = Arc::new(loans);
        p.books = Arc::new(books);

        let service = LoansService::new(p, LoansConfig::default());
        let result = service.create_loan("anna", "111").await;

        assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg == "No available copies of this book"));
    }

    #[tokio::test]
    async fn test_create_loan_rejects_invalid_backend_id() {
        let mut loans = MockLoanStore::new();
        loans.expect_loans_by_isbn().returning(|_| Ok(vec![]));
        loans.expect_create_loan().returning(|new| {
            Ok(Some(Loan {
                loan_id: 0,
                book_id: new.book_id,
                username: new.username,
                borrow_date: new.borrow_date,
                due_date: new.due_date,
                returned: false,
                extensions: 0,
            }))
        });

        let mut books = MockBookStore::new();
        books
            .expect_books_by_isbn()
            .returning(|_| Ok(vec![book(1, "111", BookState::Available)]));
        books.expect_update_state().never();

        let mut p = persistence();
        p.users = Arc::new(users_with("anna"));
        p.loans = Arc::new(loans);
        p.books = Arc::new(books);

        let service = LoansService::new(p, LoansConfig::default());
        let result = service.create_loan("anna", "111").await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    fn service_with_loan(existing: Loan, expect_write: bool) -> LoansService {
        let mut loans = MockLoanStore::new();
        loans
            .expect_loan_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        loans
            .expect_extend_loan()
            .times(usize::from(expect_write))
            .returning(|_| Ok(()));

        let mut p = persistence();
        p.loans = Arc::new(loans);
        LoansService::new(p, LoansConfig::default())
    }

    #[tokio::test]
    async fn test_extend_loan_from_day_before_due() {
        let due = date(2025, 3, 31);
        let service = service_with_loan(loan(7, 1, "anna", due, false), true);

        let extended = service.extend_loan_on(7, "Anna", date(2025, 3, 30)).await.unwrap();

        assert_eq!(extended.due_date, date(2025, 4, 30));
        assert_eq!(extended.extensions, 1);
    }

    #[tokio::test]
    async fn test_extend_loan_too_early() {
        let due = date(2025, 3, 31);
        let service = service_with_loan(loan(7, 1, "anna", due, false), false);

        let result = service.extend_loan_on(7, "anna", date(2025, 3, 29)).await;

        assert!(matches!(
            result,
            Err(AppError::Conflict(msg)) if msg == "You can extend your loan starting from: 2025-03-30"
        ));
    }

    #[tokio::test]
    async fn test_extend_loan_limit() {
        let due = date(2025, 3, 31);
        let mut at_limit = loan(7, 1, "anna", due, false);
        at_limit.extensions = 12;
        let service = service_with_loan(at_limit, false);

        let result = service.extend_loan_on(7, "anna", due).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        let mut below_limit = loan(7, 1, "anna", due, false);
        below_limit.extensions = 11;
        let service = service_with_loan(below_limit, true);

        let extended = service.extend_loan_on(7, "anna", due).await.unwrap();
        assert_eq!(extended.extensions, 12);
    }

    #[tokio::test]
    async fn test_extend_loan_of_someone_else() {
        let service = service_with_loan(loan(7, 1, "anna", date(2025, 3, 31), false), false);

        let result = service.extend_loan_on(7, "bo", date(2025, 3, 31)).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_extend_unknown_loan() {
        let mut loans = MockLoanStore::new();
        loans.expect_loan_by_id().returning(|_| Ok(None));

        let mut p = persistence();
        p.loans = Arc::new(loans);
        let service = LoansService::new(p, LoansConfig::default());

        let result = service.extend_loan(99, "anna").await;
        assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg == "Loan not found with ID: 99"));
    }

    #[tokio::test]
    async fn test_no_active_loans_is_not_found() {
        let mut loans = MockLoanStore::new();
        loans
            .expect_active_loans_by_username()
            .returning(|_| Ok(vec![]));

        let mut p = persistence();
        p.loans = Arc::new(loans);
        let service = LoansService::new(p, LoansConfig::default());

        assert!(matches!(
            service.get_active_loans("anna").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_active_loans_transport_failure() {
        let mut loans = MockLoanStore::new();
        loans
            .expect_active_loans_by_username()
            .returning(|_| Err(AppError::Grpc("unavailable".into())));

        let mut p = persistence();
        p.loans = Arc::new(loans);
        let service = LoansService::new(p, LoansConfig::default());

        assert!(matches!(
            service.get_active_loans("anna").await,
            Err(AppError::Grpc(_))
        ));
    }
}
