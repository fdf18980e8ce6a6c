//! Loans in the persistence service

use async_trait::async_trait;
use tonic::transport::Channel;

use super::{
    format_wire_date, parse_wire_date,
    proto::{
        loan_service_client::LoanServiceClient, CreateLoanRequest, DtoLoan, ExtendLoanRequest,
        GetActiveLoansByUsernameRequest, GetLoanByIdRequest, GetLoansByIsbnRequest,
    },
};
use crate::{
    error::{AppError, AppResult},
    models::{Loan, NewLoan},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Persist a new loan. `None` when the backend refused it.
    async fn create_loan(&self, loan: NewLoan) -> AppResult<Option<Loan>>;

    /// Every loan, returned or not, on any copy of the ISBN
    async fn loans_by_isbn(&self, isbn: &str) -> AppResult<Vec<Loan>>;

    async fn loan_by_id(&self, id: i32) -> AppResult<Option<Loan>>;

    /// Write back due date and extension count
    async fn extend_loan(&self, loan: &Loan) -> AppResult<()>;

    async fn active_loans_by_username(&self, username: &str) -> AppResult<Vec<Loan>>;
}

#[derive(Clone)]
pub struct GrpcLoanStore {
    client: LoanServiceClient<Channel>,
}

impl GrpcLoanStore {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: LoanServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl LoanStore for GrpcLoanStore {
    async fn create_loan(&self, loan: NewLoan) -> AppResult<Option<Loan>> {
        tracing::debug!(username = %loan.username, book_id = loan.book_id, "Sending gRPC request to create loan");
        let response = self
            .client
            .clone()
            .create_loan(CreateLoanRequest {
                username: loan.username,
                book_id: loan.book_id,
                borrow_date: format_wire_date(loan.borrow_date),
                due_date: format_wire_date(loan.due_date),
            })
            .await?
            .into_inner();

        match response.loan {
            Some(dto) if response.success => Ok(Some(dto.try_into()?)),
            _ => {
                tracing::warn!("Backend did not create loan: {}", response.message);
                Ok(None)
            }
        }
    }

    async fn loans_by_isbn(&self, isbn: &str) -> AppResult<Vec<Loan>> {
        tracing::debug!(isbn, "Sending gRPC request to get loans by ISBN");
        let response = self
            .client
            .clone()
            .get_loans_by_isbn(GetLoansByIsbnRequest { isbn: isbn.to_string() })
            .await?
            .into_inner();

        response.loans.into_iter().map(Loan::try_from).collect()
    }

    async fn loan_by_id(&self, id: i32) -> AppResult<Option<Loan>> {
        tracing::debug!(loan_id = id, "Sending gRPC request to get loan by id");
        let response = self
            .client
            .clone()
            .get_loan_by_id(GetLoanByIdRequest { id })
            .await?
            .into_inner();

        match response.loan {
            Some(dto) if response.success => Ok(Some(dto.try_into()?)),
            _ => Ok(None),
        }
    }

    async fn extend_loan(&self, loan: &Loan) -> AppResult<()> {
        tracing::debug!(loan_id = loan.loan_id, due_date = %loan.due_date, "Sending gRPC request to extend loan");
        let response = self
            .client
            .clone()
            .extend_loan(ExtendLoanRequest {
                loan: Some(DtoLoan::from(loan.clone())),
            })
            .await?
            .into_inner();

        if !response.success {
            return Err(AppError::Internal(format!(
                "Failed to extend loan {}: {}",
                loan.loan_id, response.message
            )));
        }
        Ok(())
    }

    async fn active_loans_by_username(&self, username: &str) -> AppResult<Vec<Loan>> {
        tracing::debug!(username, "Sending gRPC request to get active loans");
        let response = self
            .client
            .clone()
            .get_active_loans_by_username(GetActiveLoansByUsernameRequest {
                username: username.to_string(),
            })
            .await?
            .into_inner();

        response.loans.into_iter().map(Loan::try_from).collect()
    }
}

impl TryFrom<DtoLoan> for Loan {
    type Error = AppError;

    fn try_from(dto: DtoLoan) -> Result<Self, Self::Error> {
        Ok(Loan {
            loan_id: dto.id,
            book_id: dto.book_id,
            username: dto.username,
            borrow_date: parse_wire_date(&dto.borrow_date)?,
            due_date: parse_wire_date(&dto.due_date)?,
            returned: dto.is_returned,
            extensions: dto.number_of_extensions,
        })
    }
}

impl From<Loan> for DtoLoan {
    fn from(loan: Loan) -> Self {
        DtoLoan {
            id: loan.loan_id,
            borrow_date: format_wire_date(loan.borrow_date),
            due_date: format_wire_date(loan.due_date),
            is_returned: loan.returned,
            number_of_extensions: loan.extensions,
            username: loan.username,
            book_id: loan.book_id,
        }
    }
}
