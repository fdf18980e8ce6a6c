//! Loan (borrow) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Loan of one physical copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub loan_id: i32,
    pub book_id: i32,
    pub username: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned: bool,
    pub extensions: i32,
}

/// Loan to be persisted (the backend assigns the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoan {
    pub username: String,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Create loan request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(rename = "bookISBN")]
    #[validate(length(min = 1, message = "Book ISBN is required"))]
    pub book_isbn: String,
}

/// Loan extension request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExtensionRequest {
    #[validate(range(min = 1, message = "Loan id must be positive"))]
    pub loan_id: i32,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

/// Active loans query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActiveLoansQuery {
    pub username: String,
}

/// Loan as returned to the frontend
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanDto {
    pub id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub is_returned: bool,
    pub number_of_extensions: i32,
    pub username: String,
    pub book_id: i32,
}

impl From<Loan> for LoanDto {
    fn from(loan: Loan) -> Self {
        Self {
            id: loan.loan_id,
            borrow_date: loan.borrow_date,
            due_date: loan.due_date,
            is_returned: loan.returned,
            number_of_extensions: loan.extensions,
            username: loan.username,
            book_id: loan.book_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_loan_request_uses_frontend_field_names() {
        let req: CreateLoanRequest =
            serde_json::from_str(r#"{"username":"anna","bookISBN":"978-3-16"}"#).unwrap();
        assert_eq!(req.username, "anna");
        assert_eq!(req.book_isbn, "978-3-16");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_extension_request_rejects_zero_id() {
        let req: CreateExtensionRequest =
            serde_json::from_str(r#"{"loanId":0,"username":"anna"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_loan_dto_mapping() {
        let loan = Loan {
            loan_id: 4,
            book_id: 9,
            username: "anna".into(),
            borrow_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            returned: false,
            extensions: 2,
        };
        let json = serde_json::to_value(LoanDto::from(loan)).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["bookId"], 9);
        assert_eq!(json["dueDate"], "2025-01-31");
        assert_eq!(json["isReturned"], false);
        assert_eq!(json["numberOfExtensions"], 2);
    }
}
