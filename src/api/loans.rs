//! Loan management endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::loan::{ActiveLoansQuery, CreateExtensionRequest, CreateLoanRequest, LoanDto},
};

use super::AuthenticatedUser;

/// Borrow a copy of a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    request_body = CreateLoanRequest,
    responses(
        (status = 201, description = "Loan created", body = LoanDto),
        (status = 400, description = "Unknown user or ISBN, or no available copy", body = crate::error::ErrorResponse),
        (status = 409, description = "User already borrows this book", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateLoanRequest>,
) -> AppResult<(StatusCode, Json<LoanDto>)> {
    claims.require_reader()?;
    request.validate()?;

    let loan = state
        .services
        .loans
        .create_loan(&request.username, &request.book_isbn)
        .await?;

    Ok((StatusCode::CREATED, Json(loan.into())))
}

/// Extend a loan
#[utoipa::path(
    patch,
    path = "/loans/extensions",
    tag = "loans",
    security(("bearer_auth" = [])),
    request_body = CreateExtensionRequest,
    responses(
        (status = 200, description = "Loan extended", body = LoanDto),
        (status = 400, description = "Unknown loan", body = crate::error::ErrorResponse),
        (status = 409, description = "Too early, not the borrower, or extension limit reached", body = crate::error::ErrorResponse)
    )
)]
pub async fn extend_loan(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateExtensionRequest>,
) -> AppResult<Json<LoanDto>> {
    claims.require_reader()?;
    request.validate()?;

    let loan = state
        .services
        .loans
        .extend_loan(request.loan_id, &request.username)
        .await?;

    Ok(Json(loan.into()))
}

/// Unreturned loans of a user
#[utoipa::path(
    get,
    path = "/loans/active",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(ActiveLoansQuery),
    responses(
        (status = 200, description = "Active loans", body = Vec<LoanDto>),
        (status = 404, description = "User has no active loans", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_active_loans(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<ActiveLoansQuery>,
) -> AppResult<Json<Vec<LoanDto>>> {
    claims.require_reader()?;

    let loans = state.services.loans.get_active_loans(&query.username).await?;
    Ok(Json(loans.into_iter().map(LoanDto::from).collect()))
}
