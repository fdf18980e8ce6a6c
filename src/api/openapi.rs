//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, loans, reservations, reserves};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Logic Server API",
        version = "1.0.0",
        description = "Business rules for the library system: catalog, loans, reservations and accounts"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::register,
        auth::me,
        // Books
        books::list_books,
        books::get_book,
        // Loans
        loans::create_loan,
        loans::extend_loan,
        loans::get_active_loans,
        // Reservations
        reservations::create_reservation,
        reserves::create_reserve,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            crate::models::user::RegisterRequest,
            crate::models::user::UserInfo,
            crate::models::Role,
            auth::MeResponse,
            // Books
            crate::models::BookSummary,
            crate::models::BookState,
            crate::models::Genre,
            // Loans
            crate::models::loan::CreateLoanRequest,
            crate::models::loan::CreateExtensionRequest,
            crate::models::LoanDto,
            // Reservations
            crate::models::reservation::CreateReservationRequest,
            crate::models::reservation::ReservationDto,
            crate::models::reservation::ReserveDto,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication and registration"),
        (name = "books", description = "Book catalog"),
        (name = "loans", description = "Loan management"),
        (name = "reservations", description = "Reservations and reserve queue")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
