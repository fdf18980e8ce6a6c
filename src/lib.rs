//! Library logic server
//!
//! REST JSON API enforcing the library's borrowing rules. Catalog, loans,
//! reservations and accounts are stored by a separate persistence service
//! reached over gRPC.

use std::{sync::Arc, time::Duration};

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/me", get(api::auth::me))
        // Books
        .route("/books", get(api::books::list_books))
        .route("/books/:isbn", get(api::books::get_book))
        .route("/books/isbn/:isbn", get(api::books::get_book))
        // Loans
        .route("/loans", post(api::loans::create_loan))
        .route("/loans/extensions", patch(api::loans::extend_loan))
        .route("/loans/active", get(api::loans::get_active_loans))
        // Reservations
        .route("/reservations", post(api::reservations::create_reservation))
        .route("/reserves", post(api::reserves::create_reserve))
        .with_state(state);

    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", routes)
        .merge(openapi)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
