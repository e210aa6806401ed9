use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_loan, get_availability, quote_late_fee, register_book, return_loan,
};

/// Creates the API router with all lending ledger endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Register copies of a book
/// - POST /loans - Borrow a book
/// - POST /loans/return - Return a borrowed book
///
/// Query endpoints (Read operations):
/// - GET /books/:id/availability - Available copies for a book
/// - GET /fees/late - Late fee quote
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/books", post(register_book))
        .route("/loans", post(create_loan))
        .route("/loans/return", post(return_loan))
        // Query endpoints (Read operations)
        .route("/books/:id/availability", get(get_availability))
        .route("/fees/late", get(quote_late_fee))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
