// API layer module (HTTP adapter over the domain)

pub mod errors;
pub mod extract;
pub mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;

use handlers::{atms, licenses};

/// Builds the application router over a shared connection pool.
pub fn router(pool: PgPool) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // ATM routes
        .route("/api/atms", post(atms::create_atm))
        .route("/api/atms", get(atms::list_atms))
        .route("/api/atms/:id", get(atms::get_atm))
        .route("/api/atms/:id", put(atms::update_atm))
        .route("/api/atms/:id", delete(atms::delete_atm))
        // License routes
        .route("/api/licenses", post(licenses::create_license))
        .route("/api/licenses", get(licenses::list_licenses))
        .route("/api/licenses/:id", get(licenses::get_license))
        .route("/api/licenses/:id", put(licenses::update_license))
        .route("/api/licenses/:id", delete(licenses::delete_license))
        // Shared state
        .with_state(pool)
}
