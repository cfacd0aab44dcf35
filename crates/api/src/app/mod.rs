//! HTTP API application wiring (Axum router + service wiring).
//!
//! Structure:
//! - `services.rs`: collaborator + purchase service wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
