//! HTTP application wiring (Axum router + state).
//!
//! This folder is structured like:
//! - `state.rs`: shared request state (the injected scorer)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use stockcast_forecast::Scorer;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The scorer is the one piece of shared state; it is immutable and pure,
/// so sharing it across requests needs no locking.
pub fn build_app(scorer: Arc<dyn Scorer>) -> Router {
    let state = Arc::new(state::AppState::new(scorer));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(state)))
        .layer(ServiceBuilder::new())
}

