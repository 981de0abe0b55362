use axum::Router;

pub mod predictions;
pub mod system;

/// Router for the prediction endpoints.
pub fn router() -> Router {
    Router::new().nest("/predictions", predictions::router())
}

