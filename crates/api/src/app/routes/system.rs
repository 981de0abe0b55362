use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn health() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
        .into_response()
}

