//! Upload-and-download prediction endpoints.
//!
//! Each handler is one request-scoped pass: parse the uploaded CSV, run the
//! predictor, serialize the result. No partial output: any failure aborts
//! the request with a JSON error before bytes are produced.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use stockcast_core::Table;
use stockcast_report::{read_table, to_pdf, write_table};

use crate::app::state::AppState;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/preview", post(preview))
        .route("/csv", post(predict_csv))
        .route("/pdf", post(predict_pdf))
}

/// Parse the upload and show its head, like the upload preview in a UI.
pub async fn preview(body: Bytes) -> axum::response::Response {
    let table = match read_table(&body) {
        Ok(table) => table,
        Err(e) => return errors::forecast_error_to_response(e),
    };

    (StatusCode::OK, Json(dto::preview_to_json(&table))).into_response()
}

/// Predict and return the augmented table as downloadable CSV.
pub async fn predict_csv(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<dto::PredictParams>,
    body: Bytes,
) -> axum::response::Response {
    let predicted = match predict(&state, &params, &body) {
        Ok(table) => table,
        Err(response) => return response,
    };

    let bytes = match write_table(&predicted) {
        Ok(bytes) => bytes,
        Err(e) => return errors::forecast_error_to_response(e),
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"predicted_data.csv\"",
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Predict and return the augmented table as a downloadable PDF report.
pub async fn predict_pdf(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<dto::PredictParams>,
    body: Bytes,
) -> axum::response::Response {
    let mode = match errors::parse_report_mode(params.mode()) {
        Ok(mode) => mode,
        Err(response) => return response,
    };

    let predicted = match predict(&state, &params, &body) {
        Ok(table) => table,
        Err(response) => return response,
    };

    let bytes = match to_pdf(&predicted, mode) {
        Ok(bytes) => bytes,
        Err(e) => return errors::forecast_error_to_response(e),
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"prediction_report.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response()
}

fn predict(
    state: &AppState,
    params: &dto::PredictParams,
    body: &[u8],
) -> Result<Table, axum::response::Response> {
    let table = read_table(body).map_err(errors::forecast_error_to_response)?;

    state
        .predictor(params.thresholds())
        .predict(&table, params.column())
        .map_err(errors::forecast_error_to_response)
}

