use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockcast_core::ForecastError;
use stockcast_report::ReportMode;

pub fn forecast_error_to_response(err: ForecastError) -> axum::response::Response {
    match err {
        ForecastError::ColumnNotFound(msg) => {
            json_error(StatusCode::BAD_REQUEST, "column_not_found", msg)
        }
        ForecastError::MalformedInput(msg) => {
            json_error(StatusCode::BAD_REQUEST, "malformed_input", msg)
        }
        ForecastError::Shape(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "shape_error", msg)
        }
        ForecastError::ModelLoad(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "model_load_error", msg)
        }
        ForecastError::Render(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "render_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_report_mode(s: &str) -> Result<ReportMode, axum::response::Response> {
    s.parse::<ReportMode>().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_report_mode",
            "mode must be one of: grid, list",
        )
    })
}

