use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use stockcast_core::Table;

/// Feature column used when the caller does not pick one.
pub const DEFAULT_FEATURE_COLUMN: &str = "Past_Sales";

/// Rows shown by the preview endpoint (the upload-preview head).
pub const PREVIEW_ROWS: usize = 5;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct PredictParams {
    /// Name of the sales-history feature column.
    pub column: Option<String>,
    /// Compute the derived Reorder_Point / Recommended_Stock columns.
    pub thresholds: Option<bool>,
    /// PDF layout: `grid` or `list`.
    pub mode: Option<String>,
}

impl PredictParams {
    pub fn column(&self) -> &str {
        self.column.as_deref().unwrap_or(DEFAULT_FEATURE_COLUMN)
    }

    pub fn thresholds(&self) -> bool {
        self.thresholds.unwrap_or(true)
    }

    pub fn mode(&self) -> &str {
        self.mode.as_deref().unwrap_or("grid")
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn preview_to_json(table: &Table) -> JsonValue {
    let head = table.head(PREVIEW_ROWS);
    let rows: Vec<JsonValue> = head
        .rows()
        .iter()
        .map(|row| {
            let fields: serde_json::Map<String, JsonValue> = head
                .columns()
                .iter()
                .zip(row)
                .map(|(col, cell)| {
                    let value = serde_json::to_value(cell).unwrap_or(JsonValue::Null);
                    (col.clone(), value)
                })
                .collect();
            JsonValue::Object(fields)
        })
        .collect();

    json!({
        "columns": table.columns(),
        "row_count": table.row_count(),
        "preview": rows,
    })
}

