//! `stockcast-report` — table import/export and report rendering.
//!
//! CSV is both the upload format ([`read_table`]) and one download format
//! ([`write_table`]). PDF reports go through a pure layout step
//! ([`lay_out`]) before hitting the renderer, so the row cap, header cells
//! and truncation rules are testable without parsing PDF bytes.

pub mod csv;
pub mod layout;
pub mod pdf;

pub use self::csv::{read_table, write_table};
pub use layout::{lay_out, GridLayout, ListLayout, ReportLayout, ReportMode, LIST_ROW_CAP};
pub use pdf::render;

use stockcast_core::{ForecastResult, Table};

/// Render `table` as a PDF report in the given mode.
pub fn to_pdf(table: &Table, mode: ReportMode) -> ForecastResult<Vec<u8>> {
    render(&lay_out(table, mode))
}

