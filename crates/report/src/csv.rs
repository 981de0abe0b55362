//! CSV import/export for [`Table`].

use ::csv::{ReaderBuilder, WriterBuilder};

use stockcast_core::{Cell, ForecastError, ForecastResult, Table};

/// Parse uploaded CSV bytes into a table.
///
/// The first record is the header row. Fields are trimmed; numeric-looking
/// fields become numbers, the rest stay text. Ragged records and inputs
/// without a header fail with `MalformedInput`.
pub fn read_table(bytes: &[u8]) -> ForecastResult<Table> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ForecastError::malformed_input(format!("header row: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(ForecastError::malformed_input("missing header row"));
    }

    let mut table = Table::new(headers);
    for (idx, record) in reader.records().enumerate() {
        // idx is 0-based over data records; +2 accounts for the header line.
        let record = record
            .map_err(|e| ForecastError::malformed_input(format!("line {}: {e}", idx + 2)))?;
        table.push_row(record.iter().map(Cell::parse).collect())?;
    }

    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "parsed uploaded csv"
    );
    Ok(table)
}

/// Serialize a table as CSV: header row plus one record per row, UTF-8,
/// comma separated, no index column. Numbers use their default text
/// representation.
pub fn write_table(table: &Table) -> ForecastResult<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(table.columns())
        .map_err(|e| ForecastError::render(format!("csv header: {e}")))?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(|e| ForecastError::render(format!("csv row: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| ForecastError::render(format!("csv flush: {e}")))
}
