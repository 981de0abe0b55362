//! In-memory tabular data model.
//!
//! A [`Table`] is an ordered list of column names plus rows of [`Cell`]s,
//! one cell per column. Tables are request-scoped values: created fresh
//! from an upload, augmented by the predictor, rendered, then dropped.
//! Nothing here is ever persisted or shared mutably.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ForecastResult};

/// A single table value: numeric or free text.
///
/// Numbers are kept as `f64` and rendered with Rust's default `f64`
/// formatting, so `8.0` prints as `8` and `5.6` as `5.6`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Parse a raw text field: numeric-looking fields become [`Cell::Number`],
    /// everything else (including the empty string) stays text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<f64>() {
                return Cell::Number(n);
            }
        }
        Cell::Text(trimmed.to_string())
    }

    /// Numeric view of the cell, converting text on the fly if it parses.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(t) => t.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Cell::Number(n) => core::fmt::Display::fmt(n, f),
            Cell::Text(t) => f.write_str(t),
        }
    }
}

/// Ordered columns + rows. Column order is significant and preserved;
/// new columns are only ever appended at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append one row. The row must have exactly one cell per column.
    pub fn push_row(&mut self, row: Vec<Cell>) -> ForecastResult<()> {
        if row.len() != self.columns.len() {
            return Err(ForecastError::malformed_input(format!(
                "row {} has {} fields, expected {}",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Extract a named column as numbers.
    ///
    /// Fails with `ColumnNotFound` if the name is absent, or `Shape` if any
    /// cell in the column is not convertible to a number.
    pub fn numeric_column(&self, name: &str) -> ForecastResult<Vec<f64>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| ForecastError::column_not_found(name))?;

        let mut values = Vec::with_capacity(self.rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            let value = row[idx].as_f64().ok_or_else(|| {
                ForecastError::shape(format!(
                    "column '{}' has non-numeric value '{}' at row {}",
                    name,
                    row[idx],
                    row_idx + 1
                ))
            })?;
            values.push(value);
        }
        Ok(values)
    }

    /// Set a column, appending it at the end if the name is new or
    /// overwriting values in place if it already exists (so re-predicting
    /// an already-predicted file stays well-formed).
    ///
    /// Fails with `Shape` if the value count does not match the row count.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) -> ForecastResult<()> {
        if values.len() != self.rows.len() {
            return Err(ForecastError::shape(format!(
                "column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// First `n` rows (fewer if the table is shorter). Used for previews.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
