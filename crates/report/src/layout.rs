//! Pure report layout: what goes on the page, before any PDF bytes exist.

use core::str::FromStr;

use stockcast_core::{ForecastError, Table};

/// List reports show at most this many rows; the rest are silently ignored.
pub const LIST_ROW_CAP: usize = 10;

/// Character budget for one 38-unit grid cell at the report font size.
/// Longer text is truncated, keeping row heights uniform.
pub const GRID_CELL_CHARS: usize = 16;

/// The two report layouts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportMode {
    /// Bordered fixed-width cells, one header row, all data rows.
    Grid,
    /// `Item N - {col: value, ...}` lines, capped at [`LIST_ROW_CAP`] rows.
    List,
}

impl FromStr for ReportMode {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(ReportMode::Grid),
            "list" => Ok(ReportMode::List),
            other => Err(ForecastError::malformed_input(format!(
                "unknown report mode '{other}' (expected grid or list)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLayout {
    Grid(GridLayout),
    List(ListLayout),
}

/// Lay out a table for rendering.
pub fn lay_out(table: &Table, mode: ReportMode) -> ReportLayout {
    match mode {
        ReportMode::Grid => ReportLayout::Grid(grid_layout(table)),
        ReportMode::List => ReportLayout::List(list_layout(table)),
    }
}

fn grid_layout(table: &Table) -> GridLayout {
    let header = table
        .columns()
        .iter()
        .map(|c| truncate(c, GRID_CELL_CHARS))
        .collect();

    let rows = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| truncate(&cell.to_string(), GRID_CELL_CHARS))
                .collect()
        })
        .collect();

    GridLayout {
        title: "Inventory Demand Prediction Report".to_string(),
        header,
        rows,
    }
}

fn list_layout(table: &Table) -> ListLayout {
    let lines = table
        .rows()
        .iter()
        .take(LIST_ROW_CAP)
        .enumerate()
        .map(|(idx, row)| {
            let fields: Vec<String> = table
                .columns()
                .iter()
                .zip(row)
                .map(|(col, cell)| format!("{col}: {cell}"))
                .collect();
            format!("Item {} - {{{}}}", idx + 1, fields.join(", "))
        })
        .collect();

    ListLayout {
        title: "Retail Inventory Prediction Report".to_string(),
        lines,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcast_core::Cell;

    fn table_with_rows(n: usize) -> Table {
        let mut t = Table::new(vec!["Store".to_string(), "Past_Sales".to_string()]);
        for i in 0..n {
            t.push_row(vec![
                Cell::Text(format!("S{i}")),
                Cell::Number(i as f64),
            ])
            .unwrap();
        }
        t
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("grid".parse::<ReportMode>().unwrap(), ReportMode::Grid);
        assert_eq!("LIST".parse::<ReportMode>().unwrap(), ReportMode::List);
        assert!("table".parse::<ReportMode>().is_err());
    }

    #[test]
    fn grid_header_has_one_cell_per_column_in_order() {
        let layout = grid_layout(&table_with_rows(2));
        assert_eq!(layout.header, vec!["Store", "Past_Sales"]);
        assert_eq!(layout.rows.len(), 2);
        assert_eq!(layout.rows[0].len(), 2);
    }

    #[test]
    fn grid_cells_are_truncated_to_the_cell_budget() {
        let mut t = Table::new(vec!["A_Very_Long_Column_Name_Indeed".to_string()]);
        t.push_row(vec![Cell::Text("short".to_string())]).unwrap();

        let layout = grid_layout(&t);
        assert_eq!(layout.header[0].chars().count(), GRID_CELL_CHARS);
        assert_eq!(layout.rows[0][0], "short");
    }

    #[test]
    fn list_caps_at_ten_rows() {
        let layout = list_layout(&table_with_rows(15));
        assert_eq!(layout.lines.len(), 10);
    }

    #[test]
    fn list_keeps_short_tables_whole() {
        let layout = list_layout(&table_with_rows(3));
        assert_eq!(layout.lines.len(), 3);
    }

    #[test]
    fn list_lines_are_one_based_key_value_text() {
        let layout = list_layout(&table_with_rows(2));
        assert_eq!(layout.lines[0], "Item 1 - {Store: S0, Past_Sales: 0}");
        assert_eq!(layout.lines[1], "Item 2 - {Store: S1, Past_Sales: 1}");
    }
}

