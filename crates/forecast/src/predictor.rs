//! Batch demand prediction over a table.

use stockcast_core::{Cell, ForecastError, ForecastResult, Table};

use crate::scorer::Scorer;

/// Column appended with the model's per-row forecast.
pub const PREDICTED_DEMAND: &str = "Predicted_Demand";

/// Derived threshold column: `floor(0.8 * Predicted_Demand)`.
pub const REORDER_POINT: &str = "Reorder_Point";

/// Derived threshold column: `floor(1.2 * Predicted_Demand)`.
pub const RECOMMENDED_STOCK: &str = "Recommended_Stock";

/// Predictor configuration.
///
/// Threshold derivation is optional; callers pick per request whether the
/// output carries only the forecast or the reorder columns too.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PredictorOptions {
    /// Compute `Reorder_Point` / `Recommended_Stock` alongside the forecast.
    pub thresholds: bool,
}

impl Default for PredictorOptions {
    fn default() -> Self {
        Self { thresholds: true }
    }
}

/// Applies a [`Scorer`] to one feature column of a table and appends the
/// forecast (and optional thresholds) as new columns.
///
/// The scorer is constructor-injected; there is no global model state.
#[derive(Debug, Clone)]
pub struct DemandPredictor<S> {
    scorer: S,
    options: PredictorOptions,
}

impl<S: Scorer> DemandPredictor<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            options: PredictorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PredictorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_thresholds(mut self, thresholds: bool) -> Self {
        self.options.thresholds = thresholds;
        self
    }

    /// Predict demand for every row of `table` from `feature_column`.
    ///
    /// Returns a new table with all original columns intact (order
    /// preserved) and the forecast columns appended; the input is not
    /// mutated. Row count in equals row count out.
    pub fn predict(&self, table: &Table, feature_column: &str) -> ForecastResult<Table> {
        let feature = table.numeric_column(feature_column)?;
        let predicted = self.scorer.score(&feature)?;
        if predicted.len() != feature.len() {
            return Err(ForecastError::shape(format!(
                "scorer returned {} values for {} rows",
                predicted.len(),
                feature.len()
            )));
        }

        let mut out = table.clone();
        out.set_column(
            PREDICTED_DEMAND,
            predicted.iter().copied().map(Cell::from).collect(),
        )?;

        if self.options.thresholds {
            out.set_column(
                REORDER_POINT,
                predicted.iter().map(|p| Cell::from((0.8 * p).floor())).collect(),
            )?;
            out.set_column(
                RECOMMENDED_STOCK,
                predicted.iter().map(|p| Cell::from((1.2 * p).floor())).collect(),
            )?;
        }

        tracing::debug!(
            rows = out.row_count(),
            feature_column,
            thresholds = self.options.thresholds,
            "demand prediction complete"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Test double: predicts twice the past sales.
    struct DoubleScorer;

    impl Scorer for DoubleScorer {
        fn score(&self, feature: &[f64]) -> ForecastResult<Vec<f64>> {
            Ok(feature.iter().map(|x| x * 2.0).collect())
        }
    }

    /// Misbehaving double: drops the last value.
    struct TruncatingScorer;

    impl Scorer for TruncatingScorer {
        fn score(&self, feature: &[f64]) -> ForecastResult<Vec<f64>> {
            let mut out: Vec<f64> = feature.to_vec();
            out.pop();
            Ok(out)
        }
    }

    fn sales_table(values: &[f64]) -> Table {
        let mut t = Table::new(vec!["Store".to_string(), "Past_Sales".to_string()]);
        for (i, v) in values.iter().enumerate() {
            t.push_row(vec![Cell::Text(format!("S{i}")), Cell::Number(*v)])
                .unwrap();
        }
        t
    }

    #[test]
    fn predict_preserves_rows_and_appends_forecast() {
        let table = sales_table(&[5.0, 3.5, 8.0]);
        let predicted = DemandPredictor::new(DoubleScorer)
            .with_thresholds(false)
            .predict(&table, "Past_Sales")
            .unwrap();

        assert_eq!(predicted.row_count(), 3);
        assert_eq!(
            predicted.columns(),
            &["Store", "Past_Sales", PREDICTED_DEMAND]
        );
        assert_eq!(predicted.rows()[2][2], Cell::Number(16.0));
        // input untouched
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn thresholds_use_floor_semantics() {
        // Predicted 10 -> 8 / 12, predicted 7 -> floor(5.6) = 5 / floor(8.4) = 8.
        let table = sales_table(&[5.0, 3.5]);
        let predicted = DemandPredictor::new(DoubleScorer)
            .predict(&table, "Past_Sales")
            .unwrap();

        assert_eq!(
            predicted.columns(),
            &[
                "Store",
                "Past_Sales",
                PREDICTED_DEMAND,
                REORDER_POINT,
                RECOMMENDED_STOCK
            ]
        );
        assert_eq!(predicted.rows()[0][2], Cell::Number(10.0));
        assert_eq!(predicted.rows()[0][3], Cell::Number(8.0));
        assert_eq!(predicted.rows()[0][4], Cell::Number(12.0));
        assert_eq!(predicted.rows()[1][2], Cell::Number(7.0));
        assert_eq!(predicted.rows()[1][3], Cell::Number(5.0));
        assert_eq!(predicted.rows()[1][4], Cell::Number(8.0));
    }

    #[test]
    fn unknown_column_fails_with_column_not_found() {
        let table = sales_table(&[1.0]);
        let err = DemandPredictor::new(DoubleScorer)
            .predict(&table, "Sales_History")
            .unwrap_err();
        assert_eq!(err, ForecastError::column_not_found("Sales_History"));
    }

    #[test]
    fn text_cells_in_feature_column_fail_with_shape() {
        let table = sales_table(&[1.0]);
        let err = DemandPredictor::new(DoubleScorer)
            .predict(&table, "Store")
            .unwrap_err();
        assert!(matches!(err, ForecastError::Shape(_)));
    }

    #[test]
    fn scorer_length_mismatch_is_rejected() {
        let table = sales_table(&[1.0, 2.0]);
        let err = DemandPredictor::new(TruncatingScorer)
            .predict(&table, "Past_Sales")
            .unwrap_err();
        assert!(matches!(err, ForecastError::Shape(_)));
    }

    #[test]
    fn empty_table_predicts_to_empty_table() {
        let table = sales_table(&[]);
        let predicted = DemandPredictor::new(DoubleScorer)
            .with_options(PredictorOptions { thresholds: true })
            .predict(&table, "Past_Sales")
            .unwrap();
        assert_eq!(predicted.row_count(), 0);
        assert_eq!(predicted.column_count(), 5);
    }

    proptest! {
        #[test]
        fn thresholds_match_floor_identities(sales in proptest::collection::vec(0.0f64..1e6, 0..50)) {
            let table = sales_table(&sales);
            let predicted = DemandPredictor::new(DoubleScorer)
                .predict(&table, "Past_Sales")
                .unwrap();

            prop_assert_eq!(predicted.row_count(), sales.len());
            for row in predicted.rows() {
                let pd = row[2].as_f64().unwrap();
                prop_assert_eq!(row[3].as_f64().unwrap(), (0.8 * pd).floor());
                prop_assert_eq!(row[4].as_f64().unwrap(), (1.2 * pd).floor());
            }
        }
    }
}

