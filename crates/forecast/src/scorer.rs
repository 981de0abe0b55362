//! The scoring seam: an opaque, pre-fitted regression model.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockcast_core::{ForecastError, ForecastResult};

/// A pre-trained scoring function.
///
/// Implementations must be pure: same input, same output, no hidden state
/// across calls. That is what makes a loaded model safe to share read-only
/// across concurrent requests.
pub trait Scorer: Send + Sync + 'static {
    /// Score one feature column; the output has the same length as the input.
    fn score(&self, feature: &[f64]) -> ForecastResult<Vec<f64>>;
}

impl<S: Scorer + ?Sized> Scorer for Arc<S> {
    fn score(&self, feature: &[f64]) -> ForecastResult<Vec<f64>> {
        (**self).score(feature)
    }
}

/// On-disk model artifact: a fitted single-feature linear regression.
///
/// `feature_name` is advisory metadata from training; the caller picks the
/// actual column per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub intercept: f64,
    pub coefficient: f64,
    #[serde(default)]
    pub feature_name: Option<String>,
}

/// Production [`Scorer`]: `y = intercept + coefficient * x`.
///
/// Loaded once at process start and treated as immutable for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScorer {
    intercept: f64,
    coefficient: f64,
}

impl LinearScorer {
    pub fn new(intercept: f64, coefficient: f64) -> ForecastResult<Self> {
        if !intercept.is_finite() || !coefficient.is_finite() {
            return Err(ForecastError::model_load(format!(
                "non-finite model parameters (intercept={intercept}, coefficient={coefficient})"
            )));
        }
        Ok(Self {
            intercept,
            coefficient,
        })
    }

    pub fn from_artifact(artifact: &ModelArtifact) -> ForecastResult<Self> {
        Self::new(artifact.intercept, artifact.coefficient)
    }

    /// Load the artifact from a JSON file. Missing or corrupt files are
    /// `ModelLoad` errors; callers treat them as fatal at startup.
    pub fn from_path(path: &Path) -> ForecastResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            ForecastError::model_load(format!("{}: {}", path.display(), e))
        })?;
        let artifact: ModelArtifact = serde_json::from_slice(&bytes).map_err(|e| {
            ForecastError::model_load(format!("{}: {}", path.display(), e))
        })?;

        let scorer = Self::from_artifact(&artifact)?;
        tracing::info!(
            path = %path.display(),
            intercept = scorer.intercept,
            coefficient = scorer.coefficient,
            feature_name = artifact.feature_name.as_deref().unwrap_or("<unset>"),
            "loaded model artifact"
        );
        Ok(scorer)
    }
}

impl Scorer for LinearScorer {
    fn score(&self, feature: &[f64]) -> ForecastResult<Vec<f64>> {
        for (idx, x) in feature.iter().enumerate() {
            if !x.is_finite() {
                return Err(ForecastError::shape(format!(
                    "non-finite feature value at row {}",
                    idx + 1
                )));
            }
        }
        Ok(feature
            .iter()
            .map(|x| self.intercept + self.coefficient * x)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn linear_scorer_applies_fit() {
        let scorer = LinearScorer::new(1.0, 2.0).unwrap();
        assert_eq!(scorer.score(&[0.0, 3.0]).unwrap(), vec![1.0, 7.0]);
    }

    #[test]
    fn empty_input_scores_to_empty_output() {
        let scorer = LinearScorer::new(0.0, 1.0).unwrap();
        assert!(scorer.score(&[]).unwrap().is_empty());
    }

    #[test]
    fn non_finite_feature_is_a_shape_error() {
        let scorer = LinearScorer::new(0.0, 1.0).unwrap();
        let err = scorer.score(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, ForecastError::Shape(_)));
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        let err = LinearScorer::new(f64::INFINITY, 1.0).unwrap_err();
        assert!(matches!(err, ForecastError::ModelLoad(_)));
    }

    #[test]
    fn from_path_loads_json_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"intercept": 2.5, "coefficient": 1.5, "feature_name": "Past_Sales"}}"#
        )
        .unwrap();

        let scorer = LinearScorer::from_path(file.path()).unwrap();
        assert_eq!(scorer.score(&[2.0]).unwrap(), vec![5.5]);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = LinearScorer::from_path(Path::new("no/such/model.json")).unwrap_err();
        assert!(matches!(err, ForecastError::ModelLoad(_)));
    }

    #[test]
    fn from_path_reports_corrupt_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = LinearScorer::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ForecastError::ModelLoad(_)));
    }
}

