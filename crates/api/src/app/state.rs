use std::sync::Arc;

use stockcast_forecast::{DemandPredictor, Scorer};

/// Shared per-process state: the loaded, read-only scorer.
pub struct AppState {
    scorer: Arc<dyn Scorer>,
}

impl AppState {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    /// A predictor for one request, with per-request threshold choice.
    pub fn predictor(&self, thresholds: bool) -> DemandPredictor<Arc<dyn Scorer>> {
        DemandPredictor::new(self.scorer.clone()).with_thresholds(thresholds)
    }
}

