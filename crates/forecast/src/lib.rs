//! `stockcast-forecast`
//!
//! **Responsibility:** the scoring/prediction boundary.
//!
//! This crate is deliberately small and pure:
//! - It must not perform I/O beyond loading the model artifact once.
//! - It must not mutate caller state; prediction returns a new table.
//! - The model stays opaque behind the [`Scorer`] trait, so tests (and any
//!   future artifact format) substitute their own implementation.

pub mod predictor;
pub mod scorer;

pub use predictor::{
    DemandPredictor, PredictorOptions, PREDICTED_DEMAND, RECOMMENDED_STOCK, REORDER_POINT,
};
pub use scorer::{LinearScorer, ModelArtifact, Scorer};

