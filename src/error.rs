//! Error types for the prediction engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("invalid strength multiplier {field} = {value}: must be finite and non-negative")]
    InvalidStrength { field: &'static str, value: f64 },

    #[error("invalid league baseline {field} = {value}: must be finite and non-negative")]
    InvalidBaseline { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, PredictionError>;
