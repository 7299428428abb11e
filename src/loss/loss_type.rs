use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::mae::MaeLoss;
use crate::loss::mse::MseLoss;

/// Selects which loss function drives gradient computation.
///
/// - `Mse`          — Mean-squared error; pair with Linear output.
/// - `Mae`          — Mean-absolute error; pair with Linear output. Its
///                    derivative is undefined where prediction and target
///                    coincide.
/// - `CrossEntropy` — Binary cross-entropy; pair with Sigmoid output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    Mae,
    CrossEntropy,
}

impl LossType {
    /// Mean scalar loss for one sample — dispatches on the kind.
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            LossType::Mse => MseLoss::loss(predicted, expected),
            LossType::Mae => MaeLoss::loss(predicted, expected),
            LossType::CrossEntropy => CrossEntropyLoss::loss(predicted, expected),
        }
    }

    /// Error derivative with respect to a single output neuron.
    pub fn derivative(&self, expected: f64, out: f64) -> Result<f64> {
        match self {
            LossType::Mse => Ok(MseLoss::derivative(expected, out)),
            LossType::Mae => MaeLoss::derivative(expected, out),
            LossType::CrossEntropy => Ok(CrossEntropyLoss::derivative(expected, out)),
        }
    }
}
