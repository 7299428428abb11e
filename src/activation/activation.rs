use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Per-layer nonlinearity applied element-wise to each pre-activation sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Linear,
    Sigmoid,
    Tanh,
    ReLU,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => x,
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Element-wise derivative. Sigmoid differentiates through the
    /// activation output `out`; tanh and relu through the pre-activation
    /// sum `net`.
    pub fn derivative(&self, out: f64, net: f64) -> f64 {
        match self {
            ActivationFunction::Linear => 1.0,
            ActivationFunction::Sigmoid => out * (1.0 - out),
            ActivationFunction::Tanh => 1.0 - net.tanh().powi(2),
            ActivationFunction::ReLU => if net > 0.0 { 1.0 } else { 0.0 },
        }
    }
}
