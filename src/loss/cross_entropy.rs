/// Binary cross-entropy; pair with a Sigmoid output layer so predictions
/// stay inside (0, 1).
pub struct CrossEntropyLoss;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// Scalar loss: -mean(y·ln(p+ε) + (1-y)·ln(1-p+ε))
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| -(y * (p + EPS).ln() + (1.0 - y) * (1.0 - p + EPS).ln()))
            .sum::<f64>() / n
    }

    /// Error derivative with respect to one output:
    /// -(y/out - (1-y)/(1-out))
    pub fn derivative(y: f64, out: f64) -> f64 {
        -(y / out - (1.0 - y) / (1.0 - out))
    }
}
