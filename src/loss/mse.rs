pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((expected - predicted)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(out, y)| (y - out).powi(2))
            .sum::<f64>() / n
    }

    /// Error derivative with respect to one output: -2(y - out)
    pub fn derivative(y: f64, out: f64) -> f64 {
        -2.0 * (y - out)
    }
}
