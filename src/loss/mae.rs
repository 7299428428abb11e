use crate::error::{Error, Result};

pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|expected - predicted|)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(out, y)| (y - out).abs())
            .sum::<f64>() / n
    }

    /// Error derivative with respect to one output: (out - y) / |y - out|.
    /// Undefined where the prediction lands exactly on the target.
    pub fn derivative(y: f64, out: f64) -> Result<f64> {
        if out == y {
            return Err(Error::DivisionByZero { value: y });
        }
        Ok((out - y) / (y - out).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::MaeLoss;
    use crate::error::Error;

    #[test]
    fn derivative_is_the_sign_of_the_residual() {
        assert_eq!(MaeLoss::derivative(1.0, 3.0).unwrap(), 1.0);
        assert_eq!(MaeLoss::derivative(3.0, 1.0).unwrap(), -1.0);
    }

    #[test]
    fn exact_prediction_is_a_division_by_zero() {
        let err = MaeLoss::derivative(2.0, 2.0).unwrap_err();
        assert!(matches!(err, Error::DivisionByZero { .. }));
    }
}
