use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};

/// One dense layer: a `size × fan_in` weight matrix, one bias per
/// neuron, and the activation applied to every pre-activation sum.
/// Carries no per-pass state, so training workers can clone a layer
/// vector and own it outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Vec<f64>,
    pub activation: ActivationFunction,
}

impl Layer {
    /// Allocates a layer with weights and biases uniform in [-1, 1].
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        let weights = Matrix::random(size, input_size);
        let mut rng = rand::thread_rng();
        let biases = (0..size).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();

        Layer {
            size,
            weights,
            biases,
            activation,
        }
    }

    /// Number of inputs each neuron of this layer consumes.
    pub fn fan_in(&self) -> usize {
        self.weights.cols
    }

    /// Computes this layer's pre-activation sums and activations for one
    /// input vector. Returns `(net, out)`.
    pub fn forward(&self, input: &[f64]) -> (Vec<f64>, Vec<f64>) {
        debug_assert_eq!(input.len(), self.fan_in());

        let mut net = vec![0.0; self.size];
        for (n, row) in self.weights.data.iter().enumerate() {
            let mut sum = 0.0;
            for (w, x) in row.iter().zip(input.iter()) {
                sum += w * x;
            }
            net[n] = sum + self.biases[n];
        }

        let out = net.iter().map(|&z| self.activation.function(z)).collect();
        (net, out)
    }
}
