use std::fmt;

use serde::{Serialize, Deserialize};

use crate::data::normalize::Rescaling;
use crate::error::{Error, Result};
use crate::layers::dense::Layer;
use crate::loss::loss_type::LossType;
use crate::network::forward::{forward_pass, ForwardTrace};
use crate::network::spec::NetworkSpec;

/// The trainable state: ordered layers, the loss driving gradient
/// computation, and the rescaling applied to the training data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
    pub loss: LossType,
    #[serde(default)]
    pub rescaling: Rescaling,
}

impl Network {
    /// Allocates a network from its spec, every weight and bias uniform
    /// in [-1, 1].
    pub fn from_spec(spec: &NetworkSpec) -> Network {
        let layers = spec.layers.iter()
            .map(|l| Layer::new(l.size, l.input_size, l.activation))
            .collect();

        Network {
            layers,
            loss: spec.loss,
            rescaling: Rescaling::default(),
        }
    }

    /// Width of the input vector this network expects.
    pub fn input_size(&self) -> usize {
        self.layers.first().map(Layer::fan_in).unwrap_or(0)
    }

    /// Number of output neurons.
    pub fn output_size(&self) -> usize {
        self.layers.last().map(|l| l.size).unwrap_or(0)
    }

    /// Forward pass returning the full per-layer trace.
    pub fn forward_trace(&self, input: &[f64]) -> Result<ForwardTrace> {
        forward_pass(&self.layers, input)
    }

    /// Forward pass returning only the output activations.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        let trace = self.forward_trace(input)?;
        Ok(trace.output().to_vec())
    }

    /// Produces a prediction, undoing any training-time rescaling: the
    /// input is divided by the rescaling factor before the forward pass
    /// and the output multiplied back by it.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        if !self.rescaling.active {
            return self.forward(input);
        }

        let factor = self.rescaling.factor();
        let scaled: Vec<f64> = input.iter().map(|x| x / factor).collect();
        let mut out = self.forward(&scaled)?;
        for value in &mut out {
            *value *= factor;
        }
        Ok(out)
    }

    /// Mean loss of `predict` over a held-out set.
    ///
    /// # Panics
    /// Panics if the two sides differ in length or are empty.
    pub fn evaluate(&self, features: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
        assert_eq!(features.len(), targets.len(), "features and targets must have equal length");
        assert!(!features.is_empty(), "evaluation set must not be empty");

        let mut total = 0.0;
        for (x, y) in features.iter().zip(targets.iter()) {
            let out = self.predict(x)?;
            log::debug!("evaluate: target {:?}, predicted {:?}", y, out);
            total += self.loss.loss(&out, y);
        }
        Ok(total / features.len() as f64)
    }

    /// Replaces the trained parameters wholesale. The replacement must
    /// match the current topology layer for layer.
    pub fn import_model(&mut self, layers: Vec<Layer>) -> Result<()> {
        if layers.len() != self.layers.len() {
            return Err(Error::DimensionMismatch {
                expected: self.layers.len(),
                got: layers.len(),
            });
        }
        for (current, imported) in self.layers.iter().zip(layers.iter()) {
            if imported.size != current.size || imported.fan_in() != current.fan_in() {
                return Err(Error::DimensionMismatch {
                    expected: current.fan_in(),
                    got: imported.fan_in(),
                });
            }
        }

        self.layers = layers;
        Ok(())
    }

    /// Serializes the network (weights, biases, rescaling state) to a
    /// pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: usize = self.layers.iter().map(|l| l.size).sum();
        let synapses: usize = self.layers.iter().map(|l| l.size * l.fan_in()).sum();

        writeln!(f, "Neural network")?;
        writeln!(f, "layers: {}", self.layers.len())?;
        writeln!(f, "neurons: {}", neurons)?;
        write!(f, "synapses: {}", synapses)
    }
}
