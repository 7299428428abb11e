use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::loss::loss_type::LossType;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `size`       — number of neurons in this layer
/// - `input_size` — width of the vector feeding this layer (the previous
///                  layer's `size`, or the raw feature count for the
///                  first layer)
/// - `activation` — activation function applied after the affine sum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub input_size: usize,
    pub activation: ActivationFunction,
}

/// A fully serializable description of a network architecture plus the
/// loss the training loop pairs with it. Can be saved and loaded
/// independently of trained weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    /// Loss function to pair with this network during training.
    pub loss: LossType,
}

impl NetworkSpec {
    /// Builds a spec from an input width and ordered layer sizes,
    /// chaining each layer's `input_size` to the previous layer's `size`.
    ///
    /// # Panics
    /// Panics if `sizes` is empty or `sizes` and `activations` differ in
    /// length.
    pub fn dense(
        input_size: usize,
        sizes: &[usize],
        activations: &[ActivationFunction],
        loss: LossType,
    ) -> NetworkSpec {
        assert!(!sizes.is_empty(), "a network needs at least one layer");
        assert_eq!(sizes.len(), activations.len(), "one activation per layer");

        let mut prev = input_size;
        let layers = sizes.iter().zip(activations.iter())
            .map(|(&size, &activation)| {
                let layer = LayerSpec { size, input_size: prev, activation };
                prev = size;
                layer
            })
            .collect();

        NetworkSpec { layers, loss }
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
