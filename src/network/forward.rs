use crate::error::{Error, Result};
use crate::layers::dense::Layer;

/// Layer-by-layer record of one forward pass: pre-activation sums and
/// activations for every layer, in order. The last entry of `outs` is
/// the network output; the backward pass consumes the rest.
#[derive(Debug, Clone)]
pub struct ForwardTrace {
    pub nets: Vec<Vec<f64>>,
    pub outs: Vec<Vec<f64>>,
}

impl ForwardTrace {
    /// The final layer's activations.
    pub fn output(&self) -> &[f64] {
        self.outs.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Runs `input` through `layers`, recording every intermediate vector.
///
/// Fails with `DimensionMismatch` before touching any layer when the
/// input width disagrees with the first layer's fan-in; there is no
/// partial result.
pub fn forward_pass(layers: &[Layer], input: &[f64]) -> Result<ForwardTrace> {
    let expected = layers.first().map(Layer::fan_in).unwrap_or(0);
    if input.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            got: input.len(),
        });
    }

    let mut nets: Vec<Vec<f64>> = Vec::with_capacity(layers.len());
    let mut outs: Vec<Vec<f64>> = Vec::with_capacity(layers.len());

    for (l, layer) in layers.iter().enumerate() {
        let x = if l == 0 { input } else { outs[l - 1].as_slice() };
        let (net, out) = layer.forward(x);
        nets.push(net);
        outs.push(out);
    }

    Ok(ForwardTrace { nets, outs })
}
