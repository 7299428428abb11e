use crate::data::dataset::Dataset;
use crate::error::{Error, Result};
use crate::layers::dense::Layer;
use crate::loss::loss_type::LossType;
use crate::network::forward::forward_pass;
use crate::optim::sgd::Sgd;

/// Runs `epochs` full passes of online gradient descent over `dataset`,
/// mutating `layers` in place.
///
/// Samples are visited in dataset order, every epoch, with no shuffling.
/// Each sample's forward pass is followed by a backward sweep from the
/// output layer down; weights and biases are updated immediately as the
/// sweep walks them. The error signal entering a hidden layer is
/// accumulated while the layer above is processed, by dotting each
/// neuron's local derivative against its weight column.
///
/// Fails with `DivisionByZero` (MAE derivative where the prediction
/// equals the target) or `NumericInstability` (NaN gradient); both abort
/// the run mid-sample, with no further weight mutation.
///
/// # Panics
/// Panics if `layers` is empty.
pub fn train_epochs(
    layers: &mut [Layer],
    loss: LossType,
    dataset: &Dataset,
    optimizer: &Sgd,
    epochs: usize,
) -> Result<()> {
    assert!(!layers.is_empty(), "network must have at least one layer");

    let last = layers.len() - 1;
    let output_size = layers[last].size as f64;

    for _ in 0..epochs {
        for (x, y) in dataset.features.iter().zip(dataset.targets.iter()) {
            let trace = forward_pass(layers, x)?;

            // Error derivatives with respect to each layer's input
            // vector, filled in while the layer above it is processed.
            let mut input_errors: Vec<Vec<f64>> = vec![Vec::new(); layers.len()];

            for l in (0..layers.len()).rev() {
                let fan_in = layers[l].fan_in();
                input_errors[l] = vec![0.0; fan_in];

                for n in 0..layers[l].size {
                    let out = trace.outs[l][n];

                    // Averaged over the output neurons at the top of the
                    // network; inherited from the layer above elsewhere.
                    let d_activation = if l == last {
                        loss.derivative(y[n], out)? / output_size
                    } else {
                        input_errors[l + 1][n]
                    };
                    let d_input = layers[l].activation.derivative(out, trace.nets[l][n]);
                    let local = d_activation * d_input;

                    if local.is_nan() {
                        return Err(Error::NumericInstability { layer: l, neuron: n });
                    }

                    for i in 0..fan_in {
                        input_errors[l][i] += local * layers[l].weights.data[n][i];

                        let d_weight = if l == 0 { x[i] } else { trace.outs[l - 1][i] };
                        optimizer.step(&mut layers[l].weights.data[n][i], local * d_weight);
                        // The bias steps once per incoming synapse.
                        optimizer.step(&mut layers[l].biases[n], local);
                    }
                }
            }
        }
    }

    Ok(())
}
