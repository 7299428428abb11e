use std::thread;
use std::time::Instant;

use log::{debug, info};

use crate::data::dataset::Dataset;
use crate::data::normalize;
use crate::error::{Error, Result};
use crate::layers::dense::Layer;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::loop_fn::train_epochs;
use crate::train::report::{format_elapsed, TrainReport};
use crate::train::train_config::TrainConfig;

/// Trains `network` on `dataset`, spreading the epoch budget across
/// worker threads.
///
/// Every worker receives a deep copy of the current layers and runs
/// `ceil(epochs / workers)` epochs of online gradient descent over the
/// complete dataset, independently and without synchronization. Once all
/// workers have joined, the replicas are merged by arithmetic mean; only
/// then do the merged parameters replace the network's. A failed run
/// leaves the network untouched.
///
/// The normalization policy in `config` is applied to `dataset` in place
/// before the first step; with `AutoRescale` the resulting state is
/// recorded on the network so `predict` can undo it.
///
/// # Panics
/// Panics if `dataset` is empty or a worker thread panics.
pub fn train_parallel(
    network: &mut Network,
    dataset: &mut Dataset,
    optimizer: &Sgd,
    config: &TrainConfig,
) -> Result<TrainReport> {
    assert!(!dataset.is_empty(), "dataset must not be empty");
    assert!(config.epochs > 0, "epochs must be at least 1");

    check_dimensions(network, dataset)?;

    let rescaling = normalize::apply(config.normalization, dataset);
    if rescaling.active {
        network.rescaling = rescaling;
    }

    let available = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    let workers = if config.epochs >= available { available } else { 1 };
    let epochs_per_worker = config.epochs.div_ceil(workers);

    info!(
        "workload distributed on {} worker(s), {} epoch(s) each",
        workers, epochs_per_worker
    );

    let start = Instant::now();
    let dataset: &Dataset = dataset;

    let results: Vec<Result<Vec<Layer>>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|id| {
                let mut layers = network.layers.clone();
                let loss = network.loss;
                scope.spawn(move || -> Result<Vec<Layer>> {
                    debug!("worker {}: {} epoch(s) assigned", id, epochs_per_worker);
                    train_epochs(&mut layers, loss, dataset, optimizer, epochs_per_worker)?;
                    Ok(layers)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("training worker panicked"))
            .collect()
    });

    let replicas = results.into_iter().collect::<Result<Vec<_>>>()?;
    network.layers = average_replicas(replicas);

    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!("training complete [elapsed {}]", format_elapsed(elapsed_ms));

    Ok(TrainReport {
        workers,
        epochs_per_worker,
        elapsed_ms,
    })
}

fn check_dimensions(network: &Network, dataset: &Dataset) -> Result<()> {
    if dataset.input_size() != network.input_size() {
        return Err(Error::DimensionMismatch {
            expected: network.input_size(),
            got: dataset.input_size(),
        });
    }
    if dataset.output_size() != network.output_size() {
        return Err(Error::DimensionMismatch {
            expected: network.output_size(),
            got: dataset.output_size(),
        });
    }
    Ok(())
}

/// Arithmetic mean of every weight and bias across the replicas.
fn average_replicas(mut replicas: Vec<Vec<Layer>>) -> Vec<Layer> {
    let count = replicas.len() as f64;

    let mut merged = replicas.remove(0);
    for layer in &mut merged {
        layer.weights = layer.weights.map(|w| w / count);
        for bias in &mut layer.biases {
            *bias /= count;
        }
    }

    for replica in replicas {
        for (acc, layer) in merged.iter_mut().zip(replica) {
            acc.weights = acc.weights.clone() + layer.weights.map(|w| w / count);
            for (bias, b) in acc.biases.iter_mut().zip(layer.biases) {
                *bias += b / count;
            }
        }
    }

    merged
}
