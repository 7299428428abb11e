use corten_nn::{
    train_epochs, train_parallel, ActivationFunction, Dataset, Error, Layer, LossType, Matrix,
    Network, NetworkSpec, Normalization, Rescaling, Sgd, TrainConfig,
};

fn linear_spec() -> NetworkSpec {
    NetworkSpec::dense(2, &[1], &[ActivationFunction::Linear], LossType::Mse)
}

fn regression_dataset() -> Dataset {
    // Targets follow x1 + 2*x2.
    Dataset::new(
        vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        vec![vec![5.0], vec![4.0]],
    )
}

fn identity_layer(weights: Vec<Vec<f64>>) -> Layer {
    let size = weights.len();
    Layer {
        size,
        weights: Matrix::from_data(weights),
        biases: vec![0.0; size],
        activation: ActivationFunction::Linear,
    }
}

#[test]
fn single_linear_neuron_converges_to_the_least_squares_fit() {
    let mut network = Network::from_spec(&linear_spec());
    let dataset = regression_dataset();
    let optimizer = Sgd::new(0.01);

    train_epochs(&mut network.layers, network.loss, &dataset, &optimizer, 5000).unwrap();

    let first = network.forward(&[1.0, 2.0]).unwrap()[0];
    let second = network.forward(&[2.0, 1.0]).unwrap()[0];
    assert!((first - 5.0).abs() < 1e-2, "got {first}");
    assert!((second - 4.0).abs() < 1e-2, "got {second}");
}

#[test]
fn training_reduces_the_squared_error() {
    let mut network = Network::from_spec(&linear_spec());
    let dataset = regression_dataset();
    let optimizer = Sgd::new(0.01);

    let before = network.evaluate(&dataset.features, &dataset.targets).unwrap();
    train_epochs(&mut network.layers, network.loss, &dataset, &optimizer, 100).unwrap();
    let after = network.evaluate(&dataset.features, &dataset.targets).unwrap();

    assert!(after < before, "loss went from {before} to {after}");
}

#[test]
fn forward_is_deterministic() {
    let spec = NetworkSpec::dense(
        3,
        &[4, 2],
        &[ActivationFunction::Sigmoid, ActivationFunction::Tanh],
        LossType::Mse,
    );
    let network = Network::from_spec(&spec);
    let input = [0.3, -1.2, 0.7];

    assert_eq!(
        network.forward(&input).unwrap(),
        network.forward(&input).unwrap()
    );
}

#[test]
fn one_worker_run_matches_a_sequential_run() {
    let mut parallel = Network::from_spec(&linear_spec());
    let mut sequential = parallel.clone();
    let mut dataset = regression_dataset();
    let optimizer = Sgd::new(0.01);

    // A one-epoch budget forces a single worker regardless of core count.
    let config = TrainConfig::new(1);
    train_parallel(&mut parallel, &mut dataset, &optimizer, &config).unwrap();
    train_epochs(&mut sequential.layers, sequential.loss, &dataset, &optimizer, 1).unwrap();

    for (p, s) in parallel.layers.iter().zip(sequential.layers.iter()) {
        assert_eq!(p.weights.data, s.weights.data);
        assert_eq!(p.biases, s.biases);
    }
}

#[test]
fn mae_derivative_at_an_exact_prediction_halts_training() {
    let spec = NetworkSpec::dense(1, &[1], &[ActivationFunction::Linear], LossType::Mae);
    let mut network = Network::from_spec(&spec);
    network.import_model(vec![identity_layer(vec![vec![2.0]])]).unwrap();

    // weight 2, bias 0: the single sample is predicted exactly
    let dataset = Dataset::new(vec![vec![1.0]], vec![vec![2.0]]);
    let optimizer = Sgd::new(0.1);

    let err = train_epochs(&mut network.layers, network.loss, &dataset, &optimizer, 1).unwrap_err();
    assert!(matches!(err, Error::DivisionByZero { .. }));

    // the aborted step must not have touched the parameters
    assert_eq!(network.layers[0].weights.data, vec![vec![2.0]]);
    assert_eq!(network.layers[0].biases, vec![0.0]);
}

#[test]
fn nan_gradient_halts_with_numeric_instability() {
    let spec = NetworkSpec::dense(1, &[1], &[ActivationFunction::Linear], LossType::CrossEntropy);
    let mut network = Network::from_spec(&spec);
    network.import_model(vec![identity_layer(vec![vec![0.0]])]).unwrap();

    // output 0 against target 0 makes the cross-entropy derivative 0/0
    let dataset = Dataset::new(vec![vec![1.0]], vec![vec![0.0]]);
    let optimizer = Sgd::new(0.1);

    let err = train_epochs(&mut network.layers, network.loss, &dataset, &optimizer, 1).unwrap_err();
    match err {
        Error::NumericInstability { layer, neuron } => {
            assert_eq!(layer, 0);
            assert_eq!(neuron, 0);
        }
        other => panic!("expected NumericInstability, got {:?}", other),
    }
}

#[test]
fn mismatched_predict_input_reports_and_leaves_state_alone() {
    let network = Network::from_spec(&linear_spec());
    let snapshot = network.clone();

    let err = network.predict(&[1.0]).unwrap_err();
    match err {
        Error::DimensionMismatch { expected, got } => {
            assert_eq!(expected, 2);
            assert_eq!(got, 1);
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }

    for (a, b) in network.layers.iter().zip(snapshot.layers.iter()) {
        assert_eq!(a.weights.data, b.weights.data);
        assert_eq!(a.biases, b.biases);
    }
}

#[test]
fn rescaled_predictions_round_trip_through_the_scale_factor() {
    let mut network = Network::from_spec(&linear_spec());
    network.import_model(vec![identity_layer(vec![vec![1.0, 2.0]])]).unwrap();
    network.rescaling = Rescaling {
        active: true,
        log10_factor: 2,
    };

    // the input is divided by 100 before the forward pass and the
    // output multiplied back, so the affine map is preserved
    let out = network.predict(&[100.0, 200.0]).unwrap();
    assert!((out[0] - 500.0).abs() < 1e-9, "got {}", out[0]);
}

#[test]
fn auto_rescaling_is_recorded_on_the_network() {
    let mut network = Network::from_spec(&linear_spec());
    let mut dataset = Dataset::new(
        vec![vec![150.0, 20.0], vec![30.0, 40.0]],
        vec![vec![100.0], vec![50.0]],
    );
    let optimizer = Sgd::new(0.001);
    let config = TrainConfig::new(1).with_normalization(Normalization::AutoRescale);

    train_parallel(&mut network, &mut dataset, &optimizer, &config).unwrap();

    assert!(network.rescaling.active);
    assert_eq!(network.rescaling.log10_factor, 2);
    assert_eq!(dataset.features[0], vec![1.5, 0.2]);
    assert_eq!(dataset.targets, vec![vec![1.0], vec![0.5]]);
}

#[test]
fn model_json_round_trip_preserves_parameters() {
    let network = Network::from_spec(&linear_spec());
    let path = std::env::temp_dir().join("corten_nn_model.json");
    let path = path.to_str().unwrap();

    network.save_json(path).unwrap();
    let restored = Network::load_json(path).unwrap();

    assert_eq!(
        restored.layers[0].weights.data,
        network.layers[0].weights.data
    );
    assert_eq!(restored.layers[0].biases, network.layers[0].biases);
    assert_eq!(restored.loss, network.loss);
}

#[test]
fn evaluate_reports_the_mean_loss() {
    let mut network = Network::from_spec(&linear_spec());
    network.import_model(vec![identity_layer(vec![vec![1.0, 2.0]])]).unwrap();

    // prediction 3 against target 4 under MSE
    let loss = network
        .evaluate(&[vec![1.0, 1.0]], &[vec![4.0]])
        .unwrap();
    assert!((loss - 1.0).abs() < 1e-12, "got {loss}");
}
