use corten_nn::{
    train_parallel, ActivationFunction, Dataset, LossType, Network, NetworkSpec, Sgd, TrainConfig,
};

fn main() -> Result<(), corten_nn::Error> {
    env_logger::init();

    let spec = NetworkSpec::dense(2, &[1], &[ActivationFunction::Linear], LossType::Mse);
    let mut network = Network::from_spec(&spec);

    // Targets follow x1 + 2*x2.
    let mut dataset = Dataset::new(
        vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        vec![vec![5.0], vec![4.0]],
    );

    let optimizer = Sgd::new(0.01);
    let config = TrainConfig::new(1000);

    let report = train_parallel(&mut network, &mut dataset, &optimizer, &config)?;
    println!("{}", network);
    println!(
        "trained on {} worker(s), {} epoch(s) each",
        report.workers, report.epochs_per_worker
    );

    for features in [[1.0, 2.0], [2.0, 1.0], [3.0, 3.0]] {
        let prediction = network.predict(&features)?;
        println!("{:?} -> {:.3}", features, prediction[0]);
    }

    Ok(())
}
