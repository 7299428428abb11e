use corten_nn::{train_epochs, ActivationFunction, Dataset, LossType, Network, NetworkSpec, Sgd};

fn main() -> Result<(), corten_nn::Error> {
    env_logger::init();

    let spec = NetworkSpec::dense(
        2,
        &[2, 1],
        &[ActivationFunction::Sigmoid, ActivationFunction::Sigmoid],
        LossType::CrossEntropy,
    );
    let mut network = Network::from_spec(&spec);

    let dataset = Dataset::new(
        vec![
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ],
        vec![vec![1.0], vec![0.0], vec![1.0], vec![0.0]],
    );

    let optimizer = Sgd::new(0.5);

    for epoch in 0..10_000 {
        train_epochs(&mut network.layers, network.loss, &dataset, &optimizer, 1)?;
        if epoch % 1000 == 0 {
            let loss = network.evaluate(&dataset.features, &dataset.targets)?;
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    for input in &dataset.features {
        println!("Input: {:?} -> Output: {:.4}", input, network.forward(input)?[0]);
    }

    Ok(())
}
