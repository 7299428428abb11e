pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::forward::{forward_pass, ForwardTrace};
pub use network::network::Network;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use loss::loss_type::LossType;
pub use optim::sgd::Sgd;
pub use data::csv::load_csv;
pub use data::dataset::Dataset;
pub use data::normalize::{Normalization, Rescaling};
pub use train::loop_fn::train_epochs;
pub use train::report::{format_elapsed, TrainReport};
pub use train::train_config::TrainConfig;
pub use train::trainer::train_parallel;
pub use error::{Error, Result};
