pub mod loop_fn;
pub mod report;
pub mod train_config;
pub mod trainer;

pub use loop_fn::train_epochs;
pub use report::{format_elapsed, TrainReport};
pub use train_config::TrainConfig;
pub use trainer::train_parallel;
