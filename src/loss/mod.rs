pub mod cross_entropy;
pub mod loss_type;
pub mod mae;
pub mod mse;

pub use cross_entropy::CrossEntropyLoss;
pub use loss_type::LossType;
pub use mae::MaeLoss;
pub use mse::MseLoss;
