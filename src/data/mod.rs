pub mod csv;
pub mod dataset;
pub mod normalize;

pub use csv::load_csv;
pub use dataset::Dataset;
pub use normalize::{Normalization, Rescaling};
