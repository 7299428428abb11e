pub mod forward;
pub mod network;
pub mod spec;

pub use forward::{forward_pass, ForwardTrace};
pub use network::Network;
pub use spec::{LayerSpec, NetworkSpec};
