pub mod activations;
pub mod error;
pub mod export;
pub mod network;
pub mod propagation;

pub use activations::Activations;
pub use error::NetError;
pub use export::{to_script_array, ExportVariant};
pub use network::Network;
