pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;

// Convenience re-exports
pub use activation::activation::Sigmoid;
pub use layers::{dense::Layer, neuron::Neuron, synapse::{NeuronRef, Synapse}};
pub use network::{network::Network, error::NetError, activations::Activations};
pub use network::export::{to_script_array, ExportVariant};
pub use optim::sgd::Sgd;
pub use train::{train_loop, train_epoch, EpochStats, TrainConfig, TrainOutcome};
pub use data::boolean::BooleanFunction;
