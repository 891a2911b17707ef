pub mod dense;
pub mod neuron;
pub mod synapse;

pub use dense::Layer;
pub use neuron::Neuron;
pub use synapse::{NeuronRef, Synapse};
