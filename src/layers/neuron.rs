use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::layers::synapse::{NeuronRef, Synapse};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    /// Identity index within the owning layer. Aligns the neuron with its
    /// slot in input and ideal vectors.
    pub id: usize,
    pub synapses: Vec<Synapse>,
}

impl Neuron {
    pub fn new(id: usize) -> Neuron {
        Neuron { id, synapses: Vec::new() }
    }

    /// Connects this neuron to every neuron of the next layer.
    ///
    /// Weights are uniform in [-1, 1); biases and momentum start at zero.
    pub fn init_weights<R: Rng + ?Sized>(&mut self, next_layer: usize, next_layer_len: usize, rng: &mut R) {
        for index in 0..next_layer_len {
            let weight = rng.gen::<f64>() * 2.0 - 1.0;
            self.synapses.push(Synapse::new(NeuronRef::new(next_layer, index), weight, 0.0));
        }
    }

    /// Output-layer neurons own no synapses.
    pub fn is_terminal(&self) -> bool {
        self.synapses.is_empty()
    }
}
