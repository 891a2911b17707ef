use serde::{Serialize, Deserialize};

use crate::layers::neuron::Neuron;

/// An ordered group of neurons. Position in `neurons` equals each neuron's id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new(size: usize) -> Layer {
        Layer {
            neurons: (0..size).map(Neuron::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn synapse_count(&self) -> usize {
        self.neurons.iter().map(|n| n.synapses.len()).sum()
    }
}
