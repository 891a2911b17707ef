use serde::{Serialize, Deserialize};

/// Position of a neuron inside a network: `(layer, index)`.
///
/// Synapses hold one of these instead of a reference so the graph can be
/// rebuilt from plain data and rewired positionally with `Network::recreate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NeuronRef {
    pub layer: usize,
    pub index: usize,
}

impl NeuronRef {
    pub fn new(layer: usize, index: usize) -> NeuronRef {
        NeuronRef { layer, index }
    }
}

/// A weighted, biased connection to one neuron of the next layer.
///
/// The bias lives on the connection rather than on the target neuron: a
/// neuron's net input receives one bias term per incoming synapse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synapse {
    /// Not part of a snapshot; restored by `Network::recreate`.
    #[serde(skip)]
    pub target: NeuronRef,
    pub weight: f64,
    /// Last applied weight change, kept for the momentum term.
    pub last_delta_weight: f64,
    pub bias: f64,
}

impl Synapse {
    pub fn new(target: NeuronRef, weight: f64, bias: f64) -> Synapse {
        Synapse {
            target,
            weight,
            last_delta_weight: 0.0,
            bias,
        }
    }
}
