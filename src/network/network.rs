use rand::Rng;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::layers::{dense::Layer, synapse::NeuronRef};
use crate::network::activations::Activations;
use crate::network::error::NetError;
use crate::network::propagation::forward_pass;
use crate::train::{loop_fn::{train_loop, TrainOutcome}, train_config::TrainConfig};

/// A fully connected feedforward network. The first layer takes clamped
/// inputs, the last one produces the outputs.
///
/// Deserialising a `Network` goes through `from_layers`, so the result is
/// always wired.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LayerSnapshot")]
pub struct Network {
    pub layers: Vec<Layer>,
}

#[derive(Deserialize)]
struct LayerSnapshot {
    layers: Vec<Layer>,
}

impl TryFrom<LayerSnapshot> for Network {
    type Error = NetError;

    fn try_from(snapshot: LayerSnapshot) -> Result<Network, NetError> {
        Network::from_layers(snapshot.layers)
    }
}

impl Network {
    /// Builds a network with one layer per entry of `layer_sizes`, drawing
    /// weights from the thread-local RNG.
    pub fn create(layer_sizes: &[usize]) -> Result<Network, NetError> {
        Network::create_with_rng(layer_sizes, &mut rand::thread_rng())
    }

    /// Same as `create` with a caller-supplied RNG, for reproducible weights.
    ///
    /// Zero-sized layers are accepted; they simply own or receive no synapses.
    pub fn create_with_rng<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Network, NetError> {
        if layer_sizes.len() < 2 {
            return Err(NetError::InvalidTopology(format!(
                "need at least an input and an output layer, got {} layer(s)",
                layer_sizes.len()
            )));
        }

        let mut layers: Vec<Layer> = layer_sizes.iter().map(|&size| Layer::new(size)).collect();
        for l in 0..layers.len() - 1 {
            let next_len = layers[l + 1].len();
            for neuron in &mut layers[l].neurons {
                neuron.init_weights(l + 1, next_len, rng);
            }
        }

        let network = Network { layers };
        debug!(sizes = ?layer_sizes, synapses = network.synapse_count(), "created network");
        Ok(network)
    }

    /// Assembles a network from layers whose synapse targets may be stale,
    /// e.g. layers restored from a snapshot, and rewires them.
    ///
    /// The layers must already describe a fully connected network: every
    /// non-final neuron owns exactly one synapse per neuron of the next layer,
    /// final neurons own none, and each neuron's id equals its position.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network, NetError> {
        if layers.len() < 2 {
            return Err(NetError::InvalidTopology(format!(
                "need at least an input and an output layer, got {} layer(s)",
                layers.len()
            )));
        }

        for (l, layer) in layers.iter().enumerate() {
            let expected = layers.get(l + 1).map_or(0, Layer::len);
            for (i, neuron) in layer.neurons.iter().enumerate() {
                if neuron.id != i {
                    return Err(NetError::InvalidTopology(format!(
                        "neuron at layer {l} position {i} carries id {}",
                        neuron.id
                    )));
                }
                if neuron.synapses.len() != expected {
                    return Err(NetError::InvalidTopology(format!(
                        "neuron {i} of layer {l} has {} synapses, expected {expected}",
                        neuron.synapses.len()
                    )));
                }
            }
        }

        let mut network = Network { layers };
        network.recreate();
        Ok(network)
    }

    /// Points synapse `j` of every neuron in layer `l` at neuron `j` of
    /// layer `l + 1`.
    pub fn recreate(&mut self) {
        for l in 0..self.layers.len().saturating_sub(1) {
            for neuron in &mut self.layers[l].neurons {
                for (j, synapse) in neuron.synapses.iter_mut().enumerate() {
                    synapse.target = NeuronRef::new(l + 1, j);
                }
            }
        }
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::len).collect()
    }

    pub fn input_len(&self) -> usize {
        self.layers.first().map_or(0, Layer::len)
    }

    pub fn output_len(&self) -> usize {
        self.layers.last().map_or(0, Layer::len)
    }

    pub fn synapse_count(&self) -> usize {
        self.layers.iter().map(Layer::synapse_count).sum()
    }

    /// Clamps `input` onto the input layer and runs one forward pass,
    /// returning the scratch state with every neuron's output.
    pub fn activate(&self, input: &[f64]) -> Result<Activations, NetError> {
        let mut activations = Activations::clamp(self, input)?;
        forward_pass(self, &mut activations);
        Ok(activations)
    }

    /// Inference: output-layer values, aligned by neuron id. Weights are not
    /// touched.
    pub fn run(&self, input: &[f64]) -> Result<Vec<f64>, NetError> {
        let activations = self.activate(input)?;
        Ok(self.outputs(&activations))
    }

    /// Trains on `inputs`/`ideals` until the mean error drops below
    /// `config.target_error` or `config.max_epochs` is reached.
    pub fn train(&mut self, inputs: &[Vec<f64>], ideals: &[Vec<f64>], config: &TrainConfig) -> Result<TrainOutcome, NetError> {
        train_loop(self, inputs, ideals, config)
    }

    pub(crate) fn outputs(&self, activations: &Activations) -> Vec<f64> {
        let last = self.layers.len() - 1;
        let mut outputs = vec![0.0; self.output_len()];
        for (i, neuron) in self.layers[last].neurons.iter().enumerate() {
            outputs[neuron.id] = activations.output(NeuronRef::new(last, i));
        }
        outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn create_builds_requested_shape() {
        let network = Network::create(&[3, 5, 2, 4]).unwrap();

        assert_eq!(network.layer_sizes(), vec![3, 5, 2, 4]);
        assert_eq!(network.input_len(), 3);
        assert_eq!(network.output_len(), 4);
        for l in 0..3 {
            let next = network.layers[l + 1].len();
            for neuron in &network.layers[l].neurons {
                assert_eq!(neuron.synapses.len(), next);
            }
        }
        assert!(network.layers[3].neurons.iter().all(|n| n.synapses.is_empty()));
        assert_eq!(network.synapse_count(), 3 * 5 + 5 * 2 + 2 * 4);
    }

    #[test]
    fn create_assigns_ids_by_position() {
        let network = Network::create(&[2, 3]).unwrap();
        for layer in &network.layers {
            for (i, neuron) in layer.neurons.iter().enumerate() {
                assert_eq!(neuron.id, i);
            }
        }
    }

    #[test]
    fn create_rejects_single_layer() {
        assert!(matches!(Network::create(&[4]), Err(NetError::InvalidTopology(_))));
        assert!(matches!(Network::create(&[]), Err(NetError::InvalidTopology(_))));
    }

    #[test]
    fn zero_sized_layers_are_legal() {
        let network = Network::create(&[2, 0, 1]).unwrap();
        assert_eq!(network.synapse_count(), 0);
        assert_eq!(network.run(&[1.0, 1.0]).unwrap().len(), 1);
    }

    #[test]
    fn seeded_creation_is_reproducible() {
        let a = Network::create_with_rng(&[2, 2, 1], &mut StdRng::seed_from_u64(3)).unwrap();
        let b = Network::create_with_rng(&[2, 2, 1], &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.run(&[1.0, 0.0]).unwrap(), b.run(&[1.0, 0.0]).unwrap());
    }

    #[test]
    fn run_checks_input_length() {
        let network = Network::create(&[2, 1]).unwrap();
        assert_eq!(
            network.run(&[1.0]),
            Err(NetError::DimensionMismatch { what: "input vector", expected: 2, actual: 1 })
        );
    }

    #[test]
    fn run_is_repeatable() {
        let network = Network::create(&[2, 3, 2]).unwrap();
        let first = network.run(&[0.3, 0.9]).unwrap();
        let second = network.run(&[0.3, 0.9]).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().all(|&y| y > 0.0 && y < 1.0));
    }

    #[test]
    fn recreate_restores_positional_wiring() {
        let mut network = Network::create(&[3, 4, 2]).unwrap();
        for layer in &mut network.layers {
            for neuron in &mut layer.neurons {
                for synapse in &mut neuron.synapses {
                    synapse.target = NeuronRef::default();
                }
            }
        }

        network.recreate();

        for (l, layer) in network.layers.iter().enumerate() {
            for neuron in &layer.neurons {
                for (j, synapse) in neuron.synapses.iter().enumerate() {
                    assert_eq!(synapse.target, NeuronRef::new(l + 1, j));
                }
            }
        }
    }

    #[test]
    fn from_layers_rejects_partial_wiring() {
        let mut network = Network::create(&[2, 2, 1]).unwrap();
        network.layers[1].neurons[0].synapses.clear();
        assert!(matches!(Network::from_layers(network.layers), Err(NetError::InvalidTopology(_))));
    }

    #[test]
    fn snapshot_round_trip_rewires_and_keeps_weights() {
        let network = Network::create(&[2, 3, 1]).unwrap();
        let json = serde_json::to_string(&network).unwrap();
        assert!(!json.contains("target"));

        let restored: Network = serde_json::from_str(&json).unwrap();
        for (l, layer) in restored.layers.iter().enumerate() {
            for neuron in &layer.neurons {
                for (j, synapse) in neuron.synapses.iter().enumerate() {
                    assert_eq!(synapse.target, NeuronRef::new(l + 1, j));
                }
            }
        }
        assert_relative_eq!(
            network.run(&[1.0, 0.0]).unwrap()[0],
            restored.run(&[1.0, 0.0]).unwrap()[0],
            epsilon = 1e-12
        );
    }
}
