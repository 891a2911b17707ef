use crate::activation::activation::Sigmoid;
use crate::layers::synapse::NeuronRef;
use crate::network::error::NetError;
use crate::network::network::Network;

/// Per-call scratch state for one forward/backward pass.
///
/// Holds the values clamped onto the input layer and the net input
/// accumulated by every neuron. The network itself only stores topology and
/// weights, so several `Activations` can exist for the same network.
#[derive(Debug, Clone)]
pub struct Activations {
    forced: Vec<f64>,
    inputs: Vec<Vec<f64>>,
}

impl Activations {
    /// Clamps `input` onto the input layer, aligned by neuron id.
    /// Accumulators start at zero; call `forward_pass` to fill them.
    pub fn clamp(network: &Network, input: &[f64]) -> Result<Activations, NetError> {
        NetError::check_len("input vector", network.input_len(), input.len())?;

        let forced = network.layers[0].neurons.iter()
            .map(|neuron| input[neuron.id])
            .collect();
        let inputs = network.layers.iter()
            .map(|layer| vec![0.0; layer.len()])
            .collect();

        Ok(Activations { forced, inputs })
    }

    /// Forced value for input neurons, sigmoid of the accumulated input for
    /// everything else.
    pub fn output(&self, at: NeuronRef) -> f64 {
        if at.layer == 0 {
            self.forced[at.index]
        } else {
            Sigmoid::function(self.inputs[at.layer][at.index])
        }
    }

    /// Accumulated (pre-activation) input of a neuron.
    pub fn input(&self, at: NeuronRef) -> f64 {
        self.inputs[at.layer][at.index]
    }

    pub fn layer_outputs(&self, layer: usize) -> Vec<f64> {
        (0..self.inputs[layer].len())
            .map(|index| self.output(NeuronRef::new(layer, index)))
            .collect()
    }

    pub(crate) fn reset(&mut self) {
        for layer in &mut self.inputs {
            layer.iter_mut().for_each(|x| *x = 0.0);
        }
    }

    pub(crate) fn accumulate(&mut self, at: NeuronRef, value: f64) {
        self.inputs[at.layer][at.index] += value;
    }
}
