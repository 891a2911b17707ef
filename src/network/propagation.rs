use crate::activation::activation::Sigmoid;
use crate::layers::synapse::NeuronRef;
use crate::network::activations::Activations;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;

/// Propagates the clamped input through the network.
///
/// Every accumulator is cleared first, then each neuron, in layer order,
/// pushes `output * weight + bias` into the target of each of its synapses.
/// Layers are visited front to back, so a neuron's output is final by the
/// time it is read.
pub fn forward_pass(network: &Network, activations: &mut Activations) {
    activations.reset();

    for (l, layer) in network.layers.iter().enumerate() {
        for (i, neuron) in layer.neurons.iter().enumerate() {
            let output = activations.output(NeuronRef::new(l, i));
            for synapse in &neuron.synapses {
                activations.accumulate(synapse.target, output * synapse.weight + synapse.bias);
            }
        }
    }
}

/// Error signal of every neuron in `layer`, read from the weights as they
/// currently stand.
///
/// Output neurons use `(ideal - output) * σ'(output)`; any other neuron uses
/// `σ'(output) * Σ weight * delta(target)` over its synapses in stored order.
pub fn layer_deltas(network: &Network, activations: &Activations, ideals: &[f64], layer: usize) -> Vec<f64> {
    let last = network.layers.len() - 1;

    let mut deltas: Vec<f64> = network.layers[last].neurons.iter().enumerate()
        .map(|(i, neuron)| {
            let output = activations.output(NeuronRef::new(last, i));
            (ideals[neuron.id] - output) * Sigmoid::derivative(output)
        })
        .collect();

    for l in (layer..last).rev() {
        deltas = network.layers[l].neurons.iter().enumerate()
            .map(|(i, neuron)| {
                let output = activations.output(NeuronRef::new(l, i));
                let downstream: f64 = neuron.synapses.iter()
                    .map(|synapse| synapse.weight * deltas[synapse.target.index])
                    .sum();
                Sigmoid::derivative(output) * downstream
            })
            .collect();
    }

    deltas
}

/// One training step against `ideals` using the outputs of the last
/// forward pass.
///
/// Layers are walked from last to first, neurons and synapses in stored
/// order. Each synapse gets `gradient = output * delta(target)` handed to the
/// optimizer, which also shifts the bias by `delta(target)`.
///
/// Deltas are read live: by the time layer `l` is updated, every deeper
/// layer already carries its new weights and the deltas of layer `l + 1`
/// reflect them. Updating layer `l` cannot change those deltas, so they are
/// computed once per layer.
pub fn backward_pass(network: &mut Network, activations: &Activations, ideals: &[f64], optimizer: &Sgd) {
    let layer_count = network.layers.len();

    for l in (0..layer_count.saturating_sub(1)).rev() {
        let deltas = layer_deltas(network, activations, ideals, l + 1);

        for (i, neuron) in network.layers[l].neurons.iter_mut().enumerate() {
            let output = activations.output(NeuronRef::new(l, i));
            for synapse in &mut neuron.synapses {
                let delta = deltas[synapse.target.index];
                optimizer.step(synapse, output * delta, delta);
            }
        }
    }
}
