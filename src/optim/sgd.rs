use crate::layers::synapse::Synapse;

/// Online gradient step with momentum.
pub struct Sgd {
    /// Learning rate applied to the gradient.
    pub speed: f64,
    /// Fraction of the previous weight change carried into the next one.
    pub moment: f64,
}

impl Sgd {
    pub fn new(speed: f64, moment: f64) -> Sgd {
        Sgd { speed, moment }
    }

    /// Applies one update to a synapse.
    ///
    /// `gradient` is `output * delta`; `delta` is the target neuron's error
    /// signal and is added to the bias unscaled.
    pub fn step(&self, synapse: &mut Synapse, gradient: f64, delta: f64) {
        let delta_weight = self.speed * gradient + self.moment * synapse.last_delta_weight;
        synapse.last_delta_weight = delta_weight;
        synapse.weight += delta_weight;
        synapse.bias += delta;
    }
}
