use std::f64::consts::E;

/// Logistic activation shared by every non-input neuron.
pub struct Sigmoid;

impl Sigmoid {
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + E.powf(-x))
    }

    /// Derivative expressed in terms of an already-activated output `y`,
    /// i.e. σ'(z) = σ(z)(1 − σ(z)) with `y = σ(z)`.
    ///
    /// Input neurons feed their forced value through here unchanged, so the
    /// argument is not guaranteed to lie in (0, 1).
    pub fn derivative(y: f64) -> f64 {
        (1.0 - y) * y
    }
}
