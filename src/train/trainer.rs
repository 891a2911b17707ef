use crate::{
    loss::mse::SquaredError,
    network::{activations::Activations, error::NetError, network::Network, propagation},
    optim::sgd::Sgd,
};

/// Checks that the example set is non-empty and every vector fits the
/// network's input and output layers.
pub fn validate_examples(network: &Network, inputs: &[Vec<f64>], ideals: &[Vec<f64>]) -> Result<(), NetError> {
    if inputs.is_empty() {
        return Err(NetError::EmptyTrainingSet);
    }
    NetError::check_len("ideal set", inputs.len(), ideals.len())?;
    for (input, ideal) in inputs.iter().zip(ideals.iter()) {
        NetError::check_len("input vector", network.input_len(), input.len())?;
        NetError::check_len("ideal vector", network.output_len(), ideal.len())?;
    }
    Ok(())
}

/// Runs one epoch: each example in order is clamped, propagated forward and
/// then backward, so weights change after every example.
///
/// Returns the mean over examples of the summed squared output error, where
/// each example's error uses the outputs of its own forward pass.
pub fn train_epoch(
    network: &mut Network,
    inputs: &[Vec<f64>],
    ideals: &[Vec<f64>],
    optimizer: &Sgd,
) -> Result<f64, NetError> {
    validate_examples(network, inputs, ideals)?;

    let mut total_error = 0.0;

    for (input, ideal) in inputs.iter().zip(ideals.iter()) {
        let mut activations = Activations::clamp(network, input)?;
        propagation::forward_pass(network, &mut activations);
        propagation::backward_pass(network, &activations, ideal, optimizer);

        total_error += SquaredError::sum(ideal, &network.outputs(&activations));
    }

    Ok(total_error / inputs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_mismatched_sets() {
        let mut network = Network::create(&[2, 1]).unwrap();
        let optimizer = Sgd::new(0.7, 0.3);

        assert_eq!(train_epoch(&mut network, &[], &[], &optimizer), Err(NetError::EmptyTrainingSet));
        assert!(matches!(
            train_epoch(&mut network, &[vec![0.0, 1.0]], &[], &optimizer),
            Err(NetError::DimensionMismatch { what: "ideal set", .. })
        ));
        assert!(matches!(
            train_epoch(&mut network, &[vec![0.0, 1.0]], &[vec![1.0, 0.0]], &optimizer),
            Err(NetError::DimensionMismatch { what: "ideal vector", expected: 1, actual: 2 })
        ));
    }

    #[test]
    fn failed_validation_leaves_weights_alone() {
        let mut network = Network::create(&[2, 1]).unwrap();
        let before = network.layers[0].neurons[0].synapses[0].weight;
        let optimizer = Sgd::new(0.7, 0.3);

        let inputs = vec![vec![1.0, 1.0], vec![1.0]];
        let ideals = vec![vec![1.0], vec![1.0]];
        assert!(train_epoch(&mut network, &inputs, &ideals, &optimizer).is_err());
        assert_eq!(network.layers[0].neurons[0].synapses[0].weight, before);
    }

    #[test]
    fn epoch_error_uses_pre_update_outputs() {
        let mut network = Network::create(&[1, 1]).unwrap();
        let expected = {
            let output = network.run(&[1.0]).unwrap()[0];
            (1.0 - output).powi(2)
        };
        let optimizer = Sgd::new(0.7, 0.3);

        let error = train_epoch(&mut network, &[vec![1.0]], &[vec![1.0]], &optimizer).unwrap();
        assert_eq!(error, expected);
    }
}
