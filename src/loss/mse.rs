pub struct SquaredError;

impl SquaredError {
    /// Σ(ideal − actual)² over index-aligned outputs. Not averaged over the
    /// output count; the training loop averages over examples instead.
    pub fn sum(ideal: &[f64], actual: &[f64]) -> f64 {
        ideal.iter().zip(actual.iter())
            .map(|(i, a)| (i - a).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sums_without_averaging() {
        assert_relative_eq!(SquaredError::sum(&[1.0, 0.0], &[0.5, 0.5]), 0.5);
        assert_eq!(SquaredError::sum(&[], &[]), 0.0);
    }
}
