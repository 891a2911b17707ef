use std::time::Instant;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::network::{error::NetError, network::Network};
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{train_epoch, validate_examples};

/// How a `train_loop` run ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainOutcome {
    /// Index of the epoch that converged, or `max_epochs` if the budget ran out.
    pub epochs: usize,
    /// Mean error of the last completed epoch; NaN when no epoch ran.
    pub error: f64,
    pub converged: bool,
}

/// Trains `network` epoch by epoch until the mean error of an epoch falls
/// below `config.target_error` or `config.max_epochs` epochs have run.
///
/// The converging epoch's updates are kept. Every `config.report_every`
/// epochs the mean error is logged and, if configured, sent on
/// `config.progress_tx`.
///
/// # Errors
/// Returns `EmptyTrainingSet` or `DimensionMismatch` before touching any
/// weight if the examples do not fit the network.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    ideals: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<TrainOutcome, NetError> {
    validate_examples(network, inputs, ideals)?;

    let optimizer = Sgd::new(config.speed, config.moment);
    let mut error = f64::NAN;
    let mut converged = false;
    let mut epoch = 0;

    while epoch < config.max_epochs {
        let t_start = Instant::now();
        error = train_epoch(network, inputs, ideals, &optimizer)?;

        if config.report_every > 0 && epoch % config.report_every == 0 {
            info!(epoch, error, percent = error * 100.0, "training progress");

            if let Some(ref tx) = config.progress_tx {
                let stats = EpochStats {
                    epoch,
                    max_epochs: config.max_epochs,
                    error,
                    elapsed_ms: t_start.elapsed().as_millis() as u64,
                };
                // Nobody listening is fine; training carries on.
                let _ = tx.send(stats);
            }
        }

        if error < config.target_error {
            converged = true;
            break;
        }
        epoch += 1;
    }

    info!(epochs = epoch, error, converged, "training finished");
    Ok(TrainOutcome { epochs: epoch, error, converged })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn zero_budget_runs_nothing() {
        let mut network = Network::create(&[2, 1]).unwrap();
        let before = network.clone();

        let outcome = train_loop(&mut network, &[vec![0.0, 1.0]], &[vec![1.0]], &TrainConfig::new(0)).unwrap();

        assert_eq!(outcome.epochs, 0);
        assert!(outcome.error.is_nan());
        assert!(!outcome.converged);
        assert_eq!(before.run(&[0.0, 1.0]).unwrap(), network.run(&[0.0, 1.0]).unwrap());
    }

    #[test]
    fn exhausted_budget_reports_max_epochs() {
        let mut network = Network::create(&[2, 1]).unwrap();
        let config = TrainConfig::new(3).target_error(0.0);

        let outcome = train_loop(&mut network, &[vec![0.0, 1.0]], &[vec![1.0]], &config).unwrap();

        assert_eq!(outcome.epochs, 3);
        assert!(!outcome.converged);
    }

    #[test]
    fn immediate_convergence_reports_epoch_zero() {
        let mut network = Network::create(&[2, 1]).unwrap();
        let config = TrainConfig::new(100).target_error(f64::INFINITY);

        let outcome = train_loop(&mut network, &[vec![0.0, 1.0]], &[vec![1.0]], &config).unwrap();

        assert_eq!(outcome.epochs, 0);
        assert!(outcome.converged);
    }

    #[test]
    fn reports_on_multiples_of_report_every() {
        let (tx, rx) = mpsc::channel();
        let mut network = Network::create(&[2, 1]).unwrap();
        let config = TrainConfig::new(25).target_error(0.0).report_every(10).progress(tx);

        train_loop(&mut network, &[vec![0.0, 1.0]], &[vec![1.0]], &config).unwrap();
        drop(config);

        let epochs: Vec<usize> = rx.iter().map(|s| s.epoch).collect();
        assert_eq!(epochs, vec![0, 10, 20]);
    }

    #[test]
    fn dropped_receiver_does_not_stop_training() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut network = Network::create(&[2, 1]).unwrap();
        let config = TrainConfig::new(5).target_error(0.0).report_every(1).progress(tx);

        let outcome = train_loop(&mut network, &[vec![0.0, 1.0]], &[vec![1.0]], &config).unwrap();
        assert_eq!(outcome.epochs, 5);
    }
}
