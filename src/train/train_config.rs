use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_epochs`  : upper bound on full passes over the training data
/// - `speed`       : learning rate
/// - `moment`      : momentum coefficient
/// - `target_error`: training stops once the mean error of an epoch is
///                    strictly below this value
/// - `report_every`: emit a progress report on every epoch whose index is a
///                    multiple of this value (epoch 0 included); `0` disables
/// - `progress_tx` : optional channel sender receiving one `EpochStats` per
///                    report. A dropped receiver does not stop training.
pub struct TrainConfig {
    pub max_epochs: usize,
    pub speed: f64,
    pub moment: f64,
    pub target_error: f64,
    pub report_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Default hyperparameters with a custom epoch budget.
    pub fn new(max_epochs: usize) -> Self {
        TrainConfig {
            max_epochs,
            ..TrainConfig::default()
        }
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn moment(mut self, moment: f64) -> Self {
        self.moment = moment;
        self
    }

    pub fn target_error(mut self, target_error: f64) -> Self {
        self.target_error = target_error;
        self
    }

    pub fn report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    pub fn progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            max_epochs: 10_000,
            speed: 0.7,
            moment: 0.3,
            target_error: 0.005,
            report_every: 1000,
            progress_tx: None,
        }
    }
}
