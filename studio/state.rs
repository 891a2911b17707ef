use std::sync::{Arc, Mutex};
use synaptic_nn::{BooleanFunction, EpochStats, Network, TrainOutcome};

/// Result of the most recent `/train` request.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub network:  Network,
    pub function: BooleanFunction,
    pub outcome:  TrainOutcome,
    /// Progress reports collected during training.
    pub history:  Vec<EpochStats>,
}

pub struct StudioState {
    /// `None` until the first successful training run.
    pub model: Option<TrainedModel>,
}

impl StudioState {
    pub fn new() -> Self {
        StudioState { model: None }
    }

    /// Plain-text summary for `GET /`.
    pub fn status(&self) -> String {
        match &self.model {
            None => "synaptic-nn studio: no network trained yet. POST /train to start.\n".to_owned(),
            Some(m) => format!(
                "synaptic-nn studio\nfunction: {}\nlayers: {:?}\nepochs: {}\nerror: {}\nconverged: {}\nreports: {}\n",
                m.function.name(),
                m.network.layer_sizes(),
                m.outcome.epochs,
                m.outcome.error,
                m.outcome.converged,
                m.history.len(),
            ),
        }
    }
}

/// Shared state, an `Arc<Mutex<StudioState>>` passed to every handler.
pub type SharedState = Arc<Mutex<StudioState>>;
