use std::sync::mpsc;
use tiny_http::Request;
use tracing::info;

use synaptic_nn::{BooleanFunction, Network, TrainConfig};

use crate::routes::{error_response, json_response, read_body, HttpResponse};
use crate::state::{SharedState, TrainedModel};
use crate::util::form::{form_get, parse_form, parse_numbers};

// ---------------------------------------------------------------------------
// POST /train
// ---------------------------------------------------------------------------

/// Builds a fresh network and trains it synchronously on the requested
/// truth table. Missing fields fall back to `TrainConfig::default()` and a
/// 2-2-1 topology.
pub fn handle_train(request: &mut Request, state: SharedState) -> HttpResponse {
    let pairs = parse_form(&read_body(request));

    let function = match form_get(&pairs, "function").unwrap_or("and").parse::<BooleanFunction>() {
        Ok(f) => f,
        Err(e) => return error_response(400, &e),
    };
    let layers = match parse_numbers::<usize>(form_get(&pairs, "layers").unwrap_or("2,2,1")) {
        Ok(l) => l,
        Err(e) => return error_response(400, &e),
    };

    let mut config = TrainConfig::default();
    if let Some(raw) = form_get(&pairs, "epochs") {
        match raw.trim().parse() {
            Ok(v) => config.max_epochs = v,
            Err(_) => return error_response(400, "epochs must be a non-negative integer"),
        }
    }
    for (key, slot) in [("speed", &mut config.speed), ("moment", &mut config.moment)] {
        if let Some(raw) = form_get(&pairs, key) {
            match raw.trim().parse() {
                Ok(v) => *slot = v,
                Err(_) => return error_response(400, &format!("{key} must be a number")),
            }
        }
    }

    let mut network = match Network::create(&layers) {
        Ok(n) => n,
        Err(e) => return error_response(400, &e.to_string()),
    };

    let (tx, rx) = mpsc::channel();
    config.progress_tx = Some(tx);
    let (inputs, ideals) = function.truth_table();
    let outcome = match network.train(&inputs, &ideals, &config) {
        Ok(o) => o,
        Err(e) => return error_response(400, &e.to_string()),
    };
    drop(config);
    let history: Vec<_> = rx.iter().collect();

    info!(function = function.name(), epochs = outcome.epochs, "studio training done");

    let body = serde_json::json!({
        "function": function.name(),
        "layers":   network.layer_sizes(),
        "outcome":  outcome,
        "history":  history,
    });

    state.lock().unwrap().model = Some(TrainedModel { network, function, outcome, history });
    json_response(&body)
}
