use synaptic_nn::{to_script_array, ExportVariant};

use crate::routes::{error_response, json_response, text_response, HttpResponse};
use crate::state::SharedState;
use crate::util::form::{form_get, parse_form};

/// `GET /export?variant=short|long`
///
/// Weights and biases as a charting-script array literal.
pub fn handle_export(query: &str, state: SharedState) -> HttpResponse {
    let pairs = parse_form(query);
    let variant = match form_get(&pairs, "variant").unwrap_or("short").parse::<ExportVariant>() {
        Ok(v) => v,
        Err(e) => return error_response(400, &e),
    };

    let st = state.lock().unwrap();
    match &st.model {
        Some(m) => text_response(to_script_array(&m.network, variant)),
        None => error_response(409, "no network has been trained yet"),
    }
}

/// `GET /network`
///
/// Layer/neuron/synapse graph as JSON. Synapse targets are omitted; they are
/// rebuilt positionally when the snapshot is loaded.
pub fn handle_snapshot(state: SharedState) -> HttpResponse {
    let st = state.lock().unwrap();
    match &st.model {
        Some(m) => match serde_json::to_value(&m.network) {
            Ok(v) => json_response(&v),
            Err(e) => error_response(500, &e.to_string()),
        },
        None => error_response(409, "no network has been trained yet"),
    }
}
