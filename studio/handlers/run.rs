use tiny_http::Request;

use crate::routes::{error_response, json_response, read_body, HttpResponse};
use crate::state::SharedState;
use crate::util::form::{form_get, parse_form, parse_numbers};

// ---------------------------------------------------------------------------
// POST /run
// ---------------------------------------------------------------------------

pub fn handle_run(request: &mut Request, state: SharedState) -> HttpResponse {
    let pairs = parse_form(&read_body(request));
    let input = match parse_numbers::<f64>(form_get(&pairs, "inputs").unwrap_or("")) {
        Ok(v) => v,
        Err(e) => return error_response(400, &e),
    };

    // Clone so inference does not hold the lock.
    let network = match &state.lock().unwrap().model {
        Some(m) => m.network.clone(),
        None => return error_response(409, "no network has been trained yet"),
    };

    match network.run(&input) {
        Ok(outputs) => json_response(&serde_json::json!({ "outputs": outputs })),
        Err(e) => error_response(400, &e.to_string()),
    }
}
