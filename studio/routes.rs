use std::io::{Cursor, Read};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::state::SharedState;
use crate::handlers;

pub type HttpResponse = Response<Cursor<Vec<u8>>>;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn respond_with(status: u16, content_type: &str, body: String) -> HttpResponse {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![Header::from_bytes(b"Content-Type", content_type.as_bytes()).unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn text_response(body: String) -> HttpResponse {
    respond_with(200, "text/plain; charset=utf-8", body)
}

pub fn json_response(body: &serde_json::Value) -> HttpResponse {
    respond_with(200, "application/json", body.to_string())
}

/// JSON `{"error": message}` with the given status code.
pub fn error_response(status: u16, message: &str) -> HttpResponse {
    let body = serde_json::json!({ "error": message });
    respond_with(status, "application/json", body.to_string())
}

pub fn not_found() -> HttpResponse {
    respond_with(404, "text/plain", "404 Not Found".to_owned())
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let url    = request.url().to_owned();

    let (path, query) = match url.split_once('?') {
        Some((p, q)) => (p.to_owned(), q.to_owned()),
        None => (url.clone(), String::new()),
    };

    let response = match (method, path.as_str()) {
        (Method::Get,  "/")        => text_response(state.lock().unwrap().status()),
        (Method::Post, "/train")   => handlers::train::handle_train(&mut request, state),
        (Method::Post, "/run")     => handlers::run::handle_run(&mut request, state),
        (Method::Get,  "/export")  => handlers::export::handle_export(&query, state),
        (Method::Get,  "/network") => handlers::export::handle_snapshot(state),
        _ => not_found(),
    };

    let _ = request.respond(response);
}

/// Reads the whole request body as UTF-8.
pub fn read_body(request: &mut Request) -> String {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    body
}
