//! synaptic-nn Studio
//!
//! A small HTTP front end for training a network on a boolean function and
//! querying it. Served by a synchronous tiny_http server.
//!
//! Run with:
//!   cargo run --bin studio --release
//!
//! Routes:
//!   GET  /        : status
//!   POST /train   : form: function, layers, epochs, speed, moment
//!   POST /run     : form: inputs
//!   GET  /export  : query: variant=short|long
//!   GET  /network : JSON snapshot of the trained network

mod state;
mod routes;
mod handlers;
mod util;

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use clap::Parser;
use tiny_http::Server;
use tracing::info;

use state::StudioState;

#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "HTTP front end for synaptic-nn", long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:7878")]
    addr: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let server = Server::http(&cli.addr).map_err(|e| anyhow!("failed to bind {}: {e}", cli.addr))?;
    let shared_state = Arc::new(Mutex::new(StudioState::new()));

    info!(addr = %cli.addr, "studio listening");

    // One thread per request so a long training run does not stall queries.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }

    Ok(())
}
