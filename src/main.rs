//! Trains a small network on a boolean function, then evaluates inputs read
//! from stdin, one whitespace-separated vector per line.
//!
//!   cargo run -- --function and --layers 2,2,1 --epochs 10000

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use synaptic_nn::{to_script_array, BooleanFunction, ExportVariant, Network, TrainConfig};

#[derive(Parser)]
#[command(name = "synaptic-nn")]
#[command(about = "Train a tiny backprop network and query it interactively", long_about = None)]
struct Cli {
    /// Neurons per layer, input first
    #[arg(short, long, value_delimiter = ',', default_value = "2,2,1")]
    layers: Vec<usize>,

    /// Truth table to learn (and, or, xor, nand)
    #[arg(short, long, default_value = "and")]
    function: BooleanFunction,

    /// Maximum number of epochs
    #[arg(short, long, default_value_t = 10_000)]
    epochs: usize,

    /// Learning rate
    #[arg(long, default_value_t = 0.7)]
    speed: f64,

    /// Momentum coefficient
    #[arg(long, default_value_t = 0.3)]
    moment: f64,

    /// Seed for weight initialisation; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the trained weights as a charting-script array (short or long)
    #[arg(long)]
    export: Option<ExportVariant>,

    /// Verbosity level
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut network = match cli.seed {
        Some(seed) => Network::create_with_rng(&cli.layers, &mut StdRng::seed_from_u64(seed)),
        None => Network::create(&cli.layers),
    }
    .context("building network")?;

    let (inputs, ideals) = cli.function.truth_table();
    let config = TrainConfig::new(cli.epochs).speed(cli.speed).moment(cli.moment);
    let outcome = network
        .train(&inputs, &ideals, &config)
        .with_context(|| format!("training on '{}'", cli.function.name()))?;
    info!(epochs = outcome.epochs, error = outcome.error, converged = outcome.converged, "trained");

    if let Some(variant) = cli.export {
        print!("{}", to_script_array(&network, variant));
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parsed: Result<Vec<f64>, _> = line.split_whitespace().map(str::parse::<f64>).collect();
        let input = match parsed {
            Ok(input) => input,
            Err(e) => {
                warn!(%line, "could not parse input: {e}");
                continue;
            }
        };

        match network.run(&input) {
            Ok(outputs) => {
                let rendered: Vec<String> = outputs.iter().map(f64::to_string).collect();
                writeln!(stdout, "{}", rendered.join(" "))?;
            }
            Err(e) => warn!("{e}"),
        }
    }

    Ok(())
}
