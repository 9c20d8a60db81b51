//! Command-line interface for the SOM trainer.
use crate::map::som::WeightInit;
use serde::Serialize;
use structopt::StructOpt;

/// Raw command line arguments.
#[derive(StructOpt)]
#[structopt(name = "SOM trainer command line application")]
pub struct Cli {
    /// Path to the training data file (headerless, comma-delimited).
    #[structopt(short, long, default_value = "data/data.csv")]
    file: String,
    /// Map width.
    #[structopt(short, long, default_value = "2")]
    x: usize,
    /// Map height.
    #[structopt(short, long, default_value = "2")]
    y: usize,
    /// Maximum iterations.
    #[structopt(short, long, default_value = "1000")]
    max_iter: u32,
    /// Random seed. Affects only the initial weight draws.
    #[structopt(short, long, default_value = "0")]
    seed: u64,
    /// Weight initialization scheme (zero|uniform).
    #[structopt(short, long, default_value = "uniform")]
    init: WeightInit,
    /// Output file path for per-row grid labels.
    #[structopt(short, long, default_value = "data/result.csv")]
    output: String,
    /// Toggle verbose mode.
    #[structopt(short, long)]
    verbose: bool,
}

/// Parsed command line arguments.
#[derive(Debug, Serialize)]
pub struct CliParsed {
    pub file: String,
    pub x: usize,
    pub y: usize,
    pub max_iter: u32,
    pub seed: u64,
    pub init: WeightInit,
    pub output: String,
    pub verbose: bool,
}

impl CliParsed {
    /// Parse arguments from a [`Cli`](struct.Cli.html).
    pub fn from_cli(cli: Cli) -> Self {
        CliParsed {
            file: cli.file,
            x: cli.x,
            y: cli.y,
            max_iter: cli.max_iter,
            seed: cli.seed,
            init: cli.init,
            output: cli.output,
            verbose: cli.verbose,
        }
    }
}
