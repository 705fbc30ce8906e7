//! # greedy-tsp CLI
//!
//! Command-line interface for the greedy-tsp library.
//! Reads a city list and prints a greedy-edge tour for each requested method.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use greedy_tsp::{complete_segments, greedy_tour, haversine_km, ConnectivityOracle, TourOptions};
use log::{debug, error};

mod cli;

use cli::exit::exit_code_for;
use cli::method::suggest_method;
use cli::output::{format_json, format_line};
use cli::{CliError, Method, ProgressManager};

/// Command-line interface for greedy-tsp
#[derive(Parser)]
#[command(name = "greedy-tsp")]
#[command(version)]
#[command(about = "Greedy-edge Traveling Salesman tours over geographic city lists")]
#[command(long_about = "Builds a tour by repeatedly keeping the shortest remaining segment
that neither gives a city a third neighbor nor closes a cycle early:
  greedy-tsp cities.in -greedy           # Print the greedy tour
  greedy-tsp --json cities.in -greedy    # Same, as JSON

Input format (whitespace separated):
  N  NAME_1 ... NAME_N  LAT_1 LON_1 ... LAT_N LON_N

Options must come before the input file; everything after it is read as
method flags.

Exit codes:
  1  missing filename      2  file cannot be opened
  3  fewer than 2 cities   4  unrecognized method")]
struct Cli {
    /// City list file
    input: Option<PathBuf>,

    /// Methods to report, e.g. -greedy
    #[arg(value_name = "METHOD", trailing_var_arg = true, allow_hyphen_values = true)]
    methods: Vec<String>,

    /// Cycle check used while building the path
    #[arg(long, value_enum, default_value_t = OracleArg::UnionFind)]
    oracle: OracleArg,

    /// Print one JSON object per method instead of text lines
    #[arg(long)]
    json: bool,

    /// Show a progress bar while segments are scanned
    #[arg(long)]
    progress: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OracleArg {
    Bfs,
    UnionFind,
}

impl From<OracleArg> for ConnectivityOracle {
    fn from(arg: OracleArg) -> Self {
        match arg {
            OracleArg::Bfs => ConnectivityOracle::Bfs,
            OracleArg::UnionFind => ConnectivityOracle::UnionFind,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let default_filter = if cli.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<CliError>() {
            Some(cli_err) => eprintln!("{cli_err}"),
            None => error!("{e:#}"),
        }
        std::process::exit(exit_code_for(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.input.ok_or(CliError::MissingFilename)?;

    let file = File::open(&path).map_err(|source| CliError::CannotOpen {
        path: path.clone(),
        source,
    })?;

    let cities = match greedy_tsp::parse_cities(BufReader::new(file)) {
        Err(greedy_tsp::Error::TooFewCities(_)) => return Err(CliError::TooFewCities.into()),
        other => other.with_context(|| format!("failed to read {}", path.display()))?,
    };
    let n = cities.len();

    let segments = complete_segments(n, |i, j| {
        haversine_km(&cities[i].location, &cities[j].location)
    })?;

    let total = segments.len() as u64;
    let progress = cli
        .progress
        .then(|| ProgressManager::new(total, &format!("Scanning {total} segments")));
    let options = TourOptions {
        oracle: cli.oracle.into(),
        progress: progress.as_ref().map(ProgressManager::callback),
    };

    let tour = greedy_tour(n, &segments, &options).context("tour construction failed")?;
    debug!("Greedy tour of {n} cities: {:.2} km", tour.total_distance);

    for flag in &cli.methods {
        let method = Method::from_flag(flag).ok_or_else(|| CliError::InvalidMethod {
            method: flag.clone(),
            suggestion: suggest_method(flag),
        })?;

        if cli.json {
            println!("{}", format_json(method, &tour, &cities)?);
        } else {
            println!("{}", format_line(method, &tour, &cities));
        }
    }

    Ok(())
}
