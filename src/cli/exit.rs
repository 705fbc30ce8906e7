//! Process-level failures and their exit codes

use std::path::PathBuf;

use thiserror::Error;

/// Failures the CLI reports with a dedicated exit code
#[derive(Debug, Error)]
pub enum CliError {
    #[error("TSP: missing filename")]
    MissingFilename,

    #[error("TSP: could not open {}", .path.display())]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TSP: too few cities")]
    TooFewCities,

    #[error("TSP: invalid method {method}{}", hint_suffix(.suggestion))]
    InvalidMethod {
        method: String,
        suggestion: Option<&'static str>,
    },
}

fn hint_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean {s}?)"),
        None => String::new(),
    }
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingFilename => 1,
            CliError::CannotOpen { .. } => 2,
            CliError::TooFewCities => 3,
            CliError::InvalidMethod { .. } => 4,
        }
    }
}

/// Exit code for any failure surfaced from `run`
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
