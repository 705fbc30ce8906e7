//! CLI-specific utilities for greedy-tsp
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

pub mod exit;
pub mod method;
pub mod output;
pub mod progress;

pub use exit::CliError;
pub use method::Method;
pub use progress::ProgressManager;
