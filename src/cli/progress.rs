//! CLI-specific progress handling for greedy-tsp
//!
//! Provides the progress bar shown while segments are scanned.

use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};

use greedy_tsp::ProgressCallback;

const BAR_TEMPLATE: &str = concat!(
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] ",
    "{pos}/{len} segments ({percent}%) ETA: {eta}"
);

/// Creates a progress bar counting scanned segments
pub fn create_progress_bar(total_segments: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_segments);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Progress manager for a tour construction run
pub struct ProgressManager {
    pub pb: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(total_segments: u64, message: &str) -> Self {
        let pb = create_progress_bar(total_segments);

        // Print initial message to stderr
        eprintln!("{message}");

        Self { pb }
    }

    /// Callback that feeds the bar from the greedy loop
    pub fn callback(&self) -> ProgressCallback {
        let pb = self.pb.clone();
        Arc::new(move |scanned, total| {
            if pb.length().unwrap_or(0) != total {
                pb.set_length(total);
            }
            pb.set_position(scanned);
            if scanned >= total {
                pb.finish_with_message("done");
            }
        })
    }
}
