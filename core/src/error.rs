//! Error taxonomy for the simulation pipeline.
//!
//! Every variant here is a terminal, user-visible failure for one run: it is
//! surfaced at the orchestration boundary, never retried, and a failed run
//! leaves no usable trajectory log behind.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a simulation run.
#[derive(Debug, Error)]
pub enum NavError {
    /// The terrain input could not be opened.
    #[error("terrain source unavailable: {}: {source}", .path.display())]
    SourceUnavailable {
        /// Path the terrain document was expected at.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The terrain document is structurally invalid.
    #[error("malformed terrain document: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// The scenario code is outside the recognized set.
    #[error("unrecognized scenario code {0} (expected 1, 2, or 3)")]
    InvalidScenario(u8),

    /// The trajectory log destination could not be written.
    #[error("trajectory sink unavailable: {0}")]
    SinkUnavailable(#[from] csv::Error),
}
