use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while deriving batch-run artifacts from the settings
/// document. Every variant aborts the run: the operator fixes the document
/// (or the filesystem) and re-runs, there is no partial recovery.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Settings document '{path}' is malformed: {reason}", path = path.display())]
    MalformedSettings { path: PathBuf, reason: String },

    #[error(
        "Output base directory '{path}' does not exist; create it before running setup",
        path = path.display()
    )]
    OutputBaseMissing { path: PathBuf },

    #[error("Invalid resource specification: {field} = {value} (must be at least 1)")]
    InvalidResourceSpec { field: &'static str, value: u64 },

    #[error(
        "Invalid partition: numHRUs = {total_units}, maxGRUsPerSubmission = {chunk_size} (both must be at least 1)"
    )]
    InvalidPartition { total_units: u64, chunk_size: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
