use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for annoprep-io operations.
#[derive(Error, Debug)]
pub enum PrepIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The delimited reader failed on the underlying stream.
    #[error("Failed to read delimited input: {0}")]
    Csv(#[from] csv::Error),

    /// The input header lacks one or more required columns.
    #[error("Input file {path:?} is missing required columns: {}", .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// A temporary file could not be moved over its destination.
    #[error("Failed to replace {path:?}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for annoprep-io operations.
pub type Result<T> = std::result::Result<T, PrepIoError>;
