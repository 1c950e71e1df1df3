use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use annoprep_io::PrepIoError;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("Configured {setting} does not exist: {path:?}")]
    ConfigurationMissing {
        setting: &'static str,
        path: PathBuf,
    },

    #[error("Prepared file to annotate does not exist: {0:?}")]
    MissingPrepared(PathBuf),

    #[error("Failed to launch annotation tool {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Annotation tool failed with {0}")]
    ToolFailed(ExitStatus),

    #[error("Annotation tool did not finish within {0} seconds")]
    TimedOut(u64),

    #[error("Annotation tool exited successfully but wrote no results to {0:?}")]
    MissingOutput(PathBuf),

    #[error("Annotation results file has no column header line: {0:?}")]
    InvalidAnnotationFile(PathBuf),

    #[error("Annotation results file has different columns than the others: {0:?}")]
    HeaderMismatch(PathBuf),

    #[error("No annotation results to merge")]
    NoAnnotations,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Prep(#[from] PrepIoError),
}

pub type AnnotateResult<T> = std::result::Result<T, AnnotateError>;
