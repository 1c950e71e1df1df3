//! # Annotation for annoprep
//!
//! Runs an external variant annotation tool over the prepared VCF-style and
//! Ensembl-style files and merges its results back onto the source table.
//!
//! Settings come from a TOML file, see [AnnotationConfig].
//!
pub mod config;
pub mod error;
pub mod merge;
pub mod runner;

pub use config::AnnotationConfig;
pub use error::*;
pub use merge::{AnnotationTable, MergeSummary, merge_annotations, merged_output_path};
pub use runner::{AnnotationJob, annotate_prepared, build_command, run_job};
