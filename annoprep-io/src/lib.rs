//! # Input/Output for annoprep
//!
//! Reads delimited variant tables, writes the normalized VCF-style and
//! Ensembl-style files through a [ProcessingContext], and deduplicates them.
//! [prepare_file] runs the whole pass for one input.
//!
pub mod context;
pub mod dedup;
pub mod error;
pub mod prepare;
pub mod reader;
pub mod writer;

// re-expose core functions
pub use context::{PrepSummary, PreparedOutput, ProcessingContext};
pub use dedup::{DedupStats, dedup_in_place};
pub use error::*;
pub use prepare::prepare_file;
pub use reader::{DelimitedReader, delimiter_for, get_dynamic_reader};
pub use writer::{RecordWriter, append_suffix, output_path};
