//! # annoprep core
//!
//! Coordinate normalization and record identity for tabular variant rows.
//!
//! A raw row (chromosome, 1-based start, ref/alt allele, genome assembly) is
//! validated, routed to a VCF-style or Ensembl-style output, resolved into a
//! start/end span, and keyed with a deterministic [VariantIdentifier]. Every
//! step is a pure function of the row.
//!
pub mod chromosome;
pub mod classify;
pub mod consts;
pub mod emit;
pub mod errors;
pub mod models;
pub mod resolve;

// re-expose the common entry points
pub use chromosome::normalize_chromosome;
pub use classify::{
    ClassifiedRow, RoutingPolicy, classify_row, identify_row, is_blank, locate_row,
};
pub use emit::OutputFormat;
pub use errors::{RejectionKind, RowRejection};
pub use models::{NormalizedLocus, RawRow, RowHeader, Span, VariantIdentifier, VariantKind};
pub use resolve::{Resolution, resolve_coordinates};
