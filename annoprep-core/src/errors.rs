use std::fmt::{self, Display};

use thiserror::Error;

///
/// Why a single input row was left out of every output file.
///
/// None of these abort processing; the row is logged and skipped.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    #[error("Row has incomplete data, missing field: {0}")]
    MissingField(&'static str),

    #[error("Legacy genome assembly, only GRCh38 rows are processed: {0}")]
    LegacyAssembly(String),

    #[error("Start position is not a non-negative integer: {0}")]
    InvalidPosition(String),

    #[error("Placeholder in both alleles is not supported: ref={ref_allele} alt={alt_allele}")]
    ConflictingPlaceholders {
        ref_allele: String,
        alt_allele: String,
    },

    #[error("Insertion at position 0 has no preceding base to anchor to")]
    InsertionAtOrigin,
}

/// Coarse grouping of [RowRejection] used for per-file summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RejectionKind {
    Incomplete,
    LegacyAssembly,
    Unparseable,
    UnsupportedAlleles,
}

impl RowRejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            RowRejection::MissingField(_) => RejectionKind::Incomplete,
            RowRejection::LegacyAssembly(_) => RejectionKind::LegacyAssembly,
            RowRejection::InvalidPosition(_) => RejectionKind::Unparseable,
            RowRejection::ConflictingPlaceholders { .. } | RowRejection::InsertionAtOrigin => {
                RejectionKind::UnsupportedAlleles
            }
        }
    }
}

impl Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectionKind::Incomplete => "incomplete",
            RejectionKind::LegacyAssembly => "legacy assembly",
            RejectionKind::Unparseable => "unparseable",
            RejectionKind::UnsupportedAlleles => "unsupported alleles",
        };
        write!(f, "{}", label)
    }
}
