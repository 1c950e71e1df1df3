use std::fmt::{self, Display};

use crate::chromosome::normalize_chromosome;
use crate::models::identifier::VariantIdentifier;
use crate::resolve::{Resolution, resolve_alleles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Substitution,
    Insertion,
    Deletion,
}

impl Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VariantKind::Substitution => "substitution",
            VariantKind::Insertion => "insertion",
            VariantKind::Deletion => "deletion",
        };
        write!(f, "{}", label)
    }
}

///
/// 1-based inclusive coordinates of a variant.
///
/// Insertions sit between two bases, so their span is empty and `end == start - 1`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Span {
    pub fn new(start: u64, end: u64) -> Self {
        Span { start, end }
    }

    pub fn point(position: u64) -> Self {
        Span::new(position, position)
    }

    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

///
/// Canonical form of one variant row.
///
/// `raw_ref`/`raw_alt` are the alleles as written in the input and feed the
/// identifier and Ensembl-style records. `ref_allele`/`alt_allele` have the
/// insertion placeholder anchored to [crate::consts::ANCHOR_BASE].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLocus {
    pub chromosome: String,
    pub span: Span,
    pub kind: VariantKind,
    pub raw_ref: String,
    pub raw_alt: String,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl NormalizedLocus {
    pub fn new(chromosome: &str, resolution: Resolution, raw_ref: &str, raw_alt: &str) -> Self {
        let (ref_allele, alt_allele) = resolve_alleles(resolution.kind, raw_ref, raw_alt);
        NormalizedLocus {
            chromosome: normalize_chromosome(chromosome),
            span: resolution.span,
            kind: resolution.kind,
            raw_ref: raw_ref.to_string(),
            raw_alt: raw_alt.to_string(),
            ref_allele,
            alt_allele,
        }
    }

    pub fn identifier(&self) -> VariantIdentifier {
        VariantIdentifier::build(&self.chromosome, self.span, &self.raw_ref, &self.raw_alt)
    }
}
