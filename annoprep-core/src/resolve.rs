//! Start/end coordinate resolution for substitutions and `-` placeholder indels.

use crate::consts::{ANCHOR_BASE, PLACEHOLDER};
use crate::errors::RowRejection;
use crate::models::{Span, VariantKind};

/// Coordinates and kind computed from a raw position and allele pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub span: Span,
    pub kind: VariantKind,
}

pub fn has_placeholder(allele: &str) -> bool {
    allele.contains(PLACEHOLDER)
}

///
/// Parse a 1-based start position.
///
pub fn parse_position(position: &str) -> Result<u64, RowRejection> {
    position
        .trim()
        .parse::<u64>()
        .map_err(|_| RowRejection::InvalidPosition(position.to_string()))
}

///
/// Resolve a raw start position and allele pair into a span and variant kind.
///
/// - a placeholder in the ref allele is an insertion, anchored before `start`: `end = start - 1`
/// - a placeholder in the alt allele is a deletion: `end = start + len(ref) - 1`
/// - anything else is a substitution: `end = start`
///
/// # Arguments
/// - position: the `seq_start_position` cell
/// - ref_allele: the raw reference allele
/// - alt_allele: the raw alternate allele
pub fn resolve_coordinates(
    position: &str,
    ref_allele: &str,
    alt_allele: &str,
) -> Result<Resolution, RowRejection> {
    let ref_placeholder = has_placeholder(ref_allele);
    let alt_placeholder = has_placeholder(alt_allele);

    if ref_placeholder && alt_placeholder {
        return Err(RowRejection::ConflictingPlaceholders {
            ref_allele: ref_allele.to_string(),
            alt_allele: alt_allele.to_string(),
        });
    }

    let start = parse_position(position)?;

    if ref_placeholder {
        let end = start
            .checked_sub(1)
            .ok_or(RowRejection::InsertionAtOrigin)?;
        return Ok(Resolution {
            span: Span::new(start, end),
            kind: VariantKind::Insertion,
        });
    }

    if alt_placeholder {
        let deleted = ref_allele.chars().count() as u64;
        let end = start
            .checked_add(deleted.saturating_sub(1))
            .ok_or_else(|| RowRejection::InvalidPosition(position.to_string()))?;
        return Ok(Resolution {
            span: Span::new(start, end),
            kind: VariantKind::Deletion,
        });
    }

    Ok(Resolution {
        span: Span::point(start),
        kind: VariantKind::Substitution,
    })
}

///
/// Alleles as they appear in a VCF-style record.
///
/// Insertions get an anchor base: ref `N`, alt `N` + inserted bases. Substitutions
/// and deletions keep their raw alleles.
///
pub fn resolve_alleles(kind: VariantKind, ref_allele: &str, alt_allele: &str) -> (String, String) {
    match kind {
        VariantKind::Insertion => (
            ANCHOR_BASE.to_string(),
            format!("{}{}", ANCHOR_BASE, alt_allele),
        ),
        VariantKind::Substitution | VariantKind::Deletion => {
            (ref_allele.to_string(), alt_allele.to_string())
        }
    }
}
