use std::fmt::{self, Display};

use crate::chromosome::normalize_chromosome;
use crate::models::locus::Span;

///
/// Deterministic key for a variant: `{chrom}_{start}_{ref}_{alt}` for single-base
/// spans and `{chrom}_{start}-{end}_{ref}_{alt}` otherwise.
///
/// The key is the dedup key of an output file and the join key between annotation
/// results and source rows. Two samples carrying the same variant share a key.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantIdentifier(String);

impl VariantIdentifier {
    ///
    /// Build the identifier from a locus.
    ///
    /// # Arguments
    /// - chromosome: chromosome label, normalized here so raw and canonical labels agree
    /// - span: resolved coordinates
    /// - ref_allele: reference allele as written in the input
    /// - alt_allele: alternate allele as written in the input
    pub fn build(chromosome: &str, span: Span, ref_allele: &str, alt_allele: &str) -> Self {
        VariantIdentifier(format!(
            "{}_{}_{}_{}",
            normalize_chromosome(chromosome),
            span,
            ref_allele,
            alt_allele
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for VariantIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for VariantIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<VariantIdentifier> for String {
    fn from(value: VariantIdentifier) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("1", Span::point(10000), "A", "T", "chr1_10000_A_T")]
    #[case("chr1", Span::point(10000), "A", "T", "chr1_10000_A_T")]
    #[case("X", Span::new(10000, 9999), "-", "TT", "chrX_10000-9999_-_TT")]
    #[case("19", Span::new(10491677, 10491679), "AAT", "-", "chr19_10491677-10491679_AAT_-")]
    #[case("19", Span::point(10491677), "T", "-", "chr19_10491677_T_-")]
    #[case("GL000220.1", Span::point(5), "C", "G", "GL000220.1_5_C_G")]
    fn test_build_identifier(
        #[case] chromosome: &str,
        #[case] span: Span,
        #[case] ref_allele: &str,
        #[case] alt_allele: &str,
        #[case] expected: &str,
    ) {
        let id = VariantIdentifier::build(chromosome, span, ref_allele, alt_allele);
        assert_eq!(id.as_str(), expected);
    }

    #[rstest]
    fn test_identifier_is_deterministic() {
        let a = VariantIdentifier::build("7", Span::point(140753336), "A", "T");
        let b = VariantIdentifier::build("7", Span::point(140753336), "A", "T");
        assert_eq!(a, b);
    }

    #[rstest]
    #[case("8", Span::point(140753336), "A", "T")]
    #[case("7", Span::point(140753337), "A", "T")]
    #[case("7", Span::new(140753336, 140753337), "A", "T")]
    #[case("7", Span::point(140753336), "C", "T")]
    #[case("7", Span::point(140753336), "A", "G")]
    fn test_identifier_distinguishes_each_field(
        #[case] chromosome: &str,
        #[case] span: Span,
        #[case] ref_allele: &str,
        #[case] alt_allele: &str,
    ) {
        let base = VariantIdentifier::build("7", Span::point(140753336), "A", "T");
        let other = VariantIdentifier::build(chromosome, span, ref_allele, alt_allele);
        assert_ne!(base, other);
    }
}
