//! Chromosome label normalization.
//!
//! Bare labels (`7`, `x`, `MT`, `un`) gain the UCSC `chr` prefix. Anything else
//! is assumed to already be canonical, or is an unplaced contig name, and is
//! returned untouched.

use crate::consts::CHR_PREFIX;

///
/// Map a raw chromosome label to its canonical form.
///
/// Idempotent: `normalize_chromosome(&normalize_chromosome(x)) == normalize_chromosome(x)`.
///
pub fn normalize_chromosome(label: &str) -> String {
    match canonical_name(label) {
        Some(name) => format!("{}{}", CHR_PREFIX, name),
        None => label.to_string(),
    }
}

/// Canonical spelling of a bare chromosome label, if it is one.
fn canonical_name(label: &str) -> Option<String> {
    if is_autosome_number(label) {
        return Some(label.to_string());
    }

    let upper = label.to_ascii_uppercase();
    match upper.as_str() {
        "X" | "Y" | "M" | "MT" => Some(upper),
        "UN" => Some("Un".to_string()),
        _ => None,
    }
}

/// `1` through `22`, written without leading zeros.
fn is_autosome_number(label: &str) -> bool {
    if label.is_empty() || label.len() > 2 || label.starts_with('0') {
        return false;
    }
    if !label.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(label.parse::<u8>(), Ok(1..=22))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("1", "chr1")]
    #[case("9", "chr9")]
    #[case("22", "chr22")]
    #[case("x", "chrX")]
    #[case("X", "chrX")]
    #[case("y", "chrY")]
    #[case("m", "chrM")]
    #[case("MT", "chrMT")]
    #[case("mt", "chrMT")]
    #[case("Un", "chrUn")]
    #[case("un", "chrUn")]
    fn test_bare_labels_get_prefix(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(normalize_chromosome(label), expected);
    }

    #[rstest]
    #[case("chr1")]
    #[case("chrX")]
    #[case("chrUn_KI270742v1")]
    #[case("23")]
    #[case("0")]
    #[case("01")]
    #[case("GL000220.1")]
    #[case("")]
    fn test_other_labels_unchanged(#[case] label: &str) {
        assert_eq!(normalize_chromosome(label), label);
    }

    #[rstest]
    #[case("1")]
    #[case("x")]
    #[case("chr7")]
    #[case("mt")]
    #[case("un")]
    #[case("scaffold_12")]
    fn test_normalize_is_idempotent(#[case] label: &str) {
        let once = normalize_chromosome(label);
        assert_eq!(normalize_chromosome(&once), once);
    }
}
