//! Record encodings for the two output files.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::{ENSEMBL_HEADER, ENSEMBL_SUFFIX, VCF_HEADER, VCF_SUFFIX};
use crate::models::{NormalizedLocus, VariantIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputFormat {
    Vcf,
    Ensembl,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Vcf, OutputFormat::Ensembl];

    pub fn header(&self) -> &'static str {
        match self {
            OutputFormat::Vcf => VCF_HEADER,
            OutputFormat::Ensembl => ENSEMBL_HEADER,
        }
    }

    /// File suffix of the output file, also the annotation tool's `--format` value.
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputFormat::Vcf => VCF_SUFFIX,
            OutputFormat::Ensembl => ENSEMBL_SUFFIX,
        }
    }

    pub fn format_record(&self, locus: &NormalizedLocus, identifier: &VariantIdentifier) -> String {
        match self {
            OutputFormat::Vcf => vcf_record(locus, identifier),
            OutputFormat::Ensembl => ensembl_record(locus, identifier),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            VCF_SUFFIX => Ok(OutputFormat::Vcf),
            ENSEMBL_SUFFIX => Ok(OutputFormat::Ensembl),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

///
/// `chrom  pos  id  ref  alt  .  .  .` with the anchored alleles.
///
pub fn vcf_record(locus: &NormalizedLocus, identifier: &VariantIdentifier) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t.\t.\t.",
        locus.chromosome, locus.span.start, identifier, locus.ref_allele, locus.alt_allele
    )
}

///
/// `chrom  start  end  ref/alt  +  id` with the raw alleles.
///
pub fn ensembl_record(locus: &NormalizedLocus, identifier: &VariantIdentifier) -> String {
    format!(
        "{}\t{}\t{}\t{}/{}\t+\t{}",
        locus.chromosome, locus.span.start, locus.span.end, locus.raw_ref, locus.raw_alt, identifier
    )
}
