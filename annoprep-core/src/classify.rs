//! Row validation and output routing.
//!
//! A row is first checked for assembly and completeness, then routed to an
//! output format from its raw alleles, then resolved into a locus and keyed.
//! The routing decision travels with the locus in [ClassifiedRow].

use crate::consts::{
    ACCEPTED_ASSEMBLIES, ALT_ALLELE_COL, ASSEMBLY_COL, CHROMOSOME_COL, LOCUS_COLUMNS,
    POSITION_COL, REF_ALLELE_COL,
};
use crate::emit::OutputFormat;
use crate::errors::RowRejection;
use crate::models::{NormalizedLocus, RawRow, VariantIdentifier};
use crate::resolve::{has_placeholder, resolve_coordinates};

///
/// Where rows carrying a `-` placeholder allele are written.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingPolicy {
    /// Any placeholder in either allele sends the row to the Ensembl-style file.
    /// VCF-style records never contain anchored insertions.
    #[default]
    PlaceholdersToEnsembl,
    /// Insertions are written VCF-style with an `N` anchor base. Deletions still
    /// go to the Ensembl-style file since no anchor base is known for them.
    AnchorInsertions,
}

/// The locus fields of a row that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRow<'a> {
    pub chromosome: &'a str,
    pub position: &'a str,
    pub ref_allele: &'a str,
    pub alt_allele: &'a str,
}

/// A row ready to be written: its output format, locus and identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRow {
    pub format: OutputFormat,
    pub locus: NormalizedLocus,
    pub identifier: VariantIdentifier,
}

impl ClassifiedRow {
    pub fn to_record(&self) -> String {
        self.format.format_record(&self.locus, &self.identifier)
    }
}

///
/// Whether an assembly label names GRCh38 (`hg38`, `GRCh38`, `38`, any case).
///
pub fn is_supported_assembly(assembly: &str) -> bool {
    let lowered = assembly.trim().to_ascii_lowercase();
    ACCEPTED_ASSEMBLIES
        .iter()
        .any(|accepted| lowered.starts_with(accepted))
}

///
/// Check the assembly and the presence of every locus field.
///
pub fn validate(row: &RawRow) -> Result<ValidatedRow<'_>, RowRejection> {
    let assembly = row
        .get(ASSEMBLY_COL)
        .ok_or(RowRejection::MissingField(ASSEMBLY_COL))?;
    if !is_supported_assembly(assembly) {
        return Err(RowRejection::LegacyAssembly(assembly.to_string()));
    }

    let field = move |name: &'static str| row.get(name).ok_or(RowRejection::MissingField(name));

    Ok(ValidatedRow {
        chromosome: field(CHROMOSOME_COL)?,
        position: field(POSITION_COL)?,
        ref_allele: field(REF_ALLELE_COL)?,
        alt_allele: field(ALT_ALLELE_COL)?,
    })
}

///
/// Pick the output format for an allele pair.
///
pub fn route(ref_allele: &str, alt_allele: &str, policy: RoutingPolicy) -> OutputFormat {
    let ref_placeholder = has_placeholder(ref_allele);
    let alt_placeholder = has_placeholder(alt_allele);

    match policy {
        RoutingPolicy::PlaceholdersToEnsembl if ref_placeholder || alt_placeholder => {
            OutputFormat::Ensembl
        }
        RoutingPolicy::AnchorInsertions if alt_placeholder => OutputFormat::Ensembl,
        _ => OutputFormat::Vcf,
    }
}

///
/// Validate and resolve a row into its normalized locus, without routing it.
///
pub fn locate_row(row: &RawRow) -> Result<NormalizedLocus, RowRejection> {
    let fields = validate(row)?;
    let resolution = resolve_coordinates(fields.position, fields.ref_allele, fields.alt_allele)?;
    Ok(NormalizedLocus::new(
        fields.chromosome,
        resolution,
        fields.ref_allele,
        fields.alt_allele,
    ))
}

/// The identifier of a row. It does not depend on where the row is routed.
pub fn identify_row(row: &RawRow) -> Result<VariantIdentifier, RowRejection> {
    Ok(locate_row(row)?.identifier())
}

///
/// Validate, route, resolve and key a single row.
///
pub fn classify_row(row: &RawRow, policy: RoutingPolicy) -> Result<ClassifiedRow, RowRejection> {
    let locus = locate_row(row)?;
    let format = route(&locus.raw_ref, &locus.raw_alt, policy);
    let identifier = locus.identifier();

    Ok(ClassifiedRow {
        format,
        locus,
        identifier,
    })
}

///
/// True when none of the locus columns hold a value, as in trailing filler rows.
///
pub fn is_blank(row: &RawRow) -> bool {
    LOCUS_COLUMNS.iter().all(|name| row.get(name).is_none())
}
