/// Column names an input file must carry.
pub const CHROMOSOME_COL: &str = "chromosome";
pub const POSITION_COL: &str = "seq_start_position";
pub const REF_ALLELE_COL: &str = "ref_allele";
pub const ALT_ALLELE_COL: &str = "alt_allele";
pub const ASSEMBLY_COL: &str = "genome_assembly";

pub const REQUIRED_COLUMNS: [&str; 5] = [
    CHROMOSOME_COL,
    POSITION_COL,
    REF_ALLELE_COL,
    ALT_ALLELE_COL,
    ASSEMBLY_COL,
];

/// The four columns that locate a variant. Rows with all of them empty are filler.
pub const LOCUS_COLUMNS: [&str; 4] = [CHROMOSOME_COL, POSITION_COL, REF_ALLELE_COL, ALT_ALLELE_COL];

/// Marks an allele with no bases (insertion ref, deletion alt).
pub const PLACEHOLDER: char = '-';

/// Stand-in reference base used to anchor insertions in VCF-style records.
pub const ANCHOR_BASE: &str = "N";

pub const CHR_PREFIX: &str = "chr";

/// Assembly labels are matched case-insensitively against the start of the value.
pub const ACCEPTED_ASSEMBLIES: [&str; 3] = ["hg38", "grch38", "38"];

pub const VCF_HEADER: &str = "#chrom\tpos\tid\tref\talt\tqual\tfilter\tinfo";
pub const ENSEMBL_HEADER: &str = "#chrom\tpos\tend\tref/alt\tstrand\tid";

pub const VCF_SUFFIX: &str = "vcf";
pub const ENSEMBL_SUFFIX: &str = "ensembl";
