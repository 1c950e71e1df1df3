//! Integration tests: delimited variant table → deduplicated VCF/Ensembl files

use std::fs;
use std::path::{Path, PathBuf};

use annoprep_core::{OutputFormat, RejectionKind, RoutingPolicy};
use annoprep_io::{DedupStats, PrepIoError, dedup_in_place, prepare_file};
use pretty_assertions::assert_eq;
use rstest::*;

const VCF_HEADER: &str = "#chrom\tpos\tid\tref\talt\tqual\tfilter\tinfo";
const ENSEMBL_HEADER: &str = "#chrom\tpos\tend\tref/alt\tstrand\tid";

fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/variants")
        .join(file_name)
}

/// Copy a fixture into a scratch directory; outputs are written next to the input.
fn stage_fixture(dir: &Path, file_name: &str) -> PathBuf {
    let staged = dir.join(file_name);
    fs::copy(get_test_path(file_name), &staged).unwrap();
    staged
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[rstest]
#[case("variants.tsv")]
#[case("variants.csv")]
fn test_prepare_fixture(#[case] file_name: &str) {
    let dir = tempfile::tempdir().unwrap();
    let input = stage_fixture(dir.path(), file_name);

    let summary = prepare_file(&input, RoutingPolicy::default()).unwrap();

    assert_eq!(summary.rows_read, 10);
    assert_eq!(summary.blank_rows, 1);
    assert_eq!(summary.rejected_total(), 4);
    for kind in [
        RejectionKind::Incomplete,
        RejectionKind::LegacyAssembly,
        RejectionKind::Unparseable,
        RejectionKind::UnsupportedAlleles,
    ] {
        assert_eq!(summary.rejected.get(&kind), Some(&1), "{}", kind);
    }

    let vcf = summary.output(OutputFormat::Vcf).unwrap();
    assert_eq!(vcf.written, 3);
    assert_eq!(vcf.dedup, Some(DedupStats { before: 3, after: 2 }));
    assert_eq!(
        read_lines(&vcf.path),
        vec![
            VCF_HEADER,
            "chr4\t1804915\tchr4_1804915_A_G\tA\tG\t.\t.\t.",
            "chrX\t153296777\tchrX_153296777_G_A\tG\tA\t.\t.\t.",
        ]
    );

    let ensembl = summary.output(OutputFormat::Ensembl).unwrap();
    assert_eq!(ensembl.records(), 2);
    assert_eq!(
        read_lines(&ensembl.path),
        vec![
            ENSEMBL_HEADER,
            "chr19\t10491677\t10491677\tT/-\t+\tchr19_10491677_T_-",
            "chr7\t55181319\t55181318\t-/GGT\t+\tchr7_55181319-55181318_-_GGT",
        ]
    );
}

#[rstest]
fn test_substitution_and_insertion_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pair.tsv");
    fs::write(
        &input,
        "chromosome\tseq_start_position\tref_allele\talt_allele\tgenome_assembly\n\
         1\t10000\tA\tT\tGRCh38\n\
         1\t10000\t-\tTT\tGRCh38\n",
    )
    .unwrap();

    let summary = prepare_file(&input, RoutingPolicy::PlaceholdersToEnsembl).unwrap();

    assert_eq!(
        read_lines(&summary.output(OutputFormat::Vcf).unwrap().path),
        vec![VCF_HEADER, "chr1\t10000\tchr1_10000_A_T\tA\tT\t.\t.\t."]
    );
    assert_eq!(
        read_lines(&summary.output(OutputFormat::Ensembl).unwrap().path),
        vec![
            ENSEMBL_HEADER,
            "chr1\t10000\t9999\t-/TT\t+\tchr1_10000-9999_-_TT"
        ]
    );
}

#[rstest]
fn test_anchor_insertions_policy_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pair.tsv");
    fs::write(
        &input,
        "chromosome\tseq_start_position\tref_allele\talt_allele\tgenome_assembly\n\
         1\t10000\tA\tT\tGRCh38\n\
         1\t10000\t-\tTT\tGRCh38\n",
    )
    .unwrap();

    let summary = prepare_file(&input, RoutingPolicy::AnchorInsertions).unwrap();

    assert_eq!(
        read_lines(&summary.output(OutputFormat::Vcf).unwrap().path),
        vec![
            VCF_HEADER,
            "chr1\t10000\tchr1_10000-9999_-_TT\tN\tNTT\t.\t.\t.",
            "chr1\t10000\tchr1_10000_A_T\tA\tT\t.\t.\t.",
        ]
    );
    assert_eq!(summary.output(OutputFormat::Ensembl).unwrap().records(), 0);
}

#[rstest]
fn test_prepare_twice_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let input = stage_fixture(dir.path(), "variants.tsv");

    let first = prepare_file(&input, RoutingPolicy::default()).unwrap();
    let vcf_first = fs::read(&first.output(OutputFormat::Vcf).unwrap().path).unwrap();

    let second = prepare_file(&input, RoutingPolicy::default()).unwrap();
    let vcf_path = &second.output(OutputFormat::Vcf).unwrap().path;
    assert_eq!(fs::read(vcf_path).unwrap(), vcf_first);

    // an extra pass over the finished file is a no-op
    let stats = dedup_in_place(vcf_path).unwrap();
    assert_eq!(stats.removed(), 0);
    assert_eq!(fs::read(vcf_path).unwrap(), vcf_first);
}

#[rstest]
fn test_missing_column_creates_no_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.tsv");
    fs::write(
        &input,
        "chromosome\tseq_start_position\tref_allele\talt_allele\n1\t5\tA\tT\n",
    )
    .unwrap();

    let result = prepare_file(&input, RoutingPolicy::default());

    assert!(matches!(result, Err(PrepIoError::MissingColumns { .. })));
    assert!(!dir.path().join("broken.tsv.vcf").exists());
    assert!(!dir.path().join("broken.tsv.ensembl").exists());
}
