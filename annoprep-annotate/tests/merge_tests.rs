//! Integration tests: source table + annotation results → merged table
use std::fs;
use std::path::{Path, PathBuf};

use annoprep_annotate::{AnnotateError, merge_annotations, merged_output_path};
use pretty_assertions::assert_eq;
use rstest::*;

fn get_test_path(dir: &str, file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data")
        .join(dir)
        .join(file_name)
}

fn stage(dir: &Path) -> (PathBuf, Vec<PathBuf>) {
    let input = dir.join("variants.tsv");
    fs::copy(get_test_path("variants", "variants.tsv"), &input).unwrap();

    let annotations = ["variants.tsv.vcf.ANN", "variants.tsv.ensembl.ANN"]
        .iter()
        .map(|name| {
            let staged = dir.join(name);
            fs::copy(get_test_path("annotate", name), &staged).unwrap();
            staged
        })
        .collect();

    (input, annotations)
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.split('\t').map(String::from).collect())
        .collect()
}

#[rstest]
fn test_merge_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let (input, annotations) = stage(dir.path());
    let output = merged_output_path(&input);

    let summary = merge_annotations(&input, &annotations, &output).unwrap();

    assert_eq!(output, dir.path().join("variants.tsv.merged.tsv"));
    assert_eq!(summary.rows_read, 9);
    assert_eq!(summary.annotated, 3);
    assert_eq!(summary.unannotated, 2);
    assert_eq!(summary.skipped, 4);
    assert_eq!(summary.lines_written, 7);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 8);

    // 9 source columns followed by 8 annotation columns
    let header = &rows[0];
    assert_eq!(header.len(), 17);
    assert_eq!(header[0], "Model_ID");
    assert_eq!(header[9], "Location");
    assert_eq!(header[16], "Extra");
    assert!(rows.iter().all(|row| row.len() == 17));

    let find = |model: &str, symbol: &str| -> Vec<&Vec<String>> {
        rows.iter()
            .skip(1)
            .filter(|row| row[0] == model && row[6] == symbol)
            .collect()
    };

    let keap1 = find("LCF16", "KEAP1");
    assert_eq!(keap1.len(), 1);
    assert_eq!(keap1[0][14], "frameshift_variant");

    // both samples carrying the FGFR3 variant gain both transcript lines
    for model in ["LCF16", "LCF22"] {
        let fgfr3 = find(model, "FGFR3");
        assert_eq!(fgfr3.len(), 2, "{}", model);
        assert_eq!(fgfr3[0][12], "ENST00000260795");
        assert_eq!(fgfr3[1][12], "NR_148971.1");
    }

    // accepted but unannotated rows keep empty annotation cells
    for (model, symbol) in [("LCF22", "EGFR"), ("LCF40", "MECP2")] {
        let unannotated = find(model, symbol);
        assert_eq!(unannotated.len(), 1, "{}", symbol);
        assert!(unannotated[0][9..].iter().all(String::is_empty));
    }

    // rejected rows are absent
    assert!(find("LCF30", "KRAS").is_empty());
    assert!(find("LCF31", "TP53").is_empty());
}

#[rstest]
fn test_merge_rejects_mismatched_results() {
    let dir = tempfile::tempdir().unwrap();
    let (input, mut annotations) = stage(dir.path());
    let odd = dir.path().join("odd.ANN");
    fs::write(&odd, "#Uploaded_variation\tLocation\n").unwrap();
    annotations.push(odd);

    let result = merge_annotations(&input, &annotations, &merged_output_path(&input));

    assert!(matches!(result, Err(AnnotateError::HeaderMismatch(_))));
}

#[rstest]
fn test_merge_joins_insertions_from_either_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pair.tsv");
    fs::write(
        &input,
        "chromosome\tseq_start_position\tref_allele\talt_allele\tgenome_assembly\n\
         1\t10000\tA\tT\tGRCh38\n\
         1\t10000\t-\tTT\tGRCh38\n",
    )
    .unwrap();

    // insertions keep the same identifier whether they were prepared VCF-style or Ensembl-style
    let results = dir.path().join("pair.tsv.vcf.ANN");
    fs::write(
        &results,
        "#Uploaded_variation\tConsequence\n\
         chr1_10000_A_T\tmissense_variant\n\
         chr1_10000-9999_-_TT\tframeshift_variant\n",
    )
    .unwrap();
    let output = merged_output_path(&input);

    let summary = merge_annotations(&input, &[results], &output).unwrap();

    assert_eq!(summary.annotated, 2);
    assert_eq!(summary.unannotated, 0);
    assert_eq!(
        read_rows(&output)[1..]
            .iter()
            .map(|row| row[5].as_str())
            .collect::<Vec<_>>(),
        vec!["missense_variant", "frameshift_variant"]
    );
}
