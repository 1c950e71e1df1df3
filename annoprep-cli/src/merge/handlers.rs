use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use annoprep_annotate::runner::ANNOTATION_SUFFIX;
use annoprep_annotate::{merge_annotations, merged_output_path};
use annoprep_core::OutputFormat;
use annoprep_io::{append_suffix, output_path};

use crate::consts::OUTPUT_ARG;
use crate::logging::{init_logging, log_path};
use crate::shared::input;

pub fn run_merge(matches: &ArgMatches) -> Result<()> {
    let input = input(matches)?;
    init_logging(&log_path(matches, input))?;

    let output = matches
        .get_one::<PathBuf>(OUTPUT_ARG)
        .cloned()
        .unwrap_or_else(|| merged_output_path(input));

    let annotations: Vec<PathBuf> = OutputFormat::ALL
        .iter()
        .map(|&format| append_suffix(&output_path(input, format), ANNOTATION_SUFFIX))
        .filter(|path| path.exists())
        .collect();

    if annotations.is_empty() {
        anyhow::bail!(
            "No annotation results found next to {}; run `annotate` first",
            input.display()
        );
    }

    info!("Merging {} annotation files for {:?}", annotations.len(), input);
    eprintln!("Merging annotations into: {}", output.display());
    let summary = merge_annotations(input, &annotations, &output)
        .with_context(|| format!("Failed to merge annotations for {}", input.display()))?;
    eprintln!(
        "  {} rows annotated, {} without annotation, {} skipped",
        summary.annotated, summary.unannotated, summary.skipped
    );

    Ok(())
}
