use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use annoprep_annotate::{AnnotationConfig, annotate_prepared};
use annoprep_core::OutputFormat;

use crate::logging::{init_logging, log_path};
use crate::shared::{config_path, formats, input};

pub fn load_config(path: &Path) -> Result<AnnotationConfig> {
    let config = AnnotationConfig::try_from(path)
        .with_context(|| format!("Failed to read annotation config {}", path.display()))?;
    info!("Loaded annotation config {:?}", path);
    config.validate()?;
    Ok(config)
}

/// Annotate the prepared files; tool output is appended to `tool_log`.
pub fn annotate_and_report(
    config: &AnnotationConfig,
    input: &Path,
    formats: &[OutputFormat],
    tool_log: &Path,
) -> Result<()> {
    eprintln!("Annotating: {}", input.display());
    let start = Instant::now();

    let results = annotate_prepared(config, input, formats, Some(tool_log))
        .with_context(|| format!("Annotation of {} failed", input.display()))?;

    for path in &results {
        eprintln!("  wrote {}", path.display());
    }
    info!(
        "Annotation of {:?} finished with {} results files",
        input,
        results.len()
    );
    eprintln!("  finished in {:.1}s", start.elapsed().as_secs_f64());

    Ok(())
}

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let input = input(matches)?;
    let log_file = log_path(matches, input);
    init_logging(&log_file)?;

    let config = load_config(config_path(matches)?)?;
    annotate_and_report(&config, input, &formats(matches)?, &log_file)
}
