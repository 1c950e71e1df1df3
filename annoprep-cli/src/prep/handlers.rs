use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use annoprep_core::RoutingPolicy;
use annoprep_io::{PrepSummary, prepare_file};

use crate::logging::{init_logging, log_path};
use crate::shared::{input, policy};

/// Prepare one input and report the result on stderr.
pub fn prepare_and_report(input: &Path, policy: RoutingPolicy) -> Result<PrepSummary> {
    eprintln!("Preparing: {}", input.display());
    let start = Instant::now();

    let summary = prepare_file(input, policy)
        .with_context(|| format!("Failed to prepare {}", input.display()))?;

    info!(
        "Prepared {:?} in {:.1}s",
        input,
        start.elapsed().as_secs_f64()
    );
    eprintln!(
        "  {} rows read, {} rejected, in {:.1}s",
        summary.rows_read,
        summary.rejected_total(),
        start.elapsed().as_secs_f64()
    );
    for output in &summary.outputs {
        eprintln!("  wrote {} ({} records)", output.path.display(), output.records());
    }

    Ok(summary)
}

pub fn run_prep(matches: &ArgMatches) -> Result<()> {
    let input = input(matches)?;
    init_logging(&log_path(matches, input))?;

    prepare_and_report(input, policy(matches))?;

    Ok(())
}
