use std::path::Path;

use log::info;

use annoprep_core::RoutingPolicy;

use crate::context::{PrepSummary, ProcessingContext};
use crate::dedup::dedup_in_place;
use crate::error::Result;
use crate::reader::DelimitedReader;

///
/// Turn one delimited input file into deduplicated VCF-style and Ensembl-style files.
///
/// The input header is checked before any output is created. Each row is then
/// classified and written, rejected rows are logged and skipped, and finally
/// both outputs are deduplicated in place.
///
/// # Arguments
/// - input: path to a `.tsv`, `.csv` or gzipped variant table
/// - policy: where rows with placeholder alleles are written
pub fn prepare_file(input: &Path, policy: RoutingPolicy) -> Result<PrepSummary> {
    let reader = DelimitedReader::from_path(input)?;
    info!("Writing {:?} to VCF and Ensembl format", input);

    let mut ctx = ProcessingContext::open(input, policy)?;
    for row in reader {
        match row {
            Ok(row) => ctx.process_row(&row)?,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => ctx.reject_unreadable(&e),
        }
    }
    let mut summary = ctx.finish()?;

    info!(
        "The file {:?} has {} data rows ({} rejected, {} empty)",
        input,
        summary.rows_read,
        summary.rejected_total(),
        summary.blank_rows
    );

    info!("Sorting and removing duplicates");
    for output in summary.outputs.iter_mut() {
        let stats = dedup_in_place(&output.path)?;
        info!(
            "{:?}: {} records, {} duplicates removed",
            output.path,
            stats.after,
            stats.removed()
        );
        output.dedup = Some(stats);
    }

    Ok(summary)
}
