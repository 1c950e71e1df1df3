use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use annoprep_core::{OutputFormat, RawRow, RejectionKind, RoutingPolicy, classify_row, is_blank};

use crate::dedup::DedupStats;
use crate::error::Result;
use crate::writer::{RecordWriter, output_path};

/// One output file produced while preparing an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedOutput {
    pub format: OutputFormat,
    pub path: PathBuf,
    /// Records written before deduplication.
    pub written: usize,
    pub dedup: Option<DedupStats>,
}

impl PreparedOutput {
    /// Records left in the file after deduplication, or as written if it has not run.
    pub fn records(&self) -> usize {
        self.dedup.map(|stats| stats.after).unwrap_or(self.written)
    }
}

/// Per-input counters collected while rows flow through a [ProcessingContext].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepSummary {
    pub input: PathBuf,
    pub rows_read: usize,
    pub blank_rows: usize,
    pub rejected: BTreeMap<RejectionKind, usize>,
    pub outputs: Vec<PreparedOutput>,
}

impl PrepSummary {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn output(&self, format: OutputFormat) -> Option<&PreparedOutput> {
        self.outputs.iter().find(|output| output.format == format)
    }
}

///
/// Everything needed to turn the rows of one input file into output records.
///
/// The context owns both output writers for its whole lifetime, so they are
/// closed on every exit path; [ProcessingContext::finish] flushes them and
/// reports any write error.
///
pub struct ProcessingContext {
    input: PathBuf,
    policy: RoutingPolicy,
    vcf: RecordWriter,
    ensembl: RecordWriter,
    rows_read: usize,
    blank_rows: usize,
    rejected: BTreeMap<RejectionKind, usize>,
}

impl ProcessingContext {
    ///
    /// Create both output files next to `input` and write their headers.
    ///
    pub fn open(input: &Path, policy: RoutingPolicy) -> Result<Self> {
        let vcf = RecordWriter::create(&output_path(input, OutputFormat::Vcf), OutputFormat::Vcf)?;
        let ensembl = RecordWriter::create(
            &output_path(input, OutputFormat::Ensembl),
            OutputFormat::Ensembl,
        )?;

        Ok(ProcessingContext {
            input: input.to_path_buf(),
            policy,
            vcf,
            ensembl,
            rows_read: 0,
            blank_rows: 0,
            rejected: BTreeMap::new(),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn policy(&self) -> RoutingPolicy {
        self.policy
    }

    ///
    /// Classify one row and write it to its output file.
    ///
    /// Rejected rows are logged and counted. Only write failures are returned.
    ///
    pub fn process_row(&mut self, row: &RawRow) -> Result<()> {
        self.rows_read += 1;

        if is_blank(row) {
            self.blank_rows += 1;
            debug!("Skipping empty row at line {} of {:?}", row.line(), self.input);
            return Ok(());
        }

        match classify_row(row, self.policy) {
            Ok(classified) => {
                let record = classified.to_record();
                self.writer_mut(classified.format).write_record(&record)
            }
            Err(rejection) => {
                warn!(
                    "Rejected line {} of {:?}: {} : {}",
                    row.line(),
                    self.input,
                    rejection,
                    row
                );
                *self.rejected.entry(rejection.kind()).or_insert(0) += 1;
                Ok(())
            }
        }
    }

    ///
    /// Count a record the delimited reader could not decode.
    ///
    pub fn reject_unreadable(&mut self, error: &csv::Error) {
        self.rows_read += 1;
        warn!("Skipping unreadable record in {:?}: {}", self.input, error);
        *self.rejected.entry(RejectionKind::Unparseable).or_insert(0) += 1;
    }

    fn writer_mut(&mut self, format: OutputFormat) -> &mut RecordWriter {
        match format {
            OutputFormat::Vcf => &mut self.vcf,
            OutputFormat::Ensembl => &mut self.ensembl,
        }
    }

    ///
    /// Flush both output files and return the counters.
    ///
    pub fn finish(self) -> Result<PrepSummary> {
        let mut outputs = Vec::with_capacity(2);
        for writer in [self.vcf, self.ensembl] {
            let format = writer.format();
            let (path, written) = writer.finish()?;
            outputs.push(PreparedOutput {
                format,
                path,
                written,
                dedup: None,
            });
        }

        Ok(PrepSummary {
            input: self.input,
            rows_read: self.rows_read,
            blank_rows: self.blank_rows,
            rejected: self.rejected,
            outputs,
        })
    }
}
