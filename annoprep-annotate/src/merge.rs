//! Join annotation results back onto the source rows they came from.
use std::io::BufRead;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap;
use log::{debug, info};

use annoprep_core::{identify_row, is_blank};
use annoprep_io::{DelimitedReader, append_suffix, get_dynamic_reader};

use crate::error::{AnnotateError, AnnotateResult};

pub const MERGED_SUFFIX: &str = "merged.tsv";

const METADATA_PREFIX: &str = "##";
const HEADER_PREFIX: char = '#';

pub fn merged_output_path(input: &Path) -> PathBuf {
    append_suffix(input, MERGED_SUFFIX)
}

///
/// Annotation result lines keyed by the identifier in their first column.
///
#[derive(Debug, Default)]
pub struct AnnotationTable {
    columns: Vec<String>,
    rows: FxHashMap<String, Vec<Vec<String>>>,
    lines: usize,
}

impl AnnotationTable {
    ///
    /// Read a tab-separated annotation results file.
    ///
    /// Lines starting with `##` are metadata and skipped. The first line
    /// starting with a single `#` names the columns.
    ///
    pub fn from_path(path: &Path) -> AnnotateResult<Self> {
        let reader = get_dynamic_reader(path)?;
        let mut table = AnnotationTable::default();
        let mut seen_header = false;

        for line in reader.lines() {
            let line = line?;
            if line.starts_with(METADATA_PREFIX) || line.trim().is_empty() {
                continue;
            }

            if !seen_header {
                let Some(header) = line.strip_prefix(HEADER_PREFIX) else {
                    return Err(AnnotateError::InvalidAnnotationFile(path.to_path_buf()));
                };
                // first column is the identifier
                table.columns = header.split('\t').skip(1).map(String::from).collect();
                seen_header = true;
                continue;
            }

            let mut fields = line.split('\t');
            let Some(identifier) = fields.next() else {
                continue;
            };
            table
                .rows
                .entry(identifier.to_string())
                .or_default()
                .push(fields.map(String::from).collect());
            table.lines += 1;
        }

        if !seen_header {
            return Err(AnnotateError::InvalidAnnotationFile(path.to_path_buf()));
        }

        debug!("Loaded {} annotation lines from {:?}", table.lines, path);
        Ok(table)
    }

    ///
    /// Fold another results file into this one. Both must share columns.
    ///
    pub fn absorb(&mut self, other: AnnotationTable, path: &Path) -> AnnotateResult<()> {
        if self.columns.is_empty() && self.rows.is_empty() {
            *self = other;
            return Ok(());
        }
        if self.columns != other.columns {
            return Err(AnnotateError::HeaderMismatch(path.to_path_buf()));
        }

        for (identifier, mut lines) in other.rows {
            self.rows.entry(identifier).or_default().append(&mut lines);
        }
        self.lines += other.lines;
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn get(&self, identifier: &str) -> &[Vec<String>] {
        self.rows.get(identifier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub rows_read: usize,
    pub annotated: usize,
    pub unannotated: usize,
    pub skipped: usize,
    pub lines_written: usize,
}

fn padded<'a>(values: &'a [String], width: usize) -> impl Iterator<Item = &'a str> {
    values
        .iter()
        .map(String::as_str)
        .chain(std::iter::repeat(""))
        .take(width)
}

///
/// Write `output` with every accepted source row of `input` joined to its
/// annotation lines.
///
/// A source row with several annotation lines is repeated once per line.
/// Accepted rows without annotations are kept with empty annotation cells.
/// Rows the normalizer rejects are left out.
///
/// # Arguments
/// - input: the source variant table
/// - annotations: annotation results files, all with the same columns
/// - output: path of the merged table
///
pub fn merge_annotations(
    input: &Path,
    annotations: &[PathBuf],
    output: &Path,
) -> AnnotateResult<MergeSummary> {
    if annotations.is_empty() {
        return Err(AnnotateError::NoAnnotations);
    }

    let mut table = AnnotationTable::default();
    for path in annotations {
        table.absorb(AnnotationTable::from_path(path)?, path)?;
    }

    let reader = DelimitedReader::from_path(input)?;
    let source_width = reader.header().len();
    let annotation_width = table.columns().len();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(false)
        .from_path(output)?;
    writer.write_record(reader.header().names().iter().chain(table.columns()))?;

    let mut summary = MergeSummary {
        output: output.to_path_buf(),
        ..Default::default()
    };

    for record in reader {
        let row = match record {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(_) => {
                summary.skipped += 1;
                continue;
            }
        };
        if is_blank(&row) {
            continue;
        }
        summary.rows_read += 1;

        let Ok(identifier) = identify_row(&row) else {
            summary.skipped += 1;
            continue;
        };

        let lines = table.get(identifier.as_str());
        if lines.is_empty() {
            let empty = std::iter::repeat_n("", annotation_width);
            writer.write_record(padded(row.values(), source_width).chain(empty))?;
            summary.unannotated += 1;
            summary.lines_written += 1;
            continue;
        }

        for annotation in lines {
            writer.write_record(
                padded(row.values(), source_width).chain(padded(annotation, annotation_width)),
            )?;
            summary.lines_written += 1;
        }
        summary.annotated += 1;
    }

    writer.flush()?;

    info!(
        "Merged {} annotated and {} unannotated rows of {:?} into {:?}",
        summary.annotated, summary.unannotated, input, output
    );

    Ok(summary)
}
