use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use flate2::read::MultiGzDecoder;
use log::info;

use annoprep_core::consts::REQUIRED_COLUMNS;
use annoprep_core::models::{RawRow, RowHeader};

use crate::error::{PrepIoError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Choose the field delimiter from the file name: comma for `.csv`, tab otherwise.
///
/// A trailing `.gz` is ignored when looking at the suffix.
///
pub fn delimiter_for(path: &Path) -> u8 {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(name);

    if name.ends_with(".csv") {
        b','
    } else {
        if !name.ends_with(".tsv") {
            info!("File {:?} is not suffixed as tsv, reading it as tab-separated", path);
        }
        b'\t'
    }
}

///
/// Streams [RawRow]s out of a delimited file with a header line.
///
/// Records that the csv layer cannot decode are yielded as errors so the caller
/// can skip them; the header itself is checked for the required columns when the
/// reader is opened.
///
pub struct DelimitedReader {
    header: Arc<RowHeader>,
    records: csv::StringRecordsIntoIter<BufReader<Box<dyn Read>>>,
}

impl DelimitedReader {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter_for(path))
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header = RowHeader::new(csv_reader.headers()?.iter());

        let missing = header.missing(&REQUIRED_COLUMNS);
        if !missing.is_empty() {
            return Err(PrepIoError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing.into_iter().map(String::from).collect(),
            });
        }

        Ok(DelimitedReader {
            header: Arc::new(header),
            records: csv_reader.into_records(),
        })
    }

    pub fn header(&self) -> &RowHeader {
        &self.header
    }
}

impl Iterator for DelimitedReader {
    type Item = std::result::Result<RawRow, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(record.map(|record| {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let values = record.iter().map(String::from).collect();
            RawRow::new(Arc::clone(&self.header), values, line)
        }))
    }
}
