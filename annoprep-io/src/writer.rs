use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use annoprep_core::OutputFormat;

use crate::error::Result;

///
/// Path of the output file for `format`, written next to the input: `<input>.<suffix>`.
///
pub fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
    append_suffix(input, format.suffix())
}

///
/// Append `.suffix` to the full file name, keeping any existing extensions.
///
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

///
/// Buffered writer for one output file. The header line is written on creation.
///
pub struct RecordWriter {
    format: OutputFormat,
    path: PathBuf,
    writer: BufWriter<File>,
    written: usize,
}

impl RecordWriter {
    pub fn create(path: &Path, format: OutputFormat) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{}", format.header())?;

        Ok(RecordWriter {
            format,
            path: path.to_path_buf(),
            writer,
            written: 0,
        })
    }

    pub fn write_record(&mut self, record: &str) -> Result<()> {
        writeln!(self.writer, "{}", record)?;
        self.written += 1;
        Ok(())
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of data records written so far, header excluded.
    pub fn written(&self) -> usize {
        self.written
    }

    ///
    /// Flush and close the file, returning its path and record count.
    ///
    pub fn finish(mut self) -> Result<(PathBuf, usize)> {
        self.writer.flush()?;
        Ok((self.path, self.written))
    }
}
