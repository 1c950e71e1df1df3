use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{PrepIoError, Result};

/// Data line counts around a deduplication pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DedupStats {
    pub before: usize,
    pub after: usize,
}

impl DedupStats {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

///
/// Remove duplicate data lines from an output file, keeping its header line.
///
/// Data lines are sorted bytewise and adjacent duplicates dropped, so the result
/// is independent of input order and a second pass changes nothing. The new
/// contents go to a temporary file in the same directory which then replaces the
/// original, keeping its permissions.
///
/// # Arguments
/// - path: a file whose first line is a header
pub fn dedup_in_place(path: &Path) -> Result<DedupStats> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Ok(DedupStats::default()),
    };

    let mut records = lines.collect::<std::io::Result<Vec<String>>>()?;
    let before = records.len();
    records.sort_unstable();
    records.dedup();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        writeln!(writer, "{}", header)?;
        for record in &records {
            writeln!(writer, "{}", record)?;
        }
        writer.flush()?;
    }
    // the temp file is created owner-only; keep the mode the output had
    tmp.as_file().set_permissions(fs::metadata(path)?.permissions())?;
    tmp.persist(path).map_err(|e| PrepIoError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    let stats = DedupStats {
        before,
        after: records.len(),
    };
    debug!(
        "Deduplicated {:?}: {} -> {} records",
        path, stats.before, stats.after
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const HEADER: &str = "#chrom\tpos\tid\tref\talt\tqual\tfilter\tinfo";

    fn write(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("variants.tsv.vcf");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[rstest]
    fn test_dedup_sorts_and_removes_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let contents = format!(
            "{HEADER}\n\
             chr7\t140753336\tchr7_140753336_A_T\tA\tT\t.\t.\t.\n\
             chr1\t10000\tchr1_10000_A_T\tA\tT\t.\t.\t.\n\
             chr7\t140753336\tchr7_140753336_A_T\tA\tT\t.\t.\t.\n"
        );
        let path = write(dir.path(), &contents);

        let stats = dedup_in_place(&path).unwrap();

        assert_eq!(stats, DedupStats { before: 3, after: 2 });
        assert_eq!(stats.removed(), 1);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format!(
                "{HEADER}\n\
                 chr1\t10000\tchr1_10000_A_T\tA\tT\t.\t.\t.\n\
                 chr7\t140753336\tchr7_140753336_A_T\tA\tT\t.\t.\t.\n"
            )
        );
    }

    #[rstest]
    fn test_dedup_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let contents = format!("{HEADER}\nb\na\nb\nc\na\n");
        let path = write(dir.path(), &contents);

        dedup_in_place(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        let stats = dedup_in_place(&path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(stats, DedupStats { before: 3, after: 3 });
    }

    #[rstest]
    fn test_dedup_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), &format!("{HEADER}\n"));

        let stats = dedup_in_place(&path).unwrap();

        assert_eq!(stats, DedupStats::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), format!("{HEADER}\n"));
    }

    #[rstest]
    fn test_dedup_empty_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "");

        assert_eq!(dedup_in_place(&path).unwrap(), DedupStats::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[cfg(unix)]
    #[rstest]
    fn test_dedup_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), &format!("{HEADER}\nb\na\nb\n"));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        dedup_in_place(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
