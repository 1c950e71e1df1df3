use std::fmt::{self, Display};
use std::sync::Arc;

use fxhash::FxHashMap as HashMap;

///
/// Ordered column names of a delimited input file, shared by all of its rows.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowHeader {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl RowHeader {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .collect();

        // first occurrence wins on duplicated column names
        let mut index = HashMap::default();
        for (i, name) in names.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }

        RowHeader { names, index }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    ///
    /// Return the subset of `required` that is not present in this header.
    ///
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .filter(|name| !self.contains(name))
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

///
/// One record of a delimited input file, keyed by its header.
///
#[derive(Debug, Clone)]
pub struct RawRow {
    header: Arc<RowHeader>,
    values: Vec<String>,
    line: u64,
}

impl RawRow {
    pub fn new(header: Arc<RowHeader>, values: Vec<String>, line: u64) -> Self {
        RawRow {
            header,
            values,
            line,
        }
    }

    ///
    /// Build a standalone row from `(column, value)` pairs.
    ///
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let header = RowHeader::new(pairs.iter().map(|(name, _)| *name));
        let values = pairs.iter().map(|(_, value)| value.to_string()).collect();
        RawRow::new(Arc::new(header), values, 0)
    }

    ///
    /// Get the trimmed value of a column. Absent columns and empty cells are `None`.
    ///
    pub fn get(&self, name: &str) -> Option<&str> {
        self.header
            .position(name)
            .and_then(|i| self.values.get(i))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn header(&self) -> &RowHeader {
        &self.header
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// 1-based line number in the source file, 0 when not read from a file.
    pub fn line(&self) -> u64 {
        self.line
    }
}

impl Display for RawRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, name) in self.header.names().iter().enumerate() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let value = self.values.get(i).map(String::as_str).unwrap_or("");
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn row() -> RawRow {
        RawRow::from_pairs(&[
            ("chromosome", " 7 "),
            ("seq_start_position", "140753336"),
            ("ref_allele", ""),
            ("alt_allele", "T"),
        ])
    }

    #[rstest]
    fn test_get_trims_values(row: RawRow) {
        assert_eq!(row.get("chromosome"), Some("7"));
        assert_eq!(row.get("seq_start_position"), Some("140753336"));
    }

    #[rstest]
    fn test_get_empty_and_absent_are_none(row: RawRow) {
        assert_eq!(row.get("ref_allele"), None);
        assert_eq!(row.get("genome_assembly"), None);
    }

    #[rstest]
    fn test_display_keeps_header_order(row: RawRow) {
        assert_eq!(
            row.to_string(),
            "chromosome= 7 , seq_start_position=140753336, ref_allele=, alt_allele=T"
        );
    }

    #[rstest]
    fn test_short_row_values_are_none() {
        let header = Arc::new(RowHeader::new(["chromosome", "alt_allele"]));
        let row = RawRow::new(header, vec!["1".to_string()], 3);
        assert_eq!(row.get("chromosome"), Some("1"));
        assert_eq!(row.get("alt_allele"), None);
        assert_eq!(row.line(), 3);
    }

    #[rstest]
    fn test_header_missing_columns() {
        let header = RowHeader::new(["chromosome", " ref_allele", "alt_allele"]);
        assert_eq!(
            header.missing(&["chromosome", "ref_allele", "genome_assembly"]),
            vec!["genome_assembly"]
        );
    }
}
