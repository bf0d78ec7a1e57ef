use serde::{Deserialize, Serialize};

/// One already-parsed input source: an ordered header row plus text
/// cells. Cells beyond a row's length read as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTable {
    /// Display name of the source (usually the file stem).
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Index of the first column with the given name, if present.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell value at (row, column index), empty when absent.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::SourceTable;

    #[test]
    fn cell_reads_empty_for_short_rows() {
        let mut table = SourceTable::new("a", vec!["x".into(), "y".into()]);
        table.push_row(vec!["1".into()]);
        assert_eq!(table.cell(0, 0), "1");
        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.cell(5, 0), "");
    }

    #[test]
    fn column_index_returns_first_occurrence() {
        let table = SourceTable::new("a", vec!["x".into(), "y".into(), "x".into()]);
        assert_eq!(table.column_index("x"), Some(0));
        assert!(table.has_column("y"));
        assert!(!table.has_column("z"));
    }
}
