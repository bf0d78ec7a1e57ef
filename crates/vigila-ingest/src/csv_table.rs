use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

use vigila_model::SourceTable;

const SNIFF_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Decodes raw file bytes, falling back to latin-1 when the content is
/// not valid UTF-8. Regional surveillance exports commonly arrive in
/// latin-1.
fn decode_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// Picks the delimiter with the most occurrences on the first
/// non-empty line, defaulting to a comma.
fn sniff_delimiter(text: &str) -> u8 {
    let first_line = text.lines().find(|line| !line.trim().is_empty());
    let Some(line) = first_line else {
        return b',';
    };
    let mut best = b',';
    let mut best_count = 0usize;
    for candidate in SNIFF_DELIMITERS {
        let count = line.bytes().filter(|&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Reads one delimited-text extract into a [`SourceTable`].
///
/// The first non-empty record supplies the headers (raw; header
/// normalization is the schema normalizer's job). Blank records are
/// skipped, short records are padded with empty cells, and overlong
/// records are truncated to the header width.
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read extract: {}", path.display()))?;
    let text = decode_bytes(bytes);
    let delimiter = sniff_delimiter(&text);
    debug!(
        path = %path.display(),
        delimiter = %(delimiter as char),
        "sniffed delimiter"
    );

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut table: Option<SourceTable> = None;
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        match table.as_mut() {
            None => table = Some(SourceTable::new(name.clone(), row)),
            Some(table) => {
                let width = table.headers.len();
                let mut cells = row;
                cells.resize(width, String::new());
                table.push_row(cells);
            }
        }
    }

    let Some(table) = table else {
        bail!("extract is empty: {}", path.display());
    };
    debug!(
        source = %table.name,
        columns = table.headers.len(),
        rows = table.row_count(),
        "ingested extract"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::{decode_bytes, sniff_delimiter};

    #[test]
    fn sniffs_semicolon_when_dominant() {
        assert_eq!(sniff_delimiter("a;b;c\n1;2;3\n"), b';');
        assert_eq!(sniff_delimiter("a,b,c\n"), b',');
        assert_eq!(sniff_delimiter("a\tb\tc\n"), b'\t');
        assert_eq!(sniff_delimiter("solo\n"), b',');
    }

    #[test]
    fn latin1_bytes_decode_without_loss() {
        // "año" in latin-1
        let decoded = decode_bytes(vec![b'a', 0xf1, b'o']);
        assert_eq!(decoded, "a\u{f1}o");
    }
}
