//! Unification of normalized sources into one frame.

use std::collections::BTreeSet;

use anyhow::Result;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use vigila_model::SourceTable;

/// Concatenates the sources into one all-text frame.
///
/// Columns are unioned in first-appearance order across sources; a
/// column absent from a source is empty for that source's rows. Row
/// order is source order, then within-source order. No deduplication
/// happens here.
pub fn merge_sources(tables: &[SourceTable]) -> Result<DataFrame> {
    let mut union: Vec<String> = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for table in tables {
        for header in &table.headers {
            if seen.insert(header.as_str()) {
                union.push(header.clone());
            }
        }
    }

    let total_rows: usize = tables.iter().map(SourceTable::row_count).sum();
    let mut columns: Vec<Column> = Vec::with_capacity(union.len());
    for name in &union {
        let mut values: Vec<String> = Vec::with_capacity(total_rows);
        for table in tables {
            match table.column_index(name) {
                Some(index) => {
                    for row in 0..table.row_count() {
                        values.push(table.cell(row, index).to_string());
                    }
                }
                None => values.extend(std::iter::repeat_n(String::new(), table.row_count())),
            }
        }
        columns.push(Series::new(name.as_str().into(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}
