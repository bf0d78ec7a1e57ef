//! Per-event case counting over the consolidated output.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use vigila_model::{CanonicalField, EventCount};

use crate::data_utils::column_value_string;

/// Counts consolidated records per event code. An empty or missing
/// event code forms its own group. Entries come back sorted by count
/// descending, then event code, for deterministic presentation.
#[must_use]
pub fn summarize_events(consolidated: &DataFrame) -> Vec<EventCount> {
    let column = CanonicalField::EventCode.column_name();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for idx in 0..consolidated.height() {
        let code = column_value_string(consolidated, column, idx);
        *counts.entry(code).or_insert(0) += 1;
    }
    let mut entries: Vec<EventCount> = counts
        .into_iter()
        .map(|(event_code, count)| EventCount { event_code, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.event_code.cmp(&b.event_code)));
    entries
}

#[cfg(test)]
mod tests {
    use super::summarize_events;
    use polars::prelude::{DataFrame, NamedFrom, Series};

    fn frame(codes: Vec<&str>) -> DataFrame {
        DataFrame::new(vec![Series::new("cod_eve".into(), codes).into()]).unwrap()
    }

    #[test]
    fn counts_per_event_sorted_by_count() {
        let summary = summarize_events(&frame(vec!["EVT2", "EVT1", "EVT2", "", "EVT2"]));
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].event_code, "EVT2");
        assert_eq!(summary[0].count, 3);
        // empty code is its own group
        assert!(summary.iter().any(|e| e.event_code.is_empty() && e.count == 1));
    }

    #[test]
    fn counts_conserve_rows() {
        let df = frame(vec!["A", "B", "A", "C", "C", "C"]);
        let summary = summarize_events(&df);
        let total: usize = summary.iter().map(|e| e.count).sum();
        assert_eq!(total, df.height());
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert!(summarize_events(&frame(Vec::new())).is_empty());
    }
}
