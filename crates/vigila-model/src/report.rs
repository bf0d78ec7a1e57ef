use serde::{Deserialize, Serialize};

/// Consolidated case count for one event code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCount {
    pub event_code: String,
    pub count: usize,
}

/// Per-run accounting of what each stage kept and dropped.
///
/// Unparsable rows are dropped silently from processing, but every drop
/// is counted here so callers and tests can audit the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidateReport {
    /// Number of input sources merged.
    pub sources: usize,
    /// Rows read across all sources before any cleaning.
    pub rows_read: usize,
    /// Rows dropped because the identification field was empty.
    pub rows_missing_identifier: usize,
    /// Rows dropped because the identification field held no digits.
    pub rows_invalid_identifier: usize,
    /// Rows dropped because the notification date failed every parse
    /// strategy.
    pub rows_invalid_date: usize,
    /// Rows removed by the suspected-classification filter.
    pub rows_suspected: usize,
    /// Distinct episodes found by temporal grouping.
    pub episodes: usize,
    /// Rows in the consolidated output (one per episode).
    pub consolidated: usize,
}

impl ConsolidateReport {
    /// Total rows dropped before grouping, for audit summaries.
    #[must_use]
    pub fn rows_dropped(&self) -> usize {
        self.rows_missing_identifier
            + self.rows_invalid_identifier
            + self.rows_invalid_date
            + self.rows_suspected
    }
}
