//! Notification-date resolution.
//!
//! Dates are parsed by an explicit ordered list of strategies; a row
//! that fails every strategy is dropped and counted. Real extracts mix
//! day-first and month-first spellings, so when a majority of rows
//! fail the standard (ISO then month-first) list the whole table is
//! re-parsed with day-first interpretation before giving up.
//!
//! Resolved dates live in a side vector aligned with the frame's rows;
//! they are never materialized as a column of any exposed table.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::{BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::debug;

use vigila_model::CanonicalField;

use crate::data_utils::column_value_string;

/// A unified frame with its row-aligned resolved dates.
#[derive(Debug, Clone)]
pub struct DatedFrame {
    pub data: DataFrame,
    pub dates: Vec<NaiveDate>,
}

const STANDARD_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m/%d/%Y %H:%M:%S",
    "%Y%m%d",
];

const DAYFIRST_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%Y %H:%M:%S",
    "%d-%b-%Y",
];

fn try_formats(value: &str, formats: &[&str]) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in formats {
        if fmt.contains("%H") {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Some(dt.date());
            }
        } else if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    None
}

/// Parses one date value with the standard strategy list.
#[must_use]
pub fn parse_notification_date(value: &str) -> Option<NaiveDate> {
    try_formats(value, &STANDARD_FORMATS)
}

/// Parses one date value with day-first interpretation.
#[must_use]
pub fn parse_notification_date_dayfirst(value: &str) -> Option<NaiveDate> {
    try_formats(value, &DAYFIRST_FORMATS)
}

/// Resolves the notification date of every row, dropping rows that
/// fail every strategy. Returns the filtered frame, its aligned dates,
/// and the number of dropped rows.
pub fn resolve_dates(data: DataFrame) -> Result<(DatedFrame, usize)> {
    let column = CanonicalField::NotificationDate.column_name();
    data.column(column)
        .with_context(|| format!("notification date column '{column}' missing"))?;

    let height = data.height();
    let raw: Vec<String> = (0..height)
        .map(|idx| column_value_string(&data, column, idx))
        .collect();

    let mut parsed: Vec<Option<NaiveDate>> =
        raw.iter().map(|value| parse_notification_date(value)).collect();
    let failed = parsed.iter().filter(|date| date.is_none()).count();
    if height > 0 && failed * 2 > height {
        debug!(failed, rows = height, "majority of dates unparsed, retrying day-first");
        parsed = raw
            .iter()
            .map(|value| parse_notification_date_dayfirst(value))
            .collect();
    }

    let keep: Vec<bool> = parsed.iter().map(Option::is_some).collect();
    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped == 0 {
        let dates = parsed.into_iter().flatten().collect();
        return Ok((DatedFrame { data, dates }, 0));
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let data = data.filter(&mask)?;
    let dates: Vec<NaiveDate> = parsed.into_iter().flatten().collect();
    Ok((DatedFrame { data, dates }, dropped))
}

/// Appends the epidemiological week and year (ISO week calendar) of
/// the resolved notification date as output columns.
pub fn append_epi_week(frame: &mut DatedFrame) -> Result<()> {
    let weeks: Vec<String> = frame
        .dates
        .iter()
        .map(|date| date.iso_week().week().to_string())
        .collect();
    let years: Vec<String> = frame
        .dates
        .iter()
        .map(|date| date.iso_week().year().to_string())
        .collect();
    frame
        .data
        .with_column(Series::new("semana_epi".into(), weeks))?;
    frame
        .data
        .with_column(Series::new("año_epi".into(), years))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{append_epi_week, parse_notification_date, resolve_dates};
    use crate::data_utils::column_value_string;
    use chrono::NaiveDate;
    use polars::prelude::{DataFrame, NamedFrom, Series};

    fn frame(dates: Vec<&str>) -> DataFrame {
        DataFrame::new(vec![Series::new("fec_not".into(), dates).into()]).unwrap()
    }

    #[test]
    fn parses_iso_and_month_first() {
        assert_eq!(
            parse_notification_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_notification_date("01/15/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_notification_date("not a date"), None);
        assert_eq!(parse_notification_date(""), None);
    }

    #[test]
    fn drops_unparsable_rows_and_counts_them() {
        let (dated, dropped) =
            resolve_dates(frame(vec!["2024-01-01", "garbage", "2024-01-03"])).unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(dated.data.height(), 2);
        assert_eq!(dated.dates.len(), 2);
        assert_eq!(dated.dates[1], NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn majority_failure_triggers_dayfirst_retry() {
        // 25/12 and 26/12 fail month-first; with day-first they parse.
        let (dated, dropped) =
            resolve_dates(frame(vec!["25/12/2024", "26/12/2024", "27/12/2024"])).unwrap();
        assert_eq!(dropped, 0);
        assert_eq!(dated.dates[0], NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn minority_failure_keeps_standard_interpretation() {
        // one ambiguous value among parseable ISO dates stays month-first
        let (dated, dropped) =
            resolve_dates(frame(vec!["2024-01-01", "2024-01-02", "03/04/2024"])).unwrap();
        assert_eq!(dropped, 0);
        assert_eq!(dated.dates[2], NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    }

    #[test]
    fn epi_week_columns_follow_iso_week_calendar() {
        let (mut dated, _) = resolve_dates(frame(vec!["2024-12-30", "2024-06-15"])).unwrap();
        append_epi_week(&mut dated).unwrap();
        // 2024-12-30 falls in ISO week 1 of 2025
        assert_eq!(column_value_string(&dated.data, "semana_epi", 0), "1");
        assert_eq!(column_value_string(&dated.data, "año_epi", 0), "2025");
        assert_eq!(column_value_string(&dated.data, "semana_epi", 1), "24");
        assert_eq!(column_value_string(&dated.data, "año_epi", 1), "2024");
    }

    #[test]
    fn zero_rows_resolve_to_zero_rows() {
        let (dated, dropped) = resolve_dates(frame(Vec::new())).unwrap();
        assert_eq!(dropped, 0);
        assert!(dated.dates.is_empty());
        assert_eq!(dated.data.height(), 0);
    }
}
