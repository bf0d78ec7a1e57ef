//! Temporal episode grouping, the core of deduplication.
//!
//! Repeated notifications of the same person and event within a short
//! window are re-notifications of one clinical episode, not new cases.
//! Records are stable-sorted by (episode key asc, date asc) and scanned
//! once: a record continues the previous episode only when it shares the
//! key and its date is within [`EPISODE_GAP_DAYS`] of the previous
//! record's. A key change always forces a new episode regardless of
//! date proximity.
//!
//! Keys and episode numbers are bookkeeping: they live in side vectors
//! aligned with the frame, are recomputed each run, and never appear as
//! columns.

use anyhow::Result;
use chrono::NaiveDate;
use polars::prelude::{DataFrame, UInt32Chunked};
use tracing::debug;

use vigila_model::CanonicalField;

use crate::data_utils::column_value_string;
use crate::dates::DatedFrame;

/// Maximum day gap between consecutive notifications of one episode.
pub const EPISODE_GAP_DAYS: i64 = 4;

/// A frame sorted in episode order with row-aligned episode numbers.
#[derive(Debug, Clone)]
pub struct EpisodeFrame {
    pub data: DataFrame,
    pub dates: Vec<NaiveDate>,
    /// Episode number per row; contiguous runs share a number.
    pub episodes: Vec<u64>,
    pub episode_count: usize,
}

/// Person+event identity key: identification type, number, and event
/// code joined with `-`, each empty when absent.
#[must_use]
pub fn episode_key(df: &DataFrame, idx: usize) -> String {
    format!(
        "{}-{}-{}",
        column_value_string(df, CanonicalField::IdentificationType.column_name(), idx),
        column_value_string(df, CanonicalField::IdentificationNumber.column_name(), idx),
        column_value_string(df, CanonicalField::EventCode.column_name(), idx),
    )
}

/// Partitions the frame into episodes and numbers them sequentially in
/// sort order. Every input row receives exactly one episode number.
pub fn group_episodes(frame: DatedFrame) -> Result<EpisodeFrame> {
    let height = frame.data.height();
    let keys: Vec<String> = (0..height).map(|idx| episode_key(&frame.data, idx)).collect();

    let mut indices: Vec<u32> = (0..height as u32).collect();
    indices.sort_by(|&a, &b| {
        keys[a as usize]
            .cmp(&keys[b as usize])
            .then_with(|| frame.dates[a as usize].cmp(&frame.dates[b as usize]))
    });

    let take = UInt32Chunked::from_vec("idx".into(), indices.clone());
    let data = frame.data.take(&take)?;
    let dates: Vec<NaiveDate> = indices.iter().map(|&i| frame.dates[i as usize]).collect();
    let sorted_keys: Vec<&String> = indices.iter().map(|&i| &keys[i as usize]).collect();

    let mut episodes = Vec::with_capacity(height);
    let mut current = 0u64;
    for pos in 0..height {
        let starts_new = pos == 0
            || sorted_keys[pos] != sorted_keys[pos - 1]
            || (dates[pos] - dates[pos - 1]).num_days().abs() > EPISODE_GAP_DAYS;
        if starts_new {
            current += 1;
        }
        episodes.push(current);
    }
    debug!(rows = height, episodes = current, "grouped episodes");

    Ok(EpisodeFrame {
        data,
        dates,
        episodes,
        episode_count: current as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::{episode_key, group_episodes};
    use crate::dates::DatedFrame;
    use chrono::NaiveDate;
    use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

    fn dated(rows: &[(&str, &str, &str, (i32, u32, u32))]) -> DatedFrame {
        let tips: Vec<&str> = rows.iter().map(|r| r.0).collect();
        let nums: Vec<&str> = rows.iter().map(|r| r.1).collect();
        let cods: Vec<&str> = rows.iter().map(|r| r.2).collect();
        let cols: Vec<Column> = vec![
            Series::new("tip_ide_".into(), tips).into_column(),
            Series::new("num_ide_".into(), nums).into_column(),
            Series::new("cod_eve".into(), cods).into_column(),
        ];
        DatedFrame {
            data: DataFrame::new(cols).unwrap(),
            dates: rows
                .iter()
                .map(|r| NaiveDate::from_ymd_opt(r.3.0, r.3.1, r.3.2).unwrap())
                .collect(),
        }
    }

    #[test]
    fn key_defaults_absent_fields_to_empty() {
        let df = DataFrame::new(vec![
            Series::new("cod_eve".into(), vec!["EVT1"]).into_column(),
        ])
        .unwrap();
        assert_eq!(episode_key(&df, 0), "--EVT1");
    }

    #[test]
    fn gap_within_threshold_continues_episode() {
        let frame = dated(&[
            ("CC", "123", "EVT1", (2024, 1, 1)),
            ("CC", "123", "EVT1", (2024, 1, 3)),
        ]);
        let grouped = group_episodes(frame).unwrap();
        assert_eq!(grouped.episodes, vec![1, 1]);
        assert_eq!(grouped.episode_count, 1);
    }

    #[test]
    fn gap_over_threshold_forces_boundary() {
        let frame = dated(&[
            ("CC", "123", "EVT1", (2024, 1, 1)),
            ("CC", "123", "EVT1", (2024, 1, 6)),
        ]);
        let grouped = group_episodes(frame).unwrap();
        assert_eq!(grouped.episodes, vec![1, 2]);
        assert_eq!(grouped.episode_count, 2);
    }

    #[test]
    fn chained_gaps_stay_in_one_episode() {
        // consecutive gaps of 4 days chain: boundary rule is pairwise
        let frame = dated(&[
            ("CC", "123", "EVT1", (2024, 1, 1)),
            ("CC", "123", "EVT1", (2024, 1, 5)),
            ("CC", "123", "EVT1", (2024, 1, 9)),
        ]);
        let grouped = group_episodes(frame).unwrap();
        assert_eq!(grouped.episodes, vec![1, 1, 1]);
    }

    #[test]
    fn key_change_forces_boundary_despite_close_dates() {
        let frame = dated(&[
            ("CC", "123", "EVT1", (2024, 1, 1)),
            ("CC", "123", "EVT2", (2024, 1, 1)),
            ("CC", "456", "EVT1", (2024, 1, 2)),
        ]);
        let grouped = group_episodes(frame).unwrap();
        assert_eq!(grouped.episode_count, 3);
    }

    #[test]
    fn episode_numbers_partition_all_rows() {
        let frame = dated(&[
            ("CC", "9", "EVT1", (2024, 3, 1)),
            ("CC", "1", "EVT1", (2024, 1, 2)),
            ("CC", "1", "EVT1", (2024, 1, 1)),
            ("TI", "1", "EVT1", (2024, 1, 1)),
            ("CC", "9", "EVT1", (2024, 3, 20)),
        ]);
        let grouped = group_episodes(frame).unwrap();
        assert_eq!(grouped.episodes.len(), 5);
        // numbers are monotone over the sorted rows and start at 1
        assert_eq!(grouped.episodes[0], 1);
        for pair in grouped.episodes.windows(2) {
            assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
        }
        assert_eq!(
            grouped.episode_count,
            *grouped.episodes.last().unwrap() as usize
        );
    }

    #[test]
    fn single_record_forms_its_own_episode() {
        let frame = dated(&[("CC", "123", "EVT1", (2024, 1, 1))]);
        let grouped = group_episodes(frame).unwrap();
        assert_eq!(grouped.episodes, vec![1]);
        assert_eq!(grouped.episode_count, 1);
    }
}
