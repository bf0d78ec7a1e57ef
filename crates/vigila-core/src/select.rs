//! Canonical-record selection.
//!
//! One representative per episode: the record with the latest
//! notification date. Among records sharing the latest date the first
//! in episode row order wins, which is exactly the first row of a
//! stable sort by (episode asc, date desc).

use anyhow::Result;
use polars::prelude::{DataFrame, UInt32Chunked};

use crate::episode::EpisodeFrame;

/// Picks the latest-dated record of every episode. The output has
/// exactly one row per episode number, in episode order; episode keys
/// and numbers stay behind in the side structures.
pub fn select_canonical(frame: &EpisodeFrame) -> Result<DataFrame> {
    let mut selected: Vec<u32> = Vec::with_capacity(frame.episode_count);
    let mut best: Option<(u64, usize)> = None;
    for row in 0..frame.data.height() {
        let episode = frame.episodes[row];
        match best {
            Some((open, best_row)) if open == episode => {
                // strictly later only: equal dates keep the first row
                if frame.dates[row] > frame.dates[best_row] {
                    best = Some((episode, row));
                }
            }
            Some((_, best_row)) => {
                selected.push(best_row as u32);
                best = Some((episode, row));
            }
            None => best = Some((episode, row)),
        }
    }
    if let Some((_, best_row)) = best {
        selected.push(best_row as u32);
    }

    let take = UInt32Chunked::from_vec("idx".into(), selected);
    Ok(frame.data.take(&take)?)
}

#[cfg(test)]
mod tests {
    use super::select_canonical;
    use crate::data_utils::column_value_string;
    use crate::dates::DatedFrame;
    use crate::episode::group_episodes;
    use chrono::NaiveDate;
    use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

    fn grouped(rows: &[(&str, (i32, u32, u32), &str)]) -> crate::episode::EpisodeFrame {
        let nums: Vec<&str> = rows.iter().map(|r| r.0).collect();
        let marks: Vec<&str> = rows.iter().map(|r| r.2).collect();
        let cols: Vec<Column> = vec![
            Series::new("num_ide_".into(), nums).into_column(),
            Series::new("cod_eve".into(), vec!["EVT1"; rows.len()]).into_column(),
            Series::new("marca".into(), marks).into_column(),
        ];
        let frame = DatedFrame {
            data: DataFrame::new(cols).unwrap(),
            dates: rows
                .iter()
                .map(|r| NaiveDate::from_ymd_opt(r.1.0, r.1.1, r.1.2).unwrap())
                .collect(),
        };
        group_episodes(frame).unwrap()
    }

    #[test]
    fn picks_latest_date_per_episode() {
        let frame = grouped(&[
            ("123", (2024, 1, 1), "old"),
            ("123", (2024, 1, 3), "new"),
            ("456", (2024, 2, 1), "only"),
        ]);
        let out = select_canonical(&frame).unwrap();
        assert_eq!(out.height(), 2);
        assert_eq!(column_value_string(&out, "marca", 0), "new");
        assert_eq!(column_value_string(&out, "marca", 1), "only");
    }

    #[test]
    fn equal_max_dates_keep_the_first_row() {
        let frame = grouped(&[
            ("123", (2024, 1, 2), "first"),
            ("123", (2024, 1, 2), "second"),
            ("123", (2024, 1, 1), "earlier"),
        ]);
        let out = select_canonical(&frame).unwrap();
        assert_eq!(out.height(), 1);
        assert_eq!(column_value_string(&out, "marca", 0), "first");
    }

    #[test]
    fn one_output_row_per_episode() {
        let frame = grouped(&[
            ("123", (2024, 1, 1), "a"),
            ("123", (2024, 1, 10), "b"),
            ("123", (2024, 1, 11), "c"),
            ("456", (2024, 1, 1), "d"),
        ]);
        let out = select_canonical(&frame).unwrap();
        assert_eq!(out.height(), frame.episode_count);
    }

    #[test]
    fn empty_frame_selects_nothing() {
        let frame = grouped(&[]);
        let out = select_canonical(&frame).unwrap();
        assert_eq!(out.height(), 0);
    }
}
