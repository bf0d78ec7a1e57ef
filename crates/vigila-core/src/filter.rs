//! Suspected-classification filtering.
//!
//! The classification column has no fixed name; the first column whose
//! normalized name contains `clasific` or `cla_fin` is used. Rows whose
//! value mentions `sospecho` ("suspected") are removed before episode
//! grouping so they never compete for an episode's representative.

use anyhow::Result;
use polars::prelude::{BooleanChunked, NewChunkedArray};
use tracing::debug;

use crate::data_utils::column_value_string;
use crate::dates::DatedFrame;

const CLASSIFICATION_MARKERS: [&str; 2] = ["clasific", "cla_fin"];
const SUSPECTED_MARKER: &str = "sospecho";

/// First column, in frame order, recognized as a clinical
/// classification.
#[must_use]
pub fn find_classification_column(frame: &DatedFrame) -> Option<String> {
    frame
        .data
        .get_column_names()
        .iter()
        .find(|name| {
            let name = name.as_str();
            CLASSIFICATION_MARKERS
                .iter()
                .any(|marker| name.contains(marker))
        })
        .map(|name| name.to_string())
}

/// Removes rows classified as suspected. A frame without a
/// classification column passes through unchanged.
pub fn filter_suspected(frame: DatedFrame) -> Result<(DatedFrame, usize)> {
    let Some(column) = find_classification_column(&frame) else {
        return Ok((frame, 0));
    };
    let keep: Vec<bool> = (0..frame.data.height())
        .map(|idx| {
            !column_value_string(&frame.data, &column, idx)
                .to_lowercase()
                .contains(SUSPECTED_MARKER)
        })
        .collect();
    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed == 0 {
        return Ok((frame, 0));
    }
    debug!(column, removed, "removed suspected rows");
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let data = frame.data.filter(&mask)?;
    let dates = frame
        .dates
        .iter()
        .zip(&keep)
        .filter(|(_, kept)| **kept)
        .map(|(date, _)| *date)
        .collect();
    Ok((DatedFrame { data, dates }, removed))
}
