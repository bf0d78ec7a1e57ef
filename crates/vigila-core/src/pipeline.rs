//! The consolidation pipeline.
//!
//! Stages run strictly in sequence, each taking ownership of the table
//! it transforms: schema normalization, identity cleaning, merge, date
//! resolution, suspected filter, episode grouping, canonical selection,
//! event summary. The whole unified record set is held in memory; there
//! is no shared state between stages and no concurrency.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

use vigila_map::{SynonymTable, normalize_schema};
use vigila_model::{CanonicalField, ConsolidateReport, EventCount, SourceTable, VigilaError};

use crate::dates::{append_epi_week, resolve_dates};
use crate::episode::group_episodes;
use crate::filter::filter_suspected;
use crate::identity::clean_identifiers;
use crate::merge::merge_sources;
use crate::select::select_canonical;
use crate::summary::summarize_events;

/// Knobs the orchestration layer may turn; the episode gap threshold
/// is fixed by the grouping contract and deliberately not one of them.
#[derive(Debug, Clone)]
pub struct ConsolidateOptions {
    pub synonyms: SynonymTable,
    /// Remove suspected-classification rows before grouping.
    pub filter_suspected: bool,
    /// Append epidemiological week/year columns to the output.
    pub derive_epi_week: bool,
}

impl Default for ConsolidateOptions {
    fn default() -> Self {
        Self {
            synonyms: SynonymTable::default(),
            filter_suspected: true,
            derive_epi_week: true,
        }
    }
}

/// Result of one consolidation run.
#[derive(Debug, Clone)]
pub struct ConsolidateOutput {
    /// One record per episode, canonical fields renamed, pass-through
    /// columns preserved, no bookkeeping columns.
    pub consolidated: DataFrame,
    /// Case counts per event code over the consolidated records.
    pub summary: Vec<EventCount>,
    pub report: ConsolidateReport,
}

/// Verifies that every required canonical field resolved somewhere.
///
/// Without an identification number, event code, or notification date
/// anywhere, episode keys or temporal sorting would be meaningless, so
/// the run aborts naming the missing field.
fn check_required_fields(sources: &[SourceTable]) -> Result<(), VigilaError> {
    for field in CanonicalField::ALL {
        if !field.is_required() {
            continue;
        }
        let column = field.column_name();
        if !sources.iter().any(|table| table.has_column(column)) {
            return Err(VigilaError::MissingRequiredField { field: column });
        }
    }
    Ok(())
}

/// Runs the full pipeline over already-parsed sources.
pub fn run_consolidation(
    mut sources: Vec<SourceTable>,
    options: &ConsolidateOptions,
) -> Result<ConsolidateOutput> {
    let mut report = ConsolidateReport {
        sources: sources.len(),
        rows_read: sources.iter().map(SourceTable::row_count).sum(),
        ..ConsolidateReport::default()
    };

    for table in &mut sources {
        let resolved = normalize_schema(table, &options.synonyms);
        info!(
            source = %table.name,
            resolved = resolved.len(),
            columns = table.headers.len(),
            "normalized schema"
        );
    }
    check_required_fields(&sources)?;

    for table in &mut sources {
        let drops = clean_identifiers(table);
        report.rows_missing_identifier += drops.missing;
        report.rows_invalid_identifier += drops.invalid;
    }

    let unified = merge_sources(&sources)?;
    info!(rows = unified.height(), "merged sources");

    let (mut dated, invalid_dates) = resolve_dates(unified)?;
    report.rows_invalid_date = invalid_dates;

    if options.filter_suspected {
        let (filtered, removed) = filter_suspected(dated)?;
        dated = filtered;
        report.rows_suspected = removed;
    }

    if options.derive_epi_week {
        append_epi_week(&mut dated)?;
    }

    let grouped = group_episodes(dated)?;
    report.episodes = grouped.episode_count;

    let consolidated = select_canonical(&grouped)?;
    report.consolidated = consolidated.height();

    let summary = summarize_events(&consolidated);
    info!(
        episodes = report.episodes,
        consolidated = report.consolidated,
        dropped = report.rows_dropped(),
        "consolidation finished"
    );

    Ok(ConsolidateOutput {
        consolidated,
        summary,
        report,
    })
}
