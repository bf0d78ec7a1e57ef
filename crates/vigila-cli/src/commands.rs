use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use vigila_core::pipeline::{ConsolidateOptions, run_consolidation};
use vigila_ingest::read_csv_table;
use vigila_map::SynonymTable;
use vigila_report::write_outputs;

use crate::cli::ConsolidateArgs;
use crate::summary::print_fields_table;
use crate::types::RunResult;

pub fn run_consolidate(args: &ConsolidateArgs) -> Result<RunResult> {
    let synonyms = match &args.synonyms {
        Some(path) => SynonymTable::from_json_file(path)?,
        None => SynonymTable::default(),
    };

    let mut sources = Vec::with_capacity(args.extracts.len());
    for path in &args.extracts {
        let table = read_csv_table(path)
            .with_context(|| format!("ingest extract: {}", path.display()))?;
        info!(source = %table.name, rows = table.row_count(), "loaded extract");
        sources.push(table);
    }

    let options = ConsolidateOptions {
        synonyms,
        filter_suspected: !args.keep_suspected,
        derive_epi_week: !args.no_epi_week,
    };
    let output = run_consolidation(sources, &options)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.extracts));
    let outputs = write_outputs(&output.consolidated, &output.summary, &output_dir)?;

    Ok(RunResult {
        outputs,
        report: output.report,
        summary: output.summary,
    })
}

pub fn run_fields() -> Result<()> {
    let synonyms = SynonymTable::default();
    print_fields_table(&synonyms);
    Ok(())
}

fn default_output_dir(extracts: &[PathBuf]) -> PathBuf {
    extracts
        .first()
        .and_then(|path| path.parent())
        .map_or_else(|| PathBuf::from("salida"), |parent| parent.join("salida"))
}

/// True when the run consolidated nothing because every row was
/// dropped; surfaced as a warning, not an error.
pub fn consolidated_nothing(result: &RunResult) -> bool {
    result.report.consolidated == 0 && result.report.rows_read > 0
}
