use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use polars::prelude::DataFrame;
use tracing::info;

use vigila_core::column_value_string;
use vigila_model::EventCount;

pub const CONSOLIDATED_FILE: &str = "base_consolidada.csv";
pub const SUMMARY_FILE: &str = "resumen.csv";

/// Where one run's output files landed.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub consolidated: PathBuf,
    pub summary: PathBuf,
}

/// Writes the consolidated table as CSV, one header row plus one row
/// per consolidated record.
pub fn write_consolidated(df: &DataFrame, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create output: {}", path.display()))?;
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer.write_record(&columns)?;
    for idx in 0..df.height() {
        let row: Vec<String> = columns
            .iter()
            .map(|name| column_value_string(df, name, idx))
            .collect();
        writer.write_record(&row)?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output: {}", path.display()))?;
    Ok(())
}

/// Writes the per-event summary as CSV with `cod_eve,total_casos`
/// columns.
pub fn write_summary(summary: &[EventCount], path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create output: {}", path.display()))?;
    writer.write_record(["cod_eve", "total_casos"])?;
    for entry in summary {
        writer.write_record([entry.event_code.as_str(), &entry.count.to_string()])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output: {}", path.display()))?;
    Ok(())
}

/// Writes both output tables into `output_dir`, creating it if needed.
pub fn write_outputs(
    consolidated: &DataFrame,
    summary: &[EventCount],
    output_dir: &Path,
) -> Result<OutputPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory: {}", output_dir.display()))?;
    let paths = OutputPaths {
        consolidated: output_dir.join(CONSOLIDATED_FILE),
        summary: output_dir.join(SUMMARY_FILE),
    };
    write_consolidated(consolidated, &paths.consolidated)?;
    write_summary(summary, &paths.summary)?;
    info!(
        consolidated = %paths.consolidated.display(),
        summary = %paths.summary.display(),
        "wrote outputs"
    );
    Ok(paths)
}
