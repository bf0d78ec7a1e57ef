use vigila_model::{ConsolidateReport, EventCount};
use vigila_report::OutputPaths;

#[derive(Debug)]
pub struct RunResult {
    pub outputs: OutputPaths,
    pub report: ConsolidateReport,
    pub summary: Vec<EventCount>,
}
