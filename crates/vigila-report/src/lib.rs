//! Output generation for the consolidation pipeline.
//!
//! The engine hands over two in-memory tables; this crate serializes
//! them as delimited text: the consolidated base and the per-event
//! summary, named after the output sheets of the upstream workflow.

mod csv_out;

pub use csv_out::{
    CONSOLIDATED_FILE, OutputPaths, SUMMARY_FILE, write_consolidated, write_outputs,
    write_summary,
};
