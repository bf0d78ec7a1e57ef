//! Shared data model for the SIVIGILA notification consolidator.

pub mod error;
pub mod fields;
pub mod report;
pub mod table;

pub use error::{Result, VigilaError};
pub use fields::CanonicalField;
pub use report::{ConsolidateReport, EventCount};
pub use table::SourceTable;
