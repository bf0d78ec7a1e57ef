//! Delimited-text ingestion for the consolidation pipeline.
//!
//! The consolidation engine treats file parsing as an external
//! collaborator; this crate is that collaborator for delimited text.
//! It sniffs the delimiter, tolerates latin-1 encoding, skips blank
//! records, and hands the engine a [`vigila_model::SourceTable`] of
//! raw text cells.

pub mod csv_table;

pub use csv_table::read_csv_table;
