//! Schema normalization for surveillance extracts.
//!
//! Source systems export the same notification fields under many
//! spellings. This crate renames recognized synonyms onto the canonical
//! column names (`tip_ide_`, `num_ide_`, `cod_eve`, `fec_not`) and
//! case/space-normalizes every other header so pass-through columns
//! from different sources line up on unification.

pub mod engine;
pub mod normalize;
pub mod synonyms;

pub use engine::{ResolvedField, normalize_schema};
pub use normalize::normalize_column_name;
pub use synonyms::{SynonymEntry, SynonymTable};
