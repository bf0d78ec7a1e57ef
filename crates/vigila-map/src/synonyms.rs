//! The ordered synonym table driving schema normalization.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vigila_model::CanonicalField;

/// Accepted raw names for one canonical field, in priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub field: CanonicalField,
    pub synonyms: Vec<String>,
}

/// Ordered list of (canonical field, accepted raw names) pairs.
///
/// For each field the first synonym present among a table's normalized
/// headers wins; later synonyms stay untouched as pass-through columns.
/// The canonical column name itself leads each list so an
/// already-normalized table resolves to itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymTable {
    pub entries: Vec<SynonymEntry>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        fn entry(field: CanonicalField, synonyms: &[&str]) -> SynonymEntry {
            SynonymEntry {
                field,
                synonyms: synonyms.iter().map(|s| (*s).to_string()).collect(),
            }
        }
        Self {
            entries: vec![
                entry(
                    CanonicalField::IdentificationNumber,
                    &["num_ide_", "num_ide", "identificacion", "documento"],
                ),
                entry(
                    CanonicalField::IdentificationType,
                    &["tip_ide_", "tip_ide", "tipo_id", "tipo_doc"],
                ),
                entry(
                    CanonicalField::EventCode,
                    &["cod_eve", "evento", "codigo_evento"],
                ),
                entry(
                    CanonicalField::NotificationDate,
                    &["fec_not", "fecha_notificacion"],
                ),
            ],
        }
    }
}

impl SynonymTable {
    /// Loads a synonym table from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read synonym table: {}", path.display()))?;
        let table: SynonymTable = serde_json::from_str(&raw)
            .with_context(|| format!("parse synonym table: {}", path.display()))?;
        Ok(table)
    }

    /// Synonyms accepted for a field, if the table defines any.
    #[must_use]
    pub fn synonyms_for(&self, field: CanonicalField) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.synonyms.as_slice())
    }
}
