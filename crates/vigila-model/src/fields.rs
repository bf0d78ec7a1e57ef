//! Canonical field roles understood by the consolidation engine.
//!
//! Source extracts name these columns freely; the schema normalizer
//! (`vigila-map`) renames recognized synonyms onto the canonical column
//! names below. The classification column is not a canonical field: it
//! is detected by substring match at filter time.

use serde::{Deserialize, Serialize};

/// A semantic column role the engine understands regardless of how a
/// source names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    /// Identification document type (e.g., CC, TI).
    IdentificationType,
    /// Identification document number.
    IdentificationNumber,
    /// Notifiable event code.
    EventCode,
    /// Notification date.
    NotificationDate,
}

impl CanonicalField {
    /// All canonical fields, in the resolution order used by the
    /// default synonym table.
    pub const ALL: [CanonicalField; 4] = [
        CanonicalField::IdentificationNumber,
        CanonicalField::IdentificationType,
        CanonicalField::EventCode,
        CanonicalField::NotificationDate,
    ];

    /// The canonical column name in normalized tables.
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            CanonicalField::IdentificationType => "tip_ide_",
            CanonicalField::IdentificationNumber => "num_ide_",
            CanonicalField::EventCode => "cod_eve",
            CanonicalField::NotificationDate => "fec_not",
        }
    }

    /// Whether the run must abort when no source supplies this field.
    ///
    /// The identification type defaults to empty in the episode key, so
    /// its absence degrades gracefully; the other fields are needed to
    /// form keys and sort temporally.
    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, CanonicalField::IdentificationType)
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            CanonicalField::IdentificationType => "Identification document type",
            CanonicalField::IdentificationNumber => "Identification document number",
            CanonicalField::EventCode => "Notifiable event code",
            CanonicalField::NotificationDate => "Notification date",
        }
    }
}
