//! Identification-number cleaning.
//!
//! Source extracts carry the document number with prefixes, suffixes,
//! and punctuation (`"CC-1029384756 "`). Cleaning keeps the first
//! maximal run of decimal digits and drops rows that have none. This is
//! lossy best-effort normalization: no checksum or length validation.

use vigila_model::{CanonicalField, SourceTable};

/// Rows removed by [`clean_identifiers`], by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityDrops {
    /// Identification field was empty or whitespace.
    pub missing: usize,
    /// Identification field held no decimal digits.
    pub invalid: usize,
}

impl IdentityDrops {
    #[must_use]
    pub fn total(self) -> usize {
        self.missing + self.invalid
    }
}

/// First maximal run of decimal digits in `raw`, if any.
#[must_use]
pub fn extract_digit_run(raw: &str) -> Option<String> {
    let start = raw.find(|ch: char| ch.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    Some(digits)
}

/// Rewrites the identification number of every row to its extracted
/// digit run, dropping rows where the field is empty or digit-free.
///
/// A table without an identification column is left untouched; later
/// stages then see the field as absent for all its rows.
pub fn clean_identifiers(table: &mut SourceTable) -> IdentityDrops {
    let column = CanonicalField::IdentificationNumber.column_name();
    let Some(index) = table.column_index(column) else {
        return IdentityDrops::default();
    };

    let mut drops = IdentityDrops::default();
    table.rows.retain_mut(|row| {
        let raw = row.get(index).map_or("", String::as_str);
        if raw.trim().is_empty() {
            drops.missing += 1;
            return false;
        }
        match extract_digit_run(raw) {
            Some(digits) => {
                row[index] = digits;
                true
            }
            None => {
                drops.invalid += 1;
                false
            }
        }
    });
    drops
}
