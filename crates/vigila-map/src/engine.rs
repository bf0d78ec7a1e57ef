//! Applies the synonym table to one source table.

use vigila_model::{CanonicalField, SourceTable};

use crate::normalize::normalize_column_name;
use crate::synonyms::SynonymTable;

/// One canonical field resolved in a table, with the normalized header
/// it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub field: CanonicalField,
    pub source_column: String,
}

/// Renames recognized synonym columns onto their canonical names and
/// normalizes every header.
///
/// For each canonical field the first accepted raw name present among
/// the normalized headers is renamed; remaining synonyms pass through
/// unchanged, so each canonical field appears at most once per table.
/// A field with no match simply stays absent. Running this twice is a
/// no-op.
pub fn normalize_schema(table: &mut SourceTable, synonyms: &SynonymTable) -> Vec<ResolvedField> {
    for header in &mut table.headers {
        *header = normalize_column_name(header);
    }

    let mut resolved = Vec::new();
    for entry in &synonyms.entries {
        let canonical = entry.field.column_name();
        let found = entry
            .synonyms
            .iter()
            .find_map(|synonym| table.column_index(synonym).map(|idx| (idx, synonym)));
        let Some((index, matched)) = found else {
            continue;
        };
        // The canonical name leads each synonym list, so a rename never
        // collides with an existing canonical column.
        if matched.as_str() != canonical && !table.has_column(canonical) {
            table.headers[index] = canonical.to_string();
        }
        resolved.push(ResolvedField {
            field: entry.field,
            source_column: matched.clone(),
        });
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::{normalize_schema, ResolvedField};
    use crate::synonyms::SynonymTable;
    use vigila_model::{CanonicalField, SourceTable};

    fn table(headers: &[&str]) -> SourceTable {
        SourceTable::new("test", headers.iter().map(|h| (*h).to_string()).collect())
    }

    #[test]
    fn renames_first_matching_synonym() {
        let synonyms = SynonymTable::default();
        let mut t = table(&["Identificacion", "Evento", "Fecha Notificacion", "edad"]);
        let resolved = normalize_schema(&mut t, &synonyms);
        assert_eq!(
            t.headers,
            vec!["num_ide_", "cod_eve", "fec_not", "edad"]
        );
        assert!(resolved.contains(&ResolvedField {
            field: CanonicalField::EventCode,
            source_column: "evento".into(),
        }));
    }

    #[test]
    fn first_match_wins_over_later_synonyms() {
        let synonyms = SynonymTable::default();
        // "identificacion" precedes "documento" in the synonym list, so
        // "documento" must survive as a pass-through column.
        let mut t = table(&["documento", "identificacion"]);
        normalize_schema(&mut t, &synonyms);
        assert_eq!(t.headers, vec!["documento", "num_ide_"]);
    }

    #[test]
    fn canonical_name_beats_other_synonyms() {
        let synonyms = SynonymTable::default();
        let mut t = table(&["evento", "cod_eve"]);
        normalize_schema(&mut t, &synonyms);
        // cod_eve is already canonical; evento stays as-is.
        assert_eq!(t.headers, vec!["evento", "cod_eve"]);
    }

    #[test]
    fn idempotent_on_normalized_table() {
        let synonyms = SynonymTable::default();
        let mut t = table(&["Tip Ide", "NUM_IDE_", "cod_eve", "fec_not", "Municipio"]);
        normalize_schema(&mut t, &synonyms);
        let after_first = t.headers.clone();
        normalize_schema(&mut t, &synonyms);
        assert_eq!(t.headers, after_first);
    }

    #[test]
    fn unmatched_fields_are_simply_absent() {
        let synonyms = SynonymTable::default();
        let mut t = table(&["municipio", "edad"]);
        let resolved = normalize_schema(&mut t, &synonyms);
        assert!(resolved.is_empty());
        assert_eq!(t.headers, vec!["municipio", "edad"]);
    }
}
