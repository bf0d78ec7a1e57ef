//! Column-name normalization applied to every header before matching.

/// Normalizes a raw column name: trims whitespace and BOM, lowercases,
/// and joins interior whitespace runs with underscores.
///
/// This runs on every column, matched or not, so pass-through columns
/// that differ only in case or spacing merge into one column when the
/// sources are unified.
#[must_use]
pub fn normalize_column_name(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    let mut parts = trimmed.split_whitespace();
    if let Some(first) = parts.next() {
        normalized.push_str(&first.to_lowercase());
        for part in parts {
            normalized.push('_');
            normalized.push_str(&part.to_lowercase());
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::normalize_column_name;

    #[test]
    fn lowercases_and_underscores() {
        assert_eq!(normalize_column_name("  Fecha Notificacion "), "fecha_notificacion");
        assert_eq!(normalize_column_name("NUM_IDE_"), "num_ide_");
        assert_eq!(normalize_column_name("Cod  Eve"), "cod_eve");
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(normalize_column_name("\u{feff}evento"), "evento");
    }

    #[test]
    fn idempotent() {
        let once = normalize_column_name("Tipo De Documento");
        assert_eq!(normalize_column_name(&once), once);
    }
}
