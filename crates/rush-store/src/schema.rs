//! Puzzle table layout and the point-lookup query.

use rush_core::error::DomainError;

/// Table name used by the published puzzle database.
pub const DEFAULT_TABLE: &str = "rush";

/// SQL creating a table with the published puzzle layout. The server never
/// runs this; fixtures and local datasets do.
pub const CREATE_PUZZLE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS rush (
    moves        INTEGER NOT NULL,
    board        TEXT    NOT NULL,
    cluster_size INTEGER NOT NULL
);
";

const MAX_TABLE_NAME_LEN: usize = 64;

/// Checks that `name` is a plain SQL identifier.
///
/// The table name is the only fragment interpolated into SQL, so anything
/// beyond `[A-Za-z_][A-Za-z0-9_]*` is refused.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the name is empty, too long, or
/// contains characters outside the identifier alphabet.
pub fn validate_table_name(name: &str) -> Result<&str, DomainError> {
    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !starts_ok || !rest_ok || name.len() > MAX_TABLE_NAME_LEN {
        return Err(DomainError::Validation(format!(
            "invalid table name {name:?}"
        )));
    }
    Ok(name)
}

/// Builds the single-row lookup for `table`. `table` must already be
/// validated.
#[must_use]
pub fn select_by_rowid_sql(table: &str) -> String {
    format!(r#"SELECT * FROM "{table}" WHERE rowid = ?"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert_eq!(validate_table_name(DEFAULT_TABLE).unwrap(), "rush");
    }

    #[test]
    fn test_identifiers_with_digits_and_underscores_are_valid() {
        assert!(validate_table_name("_puzzles_6x6").is_ok());
    }

    #[test]
    fn test_injection_attempt_is_rejected() {
        let result = validate_table_name("rush; DROP TABLE rush");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_empty_and_leading_digit_names_are_rejected() {
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("6x6").is_err());
        assert!(validate_table_name("rush\"").is_err());
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        assert!(validate_table_name(&"r".repeat(65)).is_err());
        assert!(validate_table_name(&"r".repeat(64)).is_ok());
    }

    #[test]
    fn test_select_sql_quotes_table() {
        assert_eq!(
            select_by_rowid_sql("rush"),
            r#"SELECT * FROM "rush" WHERE rowid = ?"#
        );
    }
}
