//! moniker.toml parsing and validation.
//!
//! A config file extends the engine's built-in [`WellKnownTypes`] table:
//!
//! ```toml
//! filtered = ["Money"]
//!
//! [names]
//! Money = "amount"
//!
//! [suffixes]
//! Money = ["Amount", "Total"]
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod validate;

use std::path::Path;

pub use error::{Error, Result};
pub use file::MonikerToml;
use moniker_engine::WellKnownTypes;

/// Config file name looked up in the working directory when no explicit
/// path is given.
pub const DEFAULT_FILE_NAME: &str = "moniker.toml";

/// Parse a moniker.toml from a string (uses "moniker.toml" as the filename)
pub fn parse_str(content: &str) -> Result<WellKnownTypes> {
    parse_str_with_filename(content, DEFAULT_FILE_NAME)
}

/// Parse a moniker.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<WellKnownTypes> {
    let table: WellKnownTypes =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    validate::validate_table(&table, content, filename)?;
    Ok(table)
}

/// Resolve the effective mapping table: the engine's built-ins extended with
/// `path` when given, otherwise with `./moniker.toml` when one exists.
pub fn load_table(path: Option<&Path>) -> Result<WellKnownTypes> {
    let mut table = WellKnownTypes::builtin();
    match path {
        Some(path) => table.extend_with(MonikerToml::open(path)?.into_table()),
        None => {
            let default = Path::new(DEFAULT_FILE_NAME);
            if default.exists() {
                table.extend_with(MonikerToml::open(default)?.into_table());
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sections() {
        let table = parse_str(
            r#"
            filtered = ["Money"]

            [names]
            Money = "amount"

            [suffixes]
            Money = ["Amount", "Total"]
            "#,
        )
        .unwrap();

        assert_eq!(table.names.get("Money").map(String::as_str), Some("amount"));
        assert_eq!(table.suffixes.get("Money").unwrap(), &["Amount", "Total"]);
        assert!(table.filtered.contains("Money"));
    }

    #[test]
    fn empty_file_is_an_empty_table() {
        let table = parse_str("").unwrap();
        assert_eq!(table, WellKnownTypes::default());
    }

    #[test]
    fn rejects_invalid_mapped_name() {
        let err = parse_str(
            r#"
            [names]
            Money = "not an identifier"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidName { .. }));
    }

    #[test]
    fn rejects_invalid_suffix() {
        let err = parse_str(
            r#"
            [suffixes]
            Money = ["Amount", "1st"]
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidName { .. }));
    }

    #[test]
    fn rejects_empty_suffix_list() {
        let err = parse_str(
            r#"
            [suffixes]
            Money = []
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::EmptyEntry { .. }));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_str("[names\nMoney = ").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn extends_builtin_table() {
        let mut table = WellKnownTypes::builtin();
        let overlay = parse_str(
            r#"
            [names]
            Guid = "key"
            "#,
        )
        .unwrap();
        table.extend_with(overlay);

        assert_eq!(table.names.get("Guid").map(String::as_str), Some("key"));
        // Untouched built-ins survive.
        assert!(table.filtered.contains("Guid"));
    }
}
