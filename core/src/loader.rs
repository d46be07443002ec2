//! Loading option tables from JSON or YAML definitions.
//!
//! A table file holds a single `options` list. Each entry uses the field
//! names `short`, `long`, `value_name`, `arity` and `description`; only one
//! of the two forms is needed.
//!
//! # Example YAML
//!
//! ```yaml
//! options:
//!   - short: "-?"
//!     long: "--help"
//!     description: Print this help message.
//!   - short: "-o"
//!     long: "--output"
//!     value_name: FILE
//!     arity: required
//!     description: Write output to FILE.
//!   - long: "--include"
//!     value_name: DIR
//!     arity: list
//!     description: Add directories to the search path.
//! ```

use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::OptionTable;
use crate::error::{Result, TableError};
use crate::validate::validate_table;

impl OptionTable {
    /// Parses a table from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::JsonError`] if parsing fails.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses a table from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::YamlError`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist_core::{Arity, OptionTable};
    ///
    /// let table = OptionTable::from_yaml_str(
    ///     "options:\n  - short: \"-n\"\n    long: \"--name\"\n    arity: required\n",
    /// )
    /// .unwrap();
    /// assert_eq!(table.find("-n").unwrap().arity, Arity::Required);
    /// ```
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Loads and validates a table from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnsupportedFormat`] for any other extension,
    /// [`TableError::IoError`] if the file cannot be read,
    /// [`TableError::JsonError`] / [`TableError::YamlError`] if parsing
    /// fails, or [`TableError::Invalid`] if the table fails
    /// [`validate_table`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str());

        let table: Self = match extension {
            Some("json") => {
                let reader = BufReader::new(std::fs::File::open(path)?);
                serde_json::from_reader(reader)?
            }
            Some("yaml" | "yml") => {
                let reader = BufReader::new(std::fs::File::open(path)?);
                serde_yaml::from_reader(reader)?
            }
            _ => return Err(TableError::UnsupportedFormat(path.to_path_buf())),
        };

        let errors = validate_table(&table);
        if !errors.is_empty() {
            return Err(TableError::Invalid(errors));
        }

        debug!(path = %path.display(), options = table.len(), "loaded option table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::{Arity, ValidationError};

    use super::*;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("failed to write temp file");
        file
    }

    #[test]
    fn test_load_yaml_table() {
        let file = write_temp(
            ".yaml",
            "options:\n  - long: \"--help\"\n  - short: \"-i\"\n    long: \"--items\"\n    arity: list\n",
        );

        let table = OptionTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.find("-i").unwrap().arity, Arity::List);
    }

    #[test]
    fn test_load_json_table() {
        let file = write_temp(
            ".json",
            r#"{"options": [{"short": "-n", "long": "--name", "value_name": "NAME", "arity": "optional"}]}"#,
        );

        let table = OptionTable::load(file.path()).unwrap();
        let spec = table.find("--name").unwrap();
        assert_eq!(spec.arity, Arity::Optional);
        assert_eq!(spec.value_name, "NAME");
    }

    #[test]
    fn test_load_rejects_invalid_table() {
        let file = write_temp(".json", r#"{"options": [{"description": "nameless"}]}"#);

        match OptionTable::load(file.path()) {
            Err(TableError::Invalid(errors)) => {
                assert_eq!(errors, vec![ValidationError::MissingOptionName]);
            }
            other => panic!("expected invalid table, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = write_temp(".toml", "");
        assert!(matches!(
            OptionTable::load(file.path()),
            Err(TableError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_json_str_reports_syntax_errors() {
        assert!(matches!(
            OptionTable::from_json_str("{"),
            Err(TableError::JsonError(_))
        ));
    }
}
