//! Option table validation.
//!
//! Checks the structural invariants of an [`OptionTable`] before it is used:
//! every option needs a name, forms must be spelled with the right number of
//! dashes, and no spelling may be declared twice.
//!
//! The parser accepts any table, so validation is advisory for hand-built
//! tables. [`OptionTable::load`](crate::OptionTable::load) rejects tables
//! that fail it.
//!
//! # Examples
//!
//! ```
//! use optlist_core::*;
//!
//! let table = OptionTable::new().with_option(OptionSpec::flag("-v", "--verbose"));
//! assert!(validate_table(&table).is_empty());
//!
//! // Invalid: short form missing its dash
//! let bad = OptionTable::new().with_option(OptionSpec::flag("v", "--verbose"));
//! assert!(!validate_table(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::OptionTable;

/// Option table validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An option has neither short nor long form.
    #[error("option must define short or long form")]
    MissingOptionName,
    /// Short form does not start with a single dash (e.g. `"v"` instead of `"-v"`).
    #[error("invalid short option form: {0}")]
    InvalidShortForm(String),
    /// Long form does not start with `--`, is too short, or contains `=`.
    #[error("invalid long option form: {0}")]
    InvalidLongForm(String),
    /// Two options share the same spelling.
    #[error("duplicate option form: {0}")]
    DuplicateForm(String),
}

/// Validates an option table.
///
/// Stops at the first problem found, in declaration order.
///
/// # Examples
///
/// ```
/// use optlist_core::*;
///
/// let table = OptionTable::new()
///     .with_option(OptionSpec::flag("-v", "--verbose"))
///     .with_option(OptionSpec::required("-v", "--value"));
///
/// assert_eq!(
///     validate_table(&table),
///     vec![ValidationError::DuplicateForm("-v".to_string())]
/// );
/// ```
pub fn validate_table(table: &OptionTable) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for spec in table {
        if spec.short_form.is_empty() && spec.long_form.is_empty() {
            errors.push(ValidationError::MissingOptionName);
            return errors;
        }

        let short = &spec.short_form;
        if !short.is_empty() {
            if !short.starts_with('-') || short.starts_with("--") || short.len() < 2 {
                errors.push(ValidationError::InvalidShortForm(short.clone()));
                return errors;
            }
            if !seen.insert(short.as_str()) {
                errors.push(ValidationError::DuplicateForm(short.clone()));
                return errors;
            }
        }

        let long = &spec.long_form;
        if !long.is_empty() {
            if !long.starts_with("--") || long.len() < 3 || long.contains('=') {
                errors.push(ValidationError::InvalidLongForm(long.clone()));
                return errors;
            }
            if !seen.insert(long.as_str()) {
                errors.push(ValidationError::DuplicateForm(long.clone()));
                return errors;
            }
        }
    }

    errors
}
