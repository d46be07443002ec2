//! Error types for parsing arguments and loading option tables.
//!
//! [`ParseError`] covers everything that can go wrong while scanning an
//! argument vector. [`TableError`] covers reading a table definition from
//! disk. Both name the offending text verbatim so callers and scripts can
//! assert on the message.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that stop a parse.
///
/// Every parse error is terminal for the current [`Parser::parse`] call.
///
/// [`Parser::parse`]: crate::Parser::parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token at dispatch position matches no declared option.
    #[error("invalid option '{0}'")]
    UnknownOption(String),

    /// A list option was not followed by at least one value.
    #[error("no argument after option '{0}' with list argument type")]
    MissingListArgument(String),

    /// A matched token is neither the long nor the short form of its spec.
    #[error("unable to determine if '{0}' is a long or short option")]
    AmbiguousOptionForm(String),

    /// The matched spec has neither a short nor a long form.
    #[error("option must define a short or long form")]
    UnkeyableOption,

    /// A required option got no value while strict required arity is on.
    #[error("option '{0}' requires an argument")]
    MissingRequiredArgument(String),
}

/// Errors that can occur while loading an option table definition.
#[derive(Debug, Error)]
pub enum TableError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported table format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The table loaded but failed validation.
    #[error("invalid option table: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results with [`TableError`].
pub type Result<T> = std::result::Result<T, TableError>;
