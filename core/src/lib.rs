//! Declarative option tables and a fail-fast command-line argument parser.
//!
//! This crate turns a list of accepted options and a raw argument vector
//! into a queryable key/value store:
//!
//! - [`OptionSpec`] — one option with short/long forms, an [`Arity`], a
//!   value name and a description.
//! - [`OptionTable`] — the ordered catalog of options, with lookup,
//!   canonical key derivation and usage rendering.
//! - [`Parser`] — scans an argument vector against a table and records the
//!   supplied values, queryable with [`Parser::has`], [`Parser::get`] and
//!   [`Parser::get_all`].
//!
//! Parsing never exits the process. Malformed input is a [`ParseError`] and
//! the help option is [`ParseOutcome::HelpRequested`]; deciding what to
//! print and which exit code to use is left to the caller.
//!
//! Tables can be written in JSON or YAML and loaded with
//! [`OptionTable::load`], which also runs [`validate_table`].
//!
//! # Example
//!
//! ```
//! use optlist_core::*;
//!
//! let table = OptionTable::new()
//!     .with_option(OptionSpec::help())
//!     .with_option(
//!         OptionSpec::required("-o", "--output")
//!             .with_value_name("FILE")
//!             .with_description("Write output to FILE."),
//!     )
//!     .with_option(OptionSpec::flag("-v", "--verbose"));
//! assert!(validate_table(&table).is_empty());
//!
//! let args = vec!["-o".to_string(), "out.txt".to_string(), "--verbose".to_string()];
//! let mut parser = Parser::with_config(&table, ParserConfig::new("mytool"));
//! match parser.parse(&args) {
//!     Ok(ParseOutcome::Parsed) => {}
//!     Ok(ParseOutcome::HelpRequested) => print!("{}", parser.usage()),
//!     Err(err) => eprintln!("mytool: {err}"),
//! }
//!
//! assert_eq!(parser.get("output"), Some("out.txt"));
//! assert!(parser.has("verbose"));
//! ```

mod config;
mod error;
mod loader;
mod parser;
mod types;
mod usage;
mod validate;

pub use config::{DEFAULT_PROGRAM_NAME, ParserConfig};
pub use error::{ParseError, Result, TableError};
pub use parser::{ParseOutcome, ParseResult, Parser};
pub use types::*;
pub use validate::{ValidationError, validate_table};
