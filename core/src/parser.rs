//! Argument vector parser.
//!
//! [`Parser`] walks an argument vector left to right against an
//! [`OptionTable`]. Every token must either spell a declared option or be a
//! value consumed by the option before it. Values are extracted per the
//! option's [`Arity`]:
//!
//! - `None` — no value; the key is recorded with an empty value list.
//! - `Required` / `Optional` — long forms take an attached `=value`; short
//!   forms take the next token unless it spells an option.
//! - `List` — every following token up to the next option is a value. At
//!   least one is required.
//!
//! The built-in help option (`--help` / `-?`) stops the parse with
//! [`ParseOutcome::HelpRequested`]. Any other problem is a [`ParseError`];
//! the parser never exits the process itself.
//!
//! # Example
//!
//! ```
//! use optlist_core::*;
//!
//! let table = OptionTable::new()
//!     .with_option(OptionSpec::help())
//!     .with_option(OptionSpec::required("-n", "--name"))
//!     .with_option(OptionSpec::list("-i", "--items"))
//!     .with_option(OptionSpec::flag("-v", "--verbose"));
//!
//! let args: Vec<String> = ["--name=joe", "-i", "a", "b", "-v"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let mut parser = Parser::new(&table);
//! assert_eq!(parser.parse(&args), Ok(ParseOutcome::Parsed));
//! assert_eq!(parser.get("name"), Some("joe"));
//! assert_eq!(parser.get_all("items"), ["a", "b"]);
//! assert!(parser.has("-v"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{Arity, OptionSpec, OptionTable, ParseError, ParserConfig, split_long_token};

/// How a successful parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The whole argument vector was consumed.
    Parsed,
    /// The help option was encountered; the caller should print usage and
    /// stop. Tokens after the help option were not examined.
    HelpRequested,
}

/// Values supplied on the command line, keyed by canonical option key.
///
/// Values for a key are kept in arrival order. A key with no values means a
/// flag that was present.
///
/// The [`Display`](fmt::Display) impl prints one `key: v1, v2` line per key,
/// sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParseResult {
    values: BTreeMap<String, Vec<String>>,
}

impl ParseResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `key` was supplied, without adding a value.
    pub fn mark(&mut self, key: &str) {
        self.values.entry(key.to_string()).or_default();
    }

    /// Appends a value under `key`.
    pub fn push(&mut self, key: &str, value: &str) {
        self.values
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Whether `key` was supplied.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All values recorded under `key`, or `None` if it was not supplied.
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    /// First value recorded under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Iterates over keys and their values, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of supplied keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no option was supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, values) in self.iter() {
            writeln!(f, "{key}: {}", values.join(", "))?;
        }
        Ok(())
    }
}

/// A list option waiting for its values.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingList {
    key: String,
    token: String,
    collected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Scanning,
    AccumulatingList(PendingList),
}

/// What dispatching one option token did.
enum Dispatch {
    Help,
    Recorded { consumed: usize },
    EnterList(PendingList),
}

/// Parses an argument vector against a borrowed [`OptionTable`].
///
/// The table must outlive the parser and may be shared by any number of
/// parsers. The parser owns the [`ParseResult`] of its last `parse` call.
#[derive(Debug)]
pub struct Parser<'t> {
    table: &'t OptionTable,
    config: ParserConfig,
    result: ParseResult,
}

impl<'t> Parser<'t> {
    /// Creates a parser with the default [`ParserConfig`].
    pub fn new(table: &'t OptionTable) -> Self {
        Self::with_config(table, ParserConfig::default())
    }

    /// Creates a parser with the given configuration.
    pub fn with_config(table: &'t OptionTable, config: ParserConfig) -> Self {
        Self {
            table,
            config,
            result: ParseResult::new(),
        }
    }

    /// The option table this parser reads.
    pub fn table(&self) -> &'t OptionTable {
        self.table
    }

    /// The parser's configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Values recorded by the last parse.
    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    /// Consumes the parser, returning the recorded values.
    pub fn into_result(self) -> ParseResult {
        self.result
    }

    /// Parses `tokens`, the argument vector without the program name.
    ///
    /// Values from any earlier call are discarded first.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] met; scanning stops there.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist_core::*;
    ///
    /// let table = OptionTable::new().with_option(OptionSpec::help());
    /// let mut parser = Parser::new(&table);
    ///
    /// let args = vec!["--help".to_string(), "--bogus".to_string()];
    /// assert_eq!(parser.parse(&args), Ok(ParseOutcome::HelpRequested));
    ///
    /// let args = vec!["--bogus".to_string()];
    /// assert_eq!(
    ///     parser.parse(&args),
    ///     Err(ParseError::UnknownOption("--bogus".to_string()))
    /// );
    /// ```
    pub fn parse(&mut self, tokens: &[String]) -> Result<ParseOutcome, ParseError> {
        self.result.clear();

        let table = self.table;
        let mut state = ScanState::Scanning;
        let mut cursor = 0;

        while let Some(token) = tokens.get(cursor) {
            if let ScanState::AccumulatingList(pending) =
                std::mem::replace(&mut state, ScanState::Scanning)
            {
                state = self.continue_list(pending, token)?;
                if matches!(state, ScanState::AccumulatingList(_)) {
                    cursor += 1;
                    continue;
                }
            }

            let spec = table
                .find(token)
                .ok_or_else(|| ParseError::UnknownOption(token.clone()))?;

            match self.dispatch(spec, token, tokens.get(cursor + 1))? {
                Dispatch::Help => {
                    debug!(token = %token, "help requested");
                    return Ok(ParseOutcome::HelpRequested);
                }
                Dispatch::Recorded { consumed } => cursor += consumed,
                Dispatch::EnterList(pending) => {
                    debug!(token = %token, key = %pending.key, "entering list mode");
                    state = ScanState::AccumulatingList(pending);
                    cursor += 1;
                }
            }
        }

        if let ScanState::AccumulatingList(pending) = state {
            if pending.collected == 0 {
                return Err(ParseError::MissingListArgument(pending.token));
            }
        }

        Ok(ParseOutcome::Parsed)
    }

    /// Feeds one token to a pending list option.
    ///
    /// A token spelling an option ends list mode; the caller then dispatches
    /// that same token. Anything else is a value.
    fn continue_list(
        &mut self,
        pending: PendingList,
        token: &str,
    ) -> Result<ScanState, ParseError> {
        if self.table.is_option(token) {
            if pending.collected == 0 {
                return Err(ParseError::MissingListArgument(pending.token));
            }
            debug!(key = %pending.key, values = pending.collected, "leaving list mode");
            return Ok(ScanState::Scanning);
        }

        self.result.push(&pending.key, token);
        Ok(ScanState::AccumulatingList(PendingList {
            collected: pending.collected + 1,
            ..pending
        }))
    }

    fn dispatch(
        &mut self,
        spec: &OptionSpec,
        token: &str,
        next: Option<&String>,
    ) -> Result<Dispatch, ParseError> {
        let key = spec.key().ok_or(ParseError::UnkeyableOption)?;
        debug!(token = %token, key = %key, arity = ?spec.arity, "matched option");

        match spec.arity {
            Arity::None => {
                if spec.is_help() {
                    return Ok(Dispatch::Help);
                }
                self.result.mark(key);
                Ok(Dispatch::Recorded { consumed: 1 })
            }
            Arity::List => {
                // values only ever come from following tokens; `=text` is dropped
                if next.is_none() {
                    return Err(ParseError::MissingListArgument(token.to_string()));
                }
                Ok(Dispatch::EnterList(PendingList {
                    key: key.to_string(),
                    token: token.to_string(),
                    collected: 0,
                }))
            }
            Arity::Required | Arity::Optional => {
                let (value, consumed) = if OptionTable::is_long_form(spec, token) {
                    self.long_value(spec, token)?
                } else if OptionTable::is_short_form(spec, token) {
                    self.short_value(spec, token, next)?
                } else {
                    return Err(ParseError::AmbiguousOptionForm(token.to_string()));
                };
                self.result.push(key, value);
                Ok(Dispatch::Recorded { consumed })
            }
        }
    }

    /// Long forms never look ahead; the value must be attached with `=`.
    fn long_value<'a>(
        &self,
        spec: &OptionSpec,
        token: &'a str,
    ) -> Result<(&'a str, usize), ParseError> {
        if !token.contains('=') {
            self.check_required(spec, token)?;
        }
        let (_, value) = split_long_token(token);
        Ok((value, 1))
    }

    /// Short forms take the next token unless it spells an option.
    fn short_value<'a>(
        &self,
        spec: &OptionSpec,
        token: &str,
        next: Option<&'a String>,
    ) -> Result<(&'a str, usize), ParseError> {
        match next {
            Some(value) if !self.table.is_option(value) => Ok((value.as_str(), 2)),
            _ => {
                self.check_required(spec, token)?;
                Ok(("", 1))
            }
        }
    }

    fn check_required(&self, spec: &OptionSpec, token: &str) -> Result<(), ParseError> {
        if self.config.strict_required && spec.arity == Arity::Required {
            return Err(ParseError::MissingRequiredArgument(token.to_string()));
        }
        Ok(())
    }

    /// Appends `value` under the canonical key of `name`.
    ///
    /// `name` may be dashed or bare, as for [`OptionTable::canonical_key`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownOption`] if `name` resolves to no
    /// option, or [`ParseError::UnkeyableOption`] if it resolves to an
    /// option without forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist_core::*;
    ///
    /// let table = OptionTable::new().with_option(OptionSpec::required("-l", "--level"));
    /// let mut parser = Parser::new(&table);
    ///
    /// parser.set("level", "3").unwrap();
    /// assert_eq!(parser.get("-l"), Some("3"));
    /// assert!(parser.set("missing", "x").is_err());
    /// ```
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        let spec = self
            .table
            .resolve(name)
            .ok_or_else(|| ParseError::UnknownOption(name.to_string()))?;
        let key = spec.key().ok_or(ParseError::UnkeyableOption)?;
        self.result.push(key, value);
        Ok(())
    }

    /// Whether the option named `name` was supplied.
    pub fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// First value supplied for `name`.
    ///
    /// Returns `None` if the option was absent or supplied without values.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lookup(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value supplied for `name`, in arrival order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.lookup(name).unwrap_or(&[])
    }

    /// Renders usage text with the configured program name.
    pub fn usage(&self) -> String {
        self.table.usage(&self.config.program)
    }

    fn lookup(&self, name: &str) -> Option<&[String]> {
        let Some(key) = self.table.canonical_key(name) else {
            warn!(name = %name, "query does not name a declared option");
            return None;
        };
        self.result.values(&key)
    }
}
