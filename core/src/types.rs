//! Option table type definitions.
//!
//! This module defines the declarative data model a program hands to the
//! parser: one [`OptionSpec`] per accepted option, collected in declaration
//! order into an [`OptionTable`]. The types serialize with [`serde`] so a
//! table can be kept in a JSON or YAML file next to the program.

use serde::{Deserialize, Serialize};

/// Long form of the built-in help option.
pub const HELP_LONG_FORM: &str = "--help";

/// Short form of the built-in help option.
pub const HELP_SHORT_FORM: &str = "-?";

/// How many values an option consumes.
///
/// # Examples
///
/// ```
/// use optlist_core::Arity;
///
/// assert_eq!(Arity::default(), Arity::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// No value; the option is a flag (the default).
    #[default]
    None,
    /// Exactly one value.
    Required,
    /// At most one value.
    Optional,
    /// One or more bare values following the option.
    List,
}

/// One declared option.
///
/// An option has a short form (e.g. `-v`) and/or a long form
/// (e.g. `--verbose`). An empty string means the form is absent. The
/// `value_name` is only used when rendering usage text.
///
/// # Examples
///
/// ```
/// use optlist_core::{Arity, OptionSpec};
///
/// let output = OptionSpec::required("-o", "--output")
///     .with_value_name("FILE")
///     .with_description("Write output to FILE");
/// assert_eq!(output.arity, Arity::Required);
/// assert_eq!(output.key(), Some("output"));
///
/// let short_only = OptionSpec::flag("-q", "");
/// assert_eq!(short_only.key(), Some("q"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Short form (e.g. "-n")
    #[serde(default, rename = "short", skip_serializing_if = "String::is_empty")]
    pub short_form: String,
    /// Long form (e.g. "--name")
    #[serde(default, rename = "long", skip_serializing_if = "String::is_empty")]
    pub long_form: String,
    /// Display name of the value in usage text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_name: String,
    /// Number of values consumed
    #[serde(default)]
    pub arity: Arity,
    /// Description shown in usage text
    #[serde(default)]
    pub description: String,
}

impl OptionSpec {
    /// Creates an option with the given forms and arity.
    pub fn new(short_form: &str, long_form: &str, arity: Arity) -> Self {
        Self {
            short_form: short_form.to_string(),
            long_form: long_form.to_string(),
            value_name: String::new(),
            arity,
            description: String::new(),
        }
    }

    /// Creates a flag that takes no value.
    pub fn flag(short_form: &str, long_form: &str) -> Self {
        Self::new(short_form, long_form, Arity::None)
    }

    /// Creates an option that takes exactly one value.
    pub fn required(short_form: &str, long_form: &str) -> Self {
        Self::new(short_form, long_form, Arity::Required)
    }

    /// Creates an option that takes at most one value.
    pub fn optional(short_form: &str, long_form: &str) -> Self {
        Self::new(short_form, long_form, Arity::Optional)
    }

    /// Creates an option that collects one or more following values.
    pub fn list(short_form: &str, long_form: &str) -> Self {
        Self::new(short_form, long_form, Arity::List)
    }

    /// Creates the built-in help option (`-?`, `--help`).
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist_core::OptionSpec;
    ///
    /// assert!(OptionSpec::help().is_help());
    /// ```
    pub fn help() -> Self {
        Self::flag(HELP_SHORT_FORM, HELP_LONG_FORM).with_description("Print this help message.")
    }

    /// Sets the value name shown in usage text.
    pub fn with_value_name(mut self, name: &str) -> Self {
        self.value_name = name.to_string();
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Returns the canonical key (long form preferred, falls back to short),
    /// without leading dashes.
    ///
    /// Returns `None` when both forms are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist_core::OptionSpec;
    ///
    /// assert_eq!(OptionSpec::flag("-v", "--verbose").key(), Some("verbose"));
    /// assert_eq!(OptionSpec::flag("-v", "").key(), Some("v"));
    /// assert_eq!(OptionSpec::flag("", "").key(), None);
    /// ```
    pub fn key(&self) -> Option<&str> {
        if !self.long_form.is_empty() {
            Some(
                self.long_form
                    .strip_prefix("--")
                    .unwrap_or(&self.long_form),
            )
        } else if !self.short_form.is_empty() {
            Some(
                self.short_form
                    .strip_prefix('-')
                    .unwrap_or(&self.short_form),
            )
        } else {
            None
        }
    }

    /// Whether this is the built-in help option.
    pub fn is_help(&self) -> bool {
        self.long_form == HELP_LONG_FORM || self.short_form == HELP_SHORT_FORM
    }

    /// Checks if `token` is this option's short form.
    pub fn matches_short(&self, token: &str) -> bool {
        !self.short_form.is_empty() && token == self.short_form
    }

    /// Checks if `token` is this option's long form, either bare or with an
    /// attached `=value`.
    pub fn matches_long(&self, token: &str) -> bool {
        !self.long_form.is_empty()
            && (token == self.long_form || split_long_token(token).0 == self.long_form)
    }

    /// Checks if `token` spells this option in either form.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist_core::OptionSpec;
    ///
    /// let name = OptionSpec::required("-n", "--name");
    /// assert!(name.matches("-n"));
    /// assert!(name.matches("--name"));
    /// assert!(name.matches("--name=value"));
    /// assert!(!name.matches("-n=value"));
    /// ```
    pub fn matches(&self, token: &str) -> bool {
        self.matches_short(token) || self.matches_long(token)
    }
}

/// Splits a long option token on its first `=`.
///
/// Returns the option part and the value part; the value is empty when the
/// token has no `=`.
///
/// # Examples
///
/// ```
/// use optlist_core::split_long_token;
///
/// assert_eq!(split_long_token("--name=value"), ("--name", "value"));
/// assert_eq!(split_long_token("--expr=a=b"), ("--expr", "a=b"));
/// assert_eq!(split_long_token("--name"), ("--name", ""));
/// ```
pub fn split_long_token(token: &str) -> (&str, &str) {
    token.split_once('=').unwrap_or((token, ""))
}

/// Ordered catalog of recognized options.
///
/// Declaration order is kept for usage display. Lookup is a linear scan that
/// returns the first matching spec, so when two specs share a spelling the
/// first declared one wins.
///
/// # Examples
///
/// ```
/// use optlist_core::{OptionSpec, OptionTable};
///
/// let table = OptionTable::new()
///     .with_option(OptionSpec::help())
///     .with_option(OptionSpec::required("-n", "--name"));
///
/// assert_eq!(table.len(), 2);
/// assert!(table.find("--name=joe").is_some());
/// assert_eq!(table.canonical_key("n").as_deref(), Some("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionTable {
    /// Declared options, in declaration order
    #[serde(default)]
    pub options: Vec<OptionSpec>,
}

impl OptionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option to the end of the table.
    pub fn with_option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    /// Appends an option.
    pub fn push(&mut self, spec: OptionSpec) {
        self.options.push(spec);
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the table declares no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over the declared options in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.options.iter()
    }

    /// Finds the first spec spelled by `token`.
    ///
    /// A spec matches when its short form equals `token`, its long form
    /// equals `token`, or its long form equals the part of `token` before
    /// the first `=`. Empty forms never match.
    pub fn find(&self, token: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.matches(token))
    }

    /// Whether `token` spells any declared option.
    pub fn is_option(&self, token: &str) -> bool {
        self.find(token).is_some()
    }

    /// Whether `token` is written in `spec`'s long form.
    pub fn is_long_form(spec: &OptionSpec, token: &str) -> bool {
        spec.matches_long(token)
    }

    /// Whether `token` is written in `spec`'s short form.
    pub fn is_short_form(spec: &OptionSpec, token: &str) -> bool {
        spec.matches_short(token)
    }

    /// Resolves a query name to a spec.
    ///
    /// Dashed names are looked up as-is. Bare names are tried as a long
    /// form first (`name` → `--name`) and then as a short form
    /// (`name` → `-name`).
    pub fn resolve(&self, name: &str) -> Option<&OptionSpec> {
        if name.starts_with('-') {
            return self.find(name);
        }
        self.find(&format!("--{name}"))
            .or_else(|| self.find(&format!("-{name}")))
    }

    /// Returns the canonical key for a dashed or bare option name.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist_core::{OptionSpec, OptionTable};
    ///
    /// let table = OptionTable::new()
    ///     .with_option(OptionSpec::flag("-v", "--verbose"))
    ///     .with_option(OptionSpec::flag("-q", ""));
    ///
    /// assert_eq!(table.canonical_key("-v").as_deref(), Some("verbose"));
    /// assert_eq!(table.canonical_key("verbose").as_deref(), Some("verbose"));
    /// assert_eq!(table.canonical_key("q").as_deref(), Some("q"));
    /// assert_eq!(table.canonical_key("missing"), None);
    /// ```
    pub fn canonical_key(&self, name: &str) -> Option<String> {
        self.resolve(name)
            .and_then(OptionSpec::key)
            .map(String::from)
    }

    /// Returns the short form of the option spelled by `token`, if any.
    pub fn to_short_form(&self, token: &str) -> Option<&str> {
        self.find(token)
            .map(|spec| spec.short_form.as_str())
            .filter(|form| !form.is_empty())
    }

    /// Returns the long form of the option spelled by `token`, if any.
    pub fn to_long_form(&self, token: &str) -> Option<&str> {
        self.find(token)
            .map(|spec| spec.long_form.as_str())
            .filter(|form| !form.is_empty())
    }
}

impl FromIterator<OptionSpec> for OptionTable {
    fn from_iter<I: IntoIterator<Item = OptionSpec>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OptionTable {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
