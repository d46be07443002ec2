//! Parser configuration.
//!
//! [`ParserConfig`] carries the caller policy the parser itself has no
//! opinion on: the program name shown in usage text and whether `Required`
//! arity is enforced.

/// Program name used when none is configured.
pub const DEFAULT_PROGRAM_NAME: &str = "program";

/// Settings for a [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```
/// use optlist_core::ParserConfig;
///
/// let config = ParserConfig::new("mytool").strict_required(true);
/// assert_eq!(config.program, "mytool");
/// assert!(config.strict_required);
///
/// let defaults = ParserConfig::default();
/// assert_eq!(defaults.program, "program");
/// assert!(!defaults.strict_required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Program name shown in usage text.
    pub program: String,
    /// Reject `Required` options that end up without a value.
    ///
    /// Off by default: a missing value is stored as the empty string, the
    /// same as for `Optional` options.
    pub strict_required: bool,
}

impl ParserConfig {
    /// Creates a configuration for the given program name.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            ..Default::default()
        }
    }

    /// Turns strict `Required` arity on or off.
    pub fn strict_required(mut self, strict: bool) -> Self {
        self.strict_required = strict;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM_NAME.to_string(),
            strict_required: false,
        }
    }
}
