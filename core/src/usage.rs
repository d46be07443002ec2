//! Usage text rendering.
//!
//! The layout is one header, then one block per option in declaration
//! order:
//!
//! ```text
//! Usage: tool [option]...
//!
//! Options:
//!     -?, --help
//!         Print this help message.
//!
//!     -o, --output=<FILE>
//!         Write output to FILE.
//! ```

use crate::{OptionSpec, OptionTable};

impl OptionTable {
    /// Renders the usage message for `program`.
    ///
    /// The output depends only on the table, never on parse state.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlist_core::{OptionSpec, OptionTable};
    ///
    /// let table = OptionTable::new()
    ///     .with_option(OptionSpec::required("-n", "--name").with_value_name("NAME"));
    ///
    /// let usage = table.usage("tool");
    /// assert!(usage.starts_with("Usage: tool [option]...\n"));
    /// assert!(usage.contains("    -n, --name=<NAME>\n"));
    /// ```
    pub fn usage(&self, program: &str) -> String {
        let blocks: Vec<String> = self.iter().map(option_block).collect();
        format!(
            "Usage: {program} [option]...\n\nOptions:\n{}",
            blocks.join("\n")
        )
    }
}

fn option_block(spec: &OptionSpec) -> String {
    format!("    {}\n        {}\n", form_line(spec), spec.description)
}

fn form_line(spec: &OptionSpec) -> String {
    let forms: Vec<&str> = [spec.short_form.as_str(), spec.long_form.as_str()]
        .into_iter()
        .filter(|form| !form.is_empty())
        .collect();

    let mut line = forms.join(", ");
    if !spec.value_name.is_empty() {
        line.push_str(&format!("=<{}>", spec.value_name));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_renders_blocks_in_declaration_order() {
        let table = OptionTable::new()
            .with_option(OptionSpec::help())
            .with_option(
                OptionSpec::required("-o", "--output")
                    .with_value_name("FILE")
                    .with_description("Write output to FILE."),
            );

        assert_eq!(
            table.usage("tool"),
            "Usage: tool [option]...\n\
             \n\
             Options:\n    \
             -?, --help\n        \
             Print this help message.\n\
             \n    \
             -o, --output=<FILE>\n        \
             Write output to FILE.\n"
        );
    }

    #[test]
    fn test_form_line_skips_missing_forms() {
        assert_eq!(form_line(&OptionSpec::flag("-q", "")), "-q");
        assert_eq!(
            form_line(&OptionSpec::list("", "--items").with_value_name("ITEM")),
            "--items=<ITEM>"
        );
    }

    #[test]
    fn test_usage_of_empty_table_has_only_header() {
        assert_eq!(
            OptionTable::new().usage("tool"),
            "Usage: tool [option]...\n\nOptions:\n"
        );
    }
}
