//! End-to-end behaviour of the public parsing API.

use optlist_core::{
    Arity, OptionSpec, OptionTable, ParseError, ParseOutcome, Parser, ParserConfig,
    validate_table,
};

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

fn compiler_table() -> OptionTable {
    OptionTable::new()
        .with_option(OptionSpec::help())
        .with_option(
            OptionSpec::required("-o", "--output")
                .with_value_name("FILE")
                .with_description("Write output to FILE."),
        )
        .with_option(
            OptionSpec::optional("-O", "--optimize")
                .with_value_name("LEVEL")
                .with_description("Optimization level."),
        )
        .with_option(
            OptionSpec::list("-I", "--include")
                .with_value_name("DIR")
                .with_description("Add directories to the search path."),
        )
        .with_option(OptionSpec::flag("-v", "--verbose").with_description("Verbose output."))
        .with_option(OptionSpec::flag("-q", "").with_description("Quiet."))
}

// ---------------------------------------------------------------------------
// Canonical keys
// ---------------------------------------------------------------------------

#[test]
fn canonical_key_of_long_form_strips_two_dashes() {
    let table = compiler_table();
    for spec in table.iter().filter(|s| !s.long_form.is_empty()) {
        let expected = spec.long_form.trim_start_matches('-');
        assert_eq!(table.canonical_key(&spec.long_form).as_deref(), Some(expected));
        assert_eq!(table.canonical_key(expected).as_deref(), Some(expected));
    }
}

#[test]
fn canonical_key_of_short_only_option_strips_one_dash() {
    let table = compiler_table();
    assert_eq!(table.canonical_key("-q").as_deref(), Some("q"));
    assert_eq!(table.canonical_key("q").as_deref(), Some("q"));
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn full_command_line() {
    let table = compiler_table();
    let mut parser = Parser::with_config(&table, ParserConfig::new("cc"));

    let outcome = parser
        .parse(&args(&[
            "-v",
            "--output=a.out",
            "-I",
            "include",
            "/usr/include",
            "-O",
            "-q",
        ]))
        .unwrap();

    assert_eq!(outcome, ParseOutcome::Parsed);
    assert!(parser.has("verbose"));
    assert!(parser.has("-v"));
    assert_eq!(parser.get("output"), Some("a.out"));
    assert_eq!(parser.get("-o"), Some("a.out"));
    assert_eq!(parser.get_all("include"), ["include", "/usr/include"]);
    assert_eq!(parser.get("optimize"), Some(""));
    assert!(parser.has("q"));
    assert_eq!(parser.result().len(), 5);
}

#[test]
fn absent_options_are_not_reported() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    parser.parse(&args(&["-v"])).unwrap();
    assert!(!parser.has("output"));
    assert_eq!(parser.get("output"), None);
    assert!(parser.get_all("output").is_empty());
    assert!(!parser.has("not-an-option"));
}

#[test]
fn empty_argument_vector_parses_to_nothing() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    assert_eq!(parser.parse(&[]), Ok(ParseOutcome::Parsed));
    assert!(parser.result().is_empty());
}

#[test]
fn bare_positional_arguments_are_rejected() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    assert_eq!(
        parser.parse(&args(&["-v", "main.c"])),
        Err(ParseError::UnknownOption("main.c".to_string()))
    );
}

#[test]
fn short_optional_value_is_taken_from_next_token() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    parser.parse(&args(&["-O", "2", "-v"])).unwrap();
    assert_eq!(parser.get("optimize"), Some("2"));
    assert!(parser.has("verbose"));
}

#[test]
fn list_values_may_look_like_long_tokens_of_unknown_options() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    // only declared spellings end list mode
    parser
        .parse(&args(&["--include", "--not-declared", "-x", "-v"]))
        .unwrap();
    assert_eq!(parser.get_all("include"), ["--not-declared", "-x"]);
    assert!(parser.has("verbose"));
}

#[test]
fn list_ended_by_value_option_hands_over_the_token() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    parser
        .parse(&args(&["-I", "a", "--output=b", "-I", "c"]))
        .unwrap();
    assert_eq!(parser.get_all("include"), ["a", "c"]);
    assert_eq!(parser.get("output"), Some("b"));
}

#[test]
fn list_option_at_end_is_missing_its_argument() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    let err = parser.parse(&args(&["-v", "--include"])).unwrap_err();
    assert_eq!(err, ParseError::MissingListArgument("--include".to_string()));
    assert!(err.to_string().contains("'--include'"));
}

#[test]
fn help_wins_over_later_errors() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    assert_eq!(
        parser.parse(&args(&["-v", "--help", "--bogus", "--include"])),
        Ok(ParseOutcome::HelpRequested)
    );
}

#[test]
fn errors_before_help_are_reported() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    assert_eq!(
        parser.parse(&args(&["--bogus", "--help"])),
        Err(ParseError::UnknownOption("--bogus".to_string()))
    );
}

#[test]
fn table_is_shared_between_parsers() {
    let table = compiler_table();
    let mut first = Parser::new(&table);
    let mut second = Parser::new(&table);

    first.parse(&args(&["-v"])).unwrap();
    second.parse(&args(&["-q"])).unwrap();

    assert!(first.has("verbose") && !first.has("q"));
    assert!(second.has("q") && !second.has("verbose"));
}

#[test]
fn set_injects_defaults_before_querying() {
    let table = compiler_table();
    let mut parser = Parser::new(&table);

    parser.parse(&args(&["-v"])).unwrap();
    if !parser.has("output") {
        parser.set("output", "a.out").unwrap();
    }
    assert_eq!(parser.get("--output"), Some("a.out"));
    assert_eq!(
        parser.set("--bogus", "x"),
        Err(ParseError::UnknownOption("--bogus".to_string()))
    );
}

// ---------------------------------------------------------------------------
// Usage and tables
// ---------------------------------------------------------------------------

#[test]
fn usage_lists_every_option_in_order() {
    let table = compiler_table();
    let mut parser = Parser::with_config(&table, ParserConfig::new("cc"));

    let before = parser.usage();
    parser.parse(&args(&["-v"])).unwrap();
    assert_eq!(parser.usage(), before);

    assert!(before.starts_with("Usage: cc [option]...\n\nOptions:\n"));
    let forms: Vec<&str> = before
        .lines()
        .filter(|line| line.starts_with("    ") && !line.starts_with("        "))
        .map(str::trim)
        .collect();
    assert_eq!(
        forms,
        vec![
            "-?, --help",
            "-o, --output=<FILE>",
            "-O, --optimize=<LEVEL>",
            "-I, --include=<DIR>",
            "-v, --verbose",
            "-q",
        ]
    );
}

#[test]
fn yaml_table_drives_the_parser() {
    let table = OptionTable::from_yaml_str(
        r#"
options:
  - short: "-?"
    long: "--help"
    description: Print this help message.
  - short: "-n"
    long: "--name"
    value_name: NAME
    arity: required
  - long: "--tags"
    arity: list
"#,
    )
    .unwrap();
    assert!(validate_table(&table).is_empty());
    assert_eq!(table.find("--tags").map(|s| s.arity), Some(Arity::List));

    let mut parser = Parser::new(&table);
    parser
        .parse(&args(&["--tags", "a", "b", "-n", "joe"]))
        .unwrap();
    assert_eq!(parser.get_all("tags"), ["a", "b"]);
    assert_eq!(parser.get("name"), Some("joe"));
}
