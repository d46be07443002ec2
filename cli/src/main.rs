use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use optlist_core::{OptionTable, ParseOutcome, ParseResult, ParserConfig};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "optlist")]
#[command(about = "Parse command-line arguments against an option table file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse arguments (after `--`) against an option table.
    Parse(ParseArgs),
    /// Print the usage message for an option table.
    Usage(UsageArgs),
    /// Validate an option table file.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Option table file (.json, .yaml or .yml).
    #[arg(long)]
    table: PathBuf,
    /// Program name used in usage text and diagnostics.
    #[arg(long, default_value = optlist_core::DEFAULT_PROGRAM_NAME)]
    program: String,
    /// Output format for the parsed values.
    #[arg(long, default_value = "text")]
    format: CliOutputFormat,
    /// Reject required options that are given no value.
    #[arg(long)]
    strict_required: bool,
    /// Arguments to parse, excluding the program name.
    #[arg(last = true, allow_hyphen_values = true)]
    arguments: Vec<String>,
}

#[derive(Debug, Args)]
struct UsageArgs {
    /// Option table file (.json, .yaml or .yml).
    #[arg(long)]
    table: PathBuf,
    /// Program name shown in the usage line.
    #[arg(long, default_value = optlist_core::DEFAULT_PROGRAM_NAME)]
    program: String,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Option table file (.json, .yaml or .yml).
    #[arg(long)]
    table: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Usage(args) => run_usage(args),
        Command::Validate(args) => run_validate(args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_table(path: &Path) -> Result<OptionTable, String> {
    OptionTable::load(path).map_err(|err| format!("Failed to load '{}': {err}", path.display()))
}

fn run_parse(args: ParseArgs) -> Result<ExitCode, String> {
    let table = load_table(&args.table)?;
    let config = ParserConfig::new(&args.program).strict_required(args.strict_required);
    let mut parser = optlist_core::Parser::with_config(&table, config);

    match parser.parse(&args.arguments) {
        Ok(ParseOutcome::Parsed) => {
            print!("{}", format_result(parser.result(), args.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(ParseOutcome::HelpRequested) => {
            print!("{}", parser.usage());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}: {err}", args.program);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_usage(args: UsageArgs) -> Result<ExitCode, String> {
    let table = load_table(&args.table)?;
    print!("{}", table.usage(&args.program));
    Ok(ExitCode::SUCCESS)
}

fn run_validate(args: ValidateArgs) -> Result<ExitCode, String> {
    let table = load_table(&args.table)?;
    println!(
        "Validated {} option(s) in '{}'.",
        table.len(),
        args.table.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn format_result(result: &ParseResult, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Text => Ok(result.to_string()),
        CliOutputFormat::Json => serde_json::to_string_pretty(result)
            .map(|raw| format!("{raw}\n"))
            .map_err(|err| format!("Failed to serialize JSON: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(result)
            .map_err(|err| format!("Failed to serialize YAML: {err}")),
    }
}
