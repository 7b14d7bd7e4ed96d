// Command-line interface for tflow
//
// This binary moves post-editing corpora between T-Flow, the marker-line format
// translators edit by hand, and JSONL records consumed by tooling. Markdown documents
// can be imported into T-Flow, one segment per block.
//
// All the conversion work lives in the tflow-babel crate; this crate only opens the
// streams, loads configuration and sets up logging.
//
// Usage:
//  tflow t2j  [-i <input>] [-o <output>]                    - T-Flow to JSONL
//  tflow j2t  [-i <input>] [-o <output>]                    - JSONL to T-Flow
//  tflow md2t [-i <input>] [-o <output>] [--id-start N] [--id-width N]
//  tflow convert <input> --to <format> [--from <format>] [-o <output>]
//  tflow --list-formats                                     - List available formats
//
// Inputs and outputs default to `-` (stdin / stdout). Records are streamed, so output
// written before an error is kept; the error is printed to stderr and the exit status
// is 1.
//
// Logs go to stderr. RUST_LOG wins; otherwise -v (debug), -vv (trace) and -q (error)
// pick the level, falling back to `logging.level` from the configuration.

mod streams;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::io;
use streams::{open_input, open_output, STDIO};
use tflow_babel::formats::{MarkdownFormat, MarkdownOptions, MAX_ID_WIDTH};
use tflow_babel::{FormatError, FormatRegistry};
use tflow_config::{ConfigError, Loader, TflowConfig, LOCAL_CONFIG_FILE};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not detect format from filename '{0}', please specify --from explicitly")]
    UndetectedFormat(String),

    #[error("Invalid log level '{level}': {source}")]
    LogFilter {
        level: String,
        #[source]
        source: ParseError,
    },

    #[error("No command given. Use --help for usage information.")]
    MissingCommand,
}

/// Shared `-i` / `-o` arguments of the fixed-direction commands.
fn io_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("input")
            .long("input")
            .short('i')
            .value_name("PATH")
            .help("Input file, or - for stdin")
            .default_value(STDIO)
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("output")
            .long("output")
            .short('o')
            .value_name("PATH")
            .help("Output file, or - for stdout")
            .default_value(STDIO)
            .value_hint(ValueHint::FilePath),
    )
}

fn build_cli() -> Command {
    Command::new("tflow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert T-Flow post-editing files to and from JSONL")
        .long_about(
            "tflow converts translation post-editing corpora between T-Flow, JSONL and Markdown.\n\n\
            T-Flow markers:\n  \
            @ meta    < source    ~ machine translation    > post-edited target    # comment\n\n\
            Examples:\n  \
            tflow t2j -i corpus.tflow -o corpus.jsonl   # T-Flow to JSONL\n  \
            tflow j2t < corpus.jsonl                    # JSONL to T-Flow on stdout\n  \
            tflow md2t -i guide.md --id-start 100       # Import a Markdown document\n  \
            tflow convert corpus.tflow --to jsonl       # Format detected from extension",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tflow.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .global(true),
        )
        .subcommand(io_args(
            Command::new("t2j").about("Convert T-Flow to JSONL records"),
        ))
        .subcommand(io_args(
            Command::new("j2t").about("Convert JSONL records to T-Flow"),
        ))
        .subcommand(
            io_args(
                Command::new("md2t")
                    .about("Import a Markdown document as T-Flow, one segment per block"),
            )
            .arg(
                Arg::new("id-start")
                    .long("id-start")
                    .value_name("N")
                    .help("Id of the first segment (default from config: 1)")
                    .value_parser(clap::value_parser!(i64).range(0..)),
            )
            .arg(
                Arg::new("id-width")
                    .long("id-width")
                    .value_name("N")
                    .help("Zero-pad ids to N digits (default from config: 4)")
                    .value_parser(clap::value_parser!(i64).range(0..=MAX_ID_WIDTH as i64)),
            ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between any two formats")
                .long_about(
                    "Convert between any parsing and any serializing format.\n\n\
                    The source format is auto-detected from the file extension\n\
                    (.tflow/.tf, .jsonl/.ndjson, .md/.markdown) unless --from is given.\n\
                    Use --list-formats to see what each format supports.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin (requires --from)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .default_value(STDIO)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_cli_config(matches)?;
    init_logging(&log_filter(matches, &config))?;

    let registry = build_registry(&config)?;

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    match matches.subcommand() {
        Some(("t2j", sub_matches)) => handle_fixed_command(&registry, sub_matches, "tflow", "jsonl"),
        Some(("j2t", sub_matches)) => handle_fixed_command(&registry, sub_matches, "jsonl", "tflow"),
        Some(("md2t", sub_matches)) => {
            handle_fixed_command(&registry, sub_matches, "markdown", "tflow")
        }
        Some(("convert", sub_matches)) => handle_convert_command(&registry, sub_matches),
        _ => Err(CliError::MissingCommand),
    }
}

/// Load defaults, then ./tflow.toml, then --config, then command line overrides.
fn load_cli_config(matches: &ArgMatches) -> Result<TflowConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(md_matches) = matches.subcommand_matches("md2t") {
        if let Some(start) = md_matches.get_one::<i64>("id-start") {
            loader = loader.set_override("convert.markdown.id_start", *start)?;
        }
        if let Some(width) = md_matches.get_one::<i64>("id-width") {
            loader = loader.set_override("convert.markdown.id_width", *width)?;
        }
    }

    Ok(loader.build()?)
}

/// Default log filter when RUST_LOG is not set.
fn log_filter(matches: &ArgMatches, config: &TflowConfig) -> String {
    if matches.get_flag("quiet") {
        return "error".to_string();
    }
    match matches.get_count("verbose") {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn init_logging(default_filter: &str) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|source| CliError::LogFilter {
            level: default_filter.to_string(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// The default registry, with Markdown numbering taken from the configuration.
fn build_registry(config: &TflowConfig) -> Result<FormatRegistry, CliError> {
    let options = MarkdownOptions::from(&config.convert.markdown);
    options.validate()?;

    let mut registry = FormatRegistry::default();
    registry.register(MarkdownFormat::new(options));
    Ok(registry)
}

/// Handle t2j, j2t and md2t
fn handle_fixed_command(
    registry: &FormatRegistry,
    sub_matches: &ArgMatches,
    from: &str,
    to: &str,
) -> Result<(), CliError> {
    let input = path_arg(sub_matches, "input");
    let output = path_arg(sub_matches, "output");
    convert_paths(registry, input, output, from, to)
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let input = path_arg(sub_matches, "input");
    let output = path_arg(sub_matches, "output");
    let to = sub_matches
        .get_one::<String>("to")
        .map(String::as_str)
        .unwrap_or_default();

    // Auto-detect --from if not provided
    let from = match sub_matches.get_one::<String>("from") {
        Some(from) => from.clone(),
        None => registry
            .detect_format_from_filename(input)
            .ok_or_else(|| CliError::UndetectedFormat(input.to_string()))?,
    };

    convert_paths(registry, input, output, &from, to)
}

fn convert_paths(
    registry: &FormatRegistry,
    input: &str,
    output: &str,
    from: &str,
    to: &str,
) -> Result<(), CliError> {
    // Opening the output truncates it, so formats are checked first
    registry.check_conversion(from, to)?;

    let reader = open_input(input).map_err(|source| CliError::Open {
        path: input.to_string(),
        source,
    })?;
    let mut writer = open_output(output).map_err(|source| CliError::Open {
        path: output.to_string(),
        source,
    })?;

    let written = registry.convert(reader, from, to, writer.as_mut())?;
    debug!(input, output, records = written, "done");
    Ok(())
}

fn path_arg<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or(STDIO)
}

/// Handle --list-formats
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut capabilities = Vec::new();
        if format.supports_parsing() {
            capabilities.push("parse");
        }
        if format.supports_serialization() {
            capabilities.push("serialize");
        }
        let extensions: Vec<String> = format
            .file_extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect();
        println!(
            "  {:<10} {} ({}) [{}]",
            name,
            format.description(),
            extensions.join(", "),
            capabilities.join(", ")
        );
    }
}
