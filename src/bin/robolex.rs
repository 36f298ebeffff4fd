//! Command-line interface for robolex
//! This binary tokenizes Robot Framework plain-text files and prints the recognized contexts.
//!
//! Usage:
//!   robolex tokens `<path>` [--format `<format>`]                        - Print the token stream
//!   robolex contexts `<path>` [--config `<name>`] [--config-file `<json>`] [--format `<format>`]
//!                                                                      - Print recognized contexts
//!   robolex list-configs                                               - List recognition profiles
//!   robolex list-formats                                               - List output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use robolex::robot::pipeline::{ExecutionError, PipelineExecutor, RecognitionProfile};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("Error reading file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Missing argument '{0}'")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (text, json, yaml)")
        .default_value("text")
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the robot file")
        .required(true)
        .index(1)
}

fn main() {
    let matches = Command::new("robolex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize Robot Framework files and recognize their contexts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream")
                .arg(path_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("contexts")
                .about("Print the recognized contexts")
                .arg(path_arg())
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Name of the recognition profile")
                        .default_value("default"),
                )
                .arg(
                    Arg::new("config-file")
                        .long("config-file")
                        .help("JSON file with a recognition profile (overrides --config)"),
                )
                .arg(format_arg()),
        )
        .subcommand(Command::new("list-configs").about("List available recognition profiles"))
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let executor = PipelineExecutor::new();
    let result = match matches.subcommand() {
        Some(("tokens", tokens_matches)) => handle_tokens_command(&executor, tokens_matches),
        Some(("contexts", contexts_matches)) => {
            handle_contexts_command(&executor, contexts_matches)
        }
        Some(("list-configs", _)) => {
            handle_list_configs_command(&executor);
            Ok(())
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command(&executor);
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn string_arg<'m>(matches: &'m ArgMatches, name: &'static str) -> Result<&'m str, CliError> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or(CliError::MissingArgument(name))
}

fn read_source(path: &str) -> Result<String, CliError> {
    debug!("Reading {}", path);
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Handle the tokens command
fn handle_tokens_command(executor: &PipelineExecutor, matches: &ArgMatches) -> Result<(), CliError> {
    let source = read_source(string_arg(matches, "path")?)?;
    let format = string_arg(matches, "format")?;

    let output = executor.tokens_and_serialize(&source, format)?;
    print!("{}", output);
    Ok(())
}

/// Handle the contexts command
fn handle_contexts_command(
    executor: &PipelineExecutor,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    let source = read_source(string_arg(matches, "path")?)?;
    let format = string_arg(matches, "format")?;

    let output = match matches.get_one::<String>("config-file") {
        Some(config_file) => {
            let profile = RecognitionProfile::from_file(config_file).map_err(ExecutionError::from)?;
            executor.execute_profile_and_serialize(profile, &source, format)?
        }
        None => executor.execute_and_serialize(string_arg(matches, "config")?, &source, format)?,
    };

    print!("{}", output);
    Ok(())
}

/// Handle the list-configs command
fn handle_list_configs_command(executor: &PipelineExecutor) {
    println!("Available recognition profiles:\n");
    for config in executor.list_configs() {
        println!("  {}", config.name);
        println!("    {}", config.description);
        let names: Vec<_> = config.recognizers.iter().map(|kind| kind.name()).collect();
        println!("    recognizers: {}", names.join(", "));
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(executor: &PipelineExecutor) {
    println!("Available output formats:\n");
    for name in executor.list_formats() {
        let description = executor
            .formats()
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {:<6} {}", name, description);
    }
}
