mod commands;
mod completer;
mod config;
mod i18n;
mod json_types;
mod render;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::config_cmd::ConfigArgs;
use crate::commands::history::HistoryArgs;
use crate::commands::solve::SolveArgs;
use crate::commands::Session;
use crate::config::SolverConfig;
use crate::i18n::Language;
use crate::repl::Repl;

/// Step-by-step solutions for short maths problems.
#[derive(Parser, Debug)]
#[command(name = "ms", version)]
struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Label language, overriding the config file
    #[arg(long, value_enum, global = true)]
    lang: Option<Language>,

    /// History file, overriding the config file
    #[arg(long, global = true, env = "MS_HISTORY_FILE", value_name = "FILE")]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve one problem
    Solve(SolveArgs),
    /// List or clear recently solved problems
    History(HistoryArgs),
    /// Interactive session (the default)
    Repl,
    /// Show the effective configuration or restore the defaults
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = SolverConfig::config_path();
    let config = SolverConfig::load_from(&config_path);
    let session = Session::new(config, config_path, cli.lang, cli.history_file);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Solve(args) => commands::solve::run(args, &session),
        Command::History(args) => commands::history::run(args, &session),
        Command::Config(args) => commands::config_cmd::run(args, &session),
        Command::Repl => {
            Repl::new(session).run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
