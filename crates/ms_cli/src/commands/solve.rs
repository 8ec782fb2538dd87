//! solve subcommand handler.
//!
//! Solves a single problem and prints it as localized text or JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use ms_solver_core::{Dispatcher, SolveOutcome, Verbosity};

use super::Session;
use crate::json_types::SolveJsonOutput;
use crate::render::{export_text, render_outcome};

/// Exit code for input that no recognizer accepts.
pub const EXIT_UNSOLVED: u8 = 1;
/// Exit code for blank input.
pub const EXIT_EMPTY_INPUT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for solve subcommand
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Problem to solve; several words are joined with spaces. Put `--` before
    /// a problem that starts with a minus sign
    #[arg(required = true, num_args = 1..)]
    pub problem: Vec<String>,

    /// Only the essential steps
    #[arg(long)]
    pub concise: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the input and final answer to FILE
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Do not record the problem in history
    #[arg(long)]
    pub no_history: bool,
}

pub fn run(args: SolveArgs, session: &Session) -> Result<ExitCode> {
    let joined = args.problem.join(" ");
    let input = joined.trim();
    if input.is_empty() {
        eprintln!("Error: nothing to solve, the problem is empty");
        return Ok(ExitCode::from(EXIT_EMPTY_INPUT));
    }

    let verbosity = if args.concise {
        Verbosity::Concise
    } else {
        session.verbosity()
    };
    let labels = session.labels();

    let traced = Dispatcher::new().solve_traced(input, verbosity);

    if let Some(solution) = &traced {
        if !args.no_history {
            session.record_solved(input);
        }
        if let Some(path) = &args.export {
            fs::write(path, export_text(input, &solution.result, labels))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} {}", labels.exported, path.display());
        }
    }

    let solved = traced.is_some();
    match args.format {
        OutputFormat::Json => {
            let output = match traced {
                Some(solution) => SolveJsonOutput::solved(input, solution),
                None => SolveJsonOutput::unsolved(input, labels.unable),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            let outcome = SolveOutcome::from(traced.map(|solution| solution.result));
            println!("{}", render_outcome(input, &outcome, labels));
        }
    }

    Ok(if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_UNSOLVED)
    })
}
