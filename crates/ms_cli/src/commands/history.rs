use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use ms_session::HistoryStore;

use super::Session;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Remove every entry
    #[arg(long)]
    pub clear: bool,
}

pub fn run(args: HistoryArgs, session: &Session) -> Result<ExitCode> {
    let mut store = session.load_history();

    if args.clear {
        store.clear();
        store
            .save(&session.history_path)
            .with_context(|| format!("Failed to save {}", session.history_path.display()))?;
        println!("History cleared.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", render_history(&store));
    Ok(ExitCode::SUCCESS)
}

/// Numbered list, most recent first. Numbers are the ones `!N` accepts.
pub fn render_history(store: &HistoryStore) -> String {
    if store.is_empty() {
        return "No history yet.".to_string();
    }
    store
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}
