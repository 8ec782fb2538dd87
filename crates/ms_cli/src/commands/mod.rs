//! Subcommand handlers.

pub mod config_cmd;
pub mod history;
pub mod solve;

use std::path::PathBuf;

use ms_session::HistoryStore;
use ms_solver_core::Verbosity;

use crate::config::SolverConfig;
use crate::i18n::{Labels, Language};

/// Effective settings for one invocation: config file values with command
/// line overrides applied.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: SolverConfig,
    pub config_path: PathBuf,
    pub language: Language,
    pub history_path: PathBuf,
}

impl Session {
    pub fn new(
        config: SolverConfig,
        config_path: PathBuf,
        language: Option<Language>,
        history_file: Option<PathBuf>,
    ) -> Self {
        let language = language.unwrap_or_else(|| Language::from_code(&config.language));
        let history_path = history_file.unwrap_or_else(|| config.resolved_history_path());
        Self {
            config,
            config_path,
            language,
            history_path,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.language.labels()
    }

    pub fn verbosity(&self) -> Verbosity {
        self.config.verbosity()
    }

    pub fn load_history(&self) -> HistoryStore {
        HistoryStore::load_or_default(&self.history_path, self.config.history_limit())
    }

    /// Record a solved problem. Failures are logged, never fatal.
    pub fn record_solved(&self, problem: &str) {
        let mut store = self.load_history();
        store.record(problem);
        if let Err(e) = store.save(&self.history_path) {
            tracing::warn!(
                target: "history",
                path = %self.history_path.display(),
                error = %e,
                "could not save history"
            );
        }
    }
}
