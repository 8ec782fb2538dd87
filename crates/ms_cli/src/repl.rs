//! Interactive loop.
//!
//! [`Repl::handle_line`] does all the work and returns the messages to show,
//! so the loop in [`Repl::run`] only reads lines and prints replies.

use rustyline::error::ReadlineError;

use ms_session::HistoryStore;
use ms_solver_core::{Dispatcher, SolveOutcome, Verbosity};

use crate::commands::history::render_history;
use crate::commands::Session;
use crate::completer::SolverHelper;
use crate::i18n::Language;
use crate::render::render_outcome;

pub const EXAMPLES: &[&str] = &["2x+3=7", "x^2-5x+6=0", "15% of 240", "(12+8)*3/4"];

const HELP: &str = "\
Type a maths problem to solve it, for example 2x+3=7 or 15% of 240.

Commands:
  :detailed        show every step
  :concise         show only the essential steps
  :lang <code>     answer labels in en, hi, es, fr or ar
  :history         list recently solved problems
  :clear-history   forget recently solved problems
  :examples        show sample problems
  !N               solve history entry N again
  :help            show this help
  :quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplMsg {
    /// A rendered solution
    Output(String),
    Info(String),
    Error(String),
}

pub type ReplReply = Vec<ReplMsg>;

pub struct Repl {
    session: Session,
    dispatcher: Dispatcher,
    verbosity: Verbosity,
    history: HistoryStore,
}

impl Repl {
    pub fn new(session: Session) -> Self {
        let history = session.load_history();
        Self {
            verbosity: session.verbosity(),
            dispatcher: Dispatcher::new(),
            history,
            session,
        }
    }

    pub fn language(&self) -> Language {
        self.session.language
    }

    /// Process one input line. `None` means the user asked to leave.
    pub fn handle_line(&mut self, line: &str) -> Option<ReplReply> {
        let line = line.trim();
        if line.is_empty() {
            return Some(Vec::new());
        }

        if let Some(n) = line.strip_prefix('!') {
            return Some(self.solve_history_entry(n));
        }

        if !line.starts_with(':') {
            return Some(self.solve(line));
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        let reply = match command {
            ":quit" | ":q" | ":exit" => return None,
            ":detailed" => {
                self.verbosity = Verbosity::Detailed;
                vec![ReplMsg::Info("Showing every step.".to_string())]
            }
            ":concise" => {
                self.verbosity = Verbosity::Concise;
                vec![ReplMsg::Info("Showing essential steps only.".to_string())]
            }
            ":lang" if arg.is_empty() => {
                vec![ReplMsg::Info(format!("Language: {}", self.language().code()))]
            }
            ":lang" => {
                self.session.language = Language::from_code(arg);
                vec![ReplMsg::Info(format!("Language: {}", self.language().code()))]
            }
            ":history" => vec![ReplMsg::Info(render_history(&self.history))],
            ":clear-history" => {
                self.history.clear();
                self.save_history();
                vec![ReplMsg::Info("History cleared.".to_string())]
            }
            ":examples" => vec![ReplMsg::Info(EXAMPLES.join("\n"))],
            ":help" => vec![ReplMsg::Info(HELP.to_string())],
            other => vec![ReplMsg::Error(format!(
                "Unknown command '{}'. Type :help for the list.",
                other
            ))],
        };
        Some(reply)
    }

    fn solve_history_entry(&mut self, n: &str) -> ReplReply {
        let entry = n
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| self.history.get(n))
            .map(str::to_string);
        match entry {
            Some(problem) => self.solve(&problem),
            None => vec![ReplMsg::Error(format!("No history entry {}", n.trim()))],
        }
    }

    fn solve(&mut self, problem: &str) -> ReplReply {
        let outcome = self.dispatcher.solve(problem, self.verbosity);
        let labels = self.session.labels();

        if let SolveOutcome::Solved(_) = outcome {
            self.history.record(problem);
            self.save_history();
            vec![ReplMsg::Output(render_outcome(problem, &outcome, labels))]
        } else {
            vec![ReplMsg::Info(labels.unable.to_string())]
        }
    }

    fn save_history(&self) {
        if let Err(e) = self.history.save(&self.session.history_path) {
            tracing::warn!(
                target: "history",
                path = %self.session.history_path.display(),
                error = %e,
                "could not save history"
            );
        }
    }

    pub fn print_reply(&self, reply: ReplReply) {
        for msg in reply {
            match msg {
                ReplMsg::Output(s) => println!("{s}\n"),
                ReplMsg::Info(s) => println!("{s}"),
                ReplMsg::Error(s) => eprintln!("✖ {s}"),
            }
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Maths step solver. Type :help for commands, :quit to leave.");
        println!("{}", self.session.labels().ready);

        let config = rustyline::Config::builder()
            .max_history_size(100)?
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut rl =
            rustyline::Editor::<SolverHelper, rustyline::history::DefaultHistory>::with_config(
                config,
            )?;
        rl.set_helper(Some(SolverHelper::new()));

        // Up-arrow recall starts with the solved problems, oldest first.
        for entry in self.history.entries().iter().rev() {
            rl.add_history_entry(entry.as_str())?;
        }

        loop {
            match rl.readline("ms> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.trim())?;
                    }
                    match self.handle_line(&line) {
                        Some(reply) => self.print_reply(reply),
                        None => break,
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}
