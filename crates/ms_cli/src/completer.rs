use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::i18n::Language;

pub const COMMANDS: &[&str] = &[
    ":detailed",
    ":concise",
    ":lang",
    ":history",
    ":clear-history",
    ":examples",
    ":help",
    ":quit",
];

pub struct SolverHelper {
    commands: Vec<String>,
    languages: Vec<String>,
}

impl Default for SolverHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            languages: [Language::En, Language::Hi, Language::Es, Language::Fr, Language::Ar]
                .iter()
                .map(|lang| lang.code().to_string())
                .collect(),
        }
    }

    /// Candidates for the word ending at the end of `line`.
    fn candidates(&self, line: &str) -> Vec<&str> {
        let (_, word) = extract_word(line, line.len());

        // Language codes after `:lang `
        if let Some(rest) = line.strip_prefix(":lang ") {
            if !rest.contains(' ') {
                return self
                    .languages
                    .iter()
                    .filter(|code| code.starts_with(word))
                    .map(String::as_str)
                    .collect();
            }
            return Vec::new();
        }

        if !word.starts_with(':') || line.len() != word.len() {
            return Vec::new();
        }
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(word))
            .map(String::as_str)
            .collect()
    }
}

impl Completer for SolverHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let line = &line[..pos];
        let (start, _) = extract_word(line, pos);
        let matches = self
            .candidates(line)
            .into_iter()
            .map(|c| Pair {
                display: c.to_string(),
                replacement: c.to_string(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for SolverHelper {
    type Hint = String;

    /// Greyed-out remainder when exactly one command matches.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (_, word) = extract_word(line, pos);
        match self.candidates(line).as_slice() {
            [only] if only.len() > word.len() => Some(only[word.len()..].to_string()),
            _ => None,
        }
    }
}

impl Highlighter for SolverHelper {}

impl Validator for SolverHelper {}

impl Helper for SolverHelper {}

fn extract_word(line: &str, pos: usize) -> (usize, &str) {
    let line = &line[..pos];
    let start = line
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    (start, &line[start..pos])
}
