//! Text rendering of solve outcomes.

use ms_solver_core::{SolutionResult, SolveOutcome};

use crate::i18n::Labels;

/// `{label}: {answer}`
pub fn answer_line(result: &SolutionResult, labels: &Labels) -> String {
    format!("{}: {}", labels.answer, result.answer)
}

/// Steps numbered from 1, one per line.
pub fn numbered_steps(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full shareable text: input, numbered steps, answer line.
pub fn full_text(input: &str, result: &SolutionResult, labels: &Labels) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        input,
        numbered_steps(&result.steps),
        answer_line(result, labels)
    )
}

/// Short file export: input and answer line only.
pub fn export_text(input: &str, result: &SolutionResult, labels: &Labels) -> String {
    format!("{}\n{}\n", input, answer_line(result, labels))
}

/// What `solve` prints in text mode.
pub fn render_outcome(input: &str, outcome: &SolveOutcome, labels: &Labels) -> String {
    match outcome {
        SolveOutcome::Solved(result) => {
            format!("{}\n\n{}", labels.solved, full_text(input, result, labels))
        }
        SolveOutcome::Unsolved => labels.unable.to_string(),
    }
}
