//! JSON output types for `solve --format json`.

use serde::Serialize;

use ms_solver_core::TracedSolution;

/// Current schema version for the JSON output.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Debug)]
pub struct SolveJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub input: String,

    /// Recognizer that produced the solution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    pub steps: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolveJsonOutput {
    pub fn solved(input: impl Into<String>, traced: TracedSolution) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: true,
            input: input.into(),
            strategy: Some(traced.strategy.to_string()),
            steps: traced.result.steps,
            answer: Some(traced.result.answer),
            error: None,
        }
    }

    pub fn unsolved(input: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            input: input.into(),
            strategy: None,
            steps: Vec::new(),
            answer: None,
            error: Some(error.into()),
        }
    }
}
