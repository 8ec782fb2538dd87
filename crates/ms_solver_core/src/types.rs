/// How much of the derivation is narrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Every intermediate step.
    #[default]
    Detailed,
    /// Intermediate bookkeeping steps are dropped.
    Concise,
}

impl Verbosity {
    pub fn is_detailed(self) -> bool {
        self == Verbosity::Detailed
    }
}

impl From<bool> for Verbosity {
    fn from(detailed: bool) -> Self {
        if detailed {
            Verbosity::Detailed
        } else {
            Verbosity::Concise
        }
    }
}

/// Narrated solution: ordered steps plus the final answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionResult {
    pub steps: Vec<String>,
    pub answer: String,
}

impl SolutionResult {
    pub fn new(steps: Vec<String>, answer: impl Into<String>) -> Self {
        Self {
            steps,
            answer: answer.into(),
        }
    }

    /// At least one step and a non-empty answer.
    pub fn is_well_formed(&self) -> bool {
        !self.steps.is_empty() && !self.answer.is_empty()
    }
}

/// Result of a solve call. Failing to solve is an ordinary value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(SolutionResult),
    Unsolved,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&SolutionResult> {
        match self {
            SolveOutcome::Solved(result) => Some(result),
            SolveOutcome::Unsolved => None,
        }
    }

    pub fn into_solution(self) -> Option<SolutionResult> {
        match self {
            SolveOutcome::Solved(result) => Some(result),
            SolveOutcome::Unsolved => None,
        }
    }
}

impl From<Option<SolutionResult>> for SolveOutcome {
    fn from(result: Option<SolutionResult>) -> Self {
        match result {
            Some(result) => SolveOutcome::Solved(result),
            None => SolveOutcome::Unsolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_bool() {
        assert_eq!(Verbosity::from(true), Verbosity::Detailed);
        assert_eq!(Verbosity::from(false), Verbosity::Concise);
        assert!(Verbosity::default().is_detailed());
    }

    #[test]
    fn outcome_from_option() {
        let solved = SolveOutcome::from(Some(SolutionResult::new(vec!["s".into()], "1")));
        assert!(solved.is_solved());
        assert_eq!(solved.solution().map(|r| r.answer.as_str()), Some("1"));
        assert_eq!(SolveOutcome::from(None), SolveOutcome::Unsolved);
    }

    #[test]
    fn well_formed_requires_steps_and_answer() {
        assert!(SolutionResult::new(vec!["a".into()], "b").is_well_formed());
        assert!(!SolutionResult::new(vec![], "b").is_well_formed());
        assert!(!SolutionResult::new(vec!["a".into()], "").is_well_formed());
    }
}
