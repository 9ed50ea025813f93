//! Mismatches between the lazy handle and the reference vector.

use repint_core::State;

/// A difference found while replaying a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The two representations answered an operation differently.
    Observation {
        step: String,
        lazy: String,
        naive: String,
    },

    /// A read-only operation changed the handle's state.
    StateChanged {
        step: String,
        before: State,
        after: State,
    },

    /// The handle was not in the state the scenario expected.
    UnexpectedState {
        step: String,
        expected: State,
        actual: State,
    },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mismatch::Observation { step, lazy, naive } => {
                write!(f, "{}: lazy answered {}, naive answered {}", step, lazy, naive)
            }
            Mismatch::StateChanged { step, before, after } => {
                write!(f, "{}: read-only operation moved state {} -> {}", step, before, after)
            }
            Mismatch::UnexpectedState {
                step,
                expected,
                actual,
            } => write!(f, "{}: expected state {}, got {}", step, expected, actual),
        }
    }
}

/// Render mismatches one per line, for assertion messages.
pub fn report(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
