/*!
Reports for the context.

A [Report] is the reason a search finished, and details of each solution found during a search are read through a [Solution](solution::Solution).
*/

use crate::context::ContextState;

pub mod solution;

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Every way to prove the query was tried.
    Exhausted,

    /// The search was stopped, at a solution or by a callback.
    Stopped,

    /// The configured limit on inferences was reached.
    InferenceLimit,

    /// The configured time limit was reached.
    TimeUp,

    /// No search has finished.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving => Self::Unknown,
            ContextState::Finished(report) => report,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "Exhausted"),
            Self::Stopped => write!(f, "Stopped"),
            Self::InferenceLimit => write!(f, "Inference limit"),
            Self::TimeUp => write!(f, "Time up"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
