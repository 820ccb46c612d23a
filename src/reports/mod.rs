/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a closure.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The facts of the context are closed under the rules of the context.
    Fixpoint,

    /// Whether the facts of the context are closed is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Closing => {
                Self::Unknown
            }
            ContextState::Closed => Self::Fixpoint,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixpoint => write!(f, "Fixpoint"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
