use thiserror::Error;

/// Contract violations raised at the `Problem` adapter boundary.
///
/// Exhausting a search space is not an error: strategies report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid action `{action}` in state {state}: {reason}")]
    InvalidAction {
        action: String,
        state: String,
        reason: String,
    },

    #[error("successor `{action}` of state {state} disagrees with the transition function")]
    InconsistentSuccessor { action: String, state: String },

    #[error("cannot parse action from `{input}`")]
    ParseAction { input: String },
}
