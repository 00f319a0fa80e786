use std::fmt::{Debug, Display};
use std::hash::Hash;

use tracing::trace;

use crate::error::SearchError;

/// One configuration of a problem domain.
///
/// States are immutable values: every transition builds a new one. Equal
/// states must hash identically.
pub trait State: Clone + Eq + Hash + Debug + Display {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + Display {}

/// A state space the search strategies can explore.
///
/// Strategies only ever hold a shared reference to the problem, so
/// implementations must not rely on interior mutation between calls.
pub trait Problem {
    type State: State;
    type Action: Clone + Debug + Display;

    fn initial_state(&self) -> &Self::State;

    fn goal_state(&self) -> Option<&Self::State> {
        None
    }

    /// Defaults to equality with [`Problem::goal_state`]. Problems whose goal
    /// is a predicate override this.
    fn goal_test(&self, state: &Self::State) -> bool {
        self.goal_state().is_some_and(|goal| goal == state)
    }

    /// Every legal `(action, next state)` pair from `state`, in a fixed order.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Apply `action` to `state`. Must reproduce exactly the state paired with
    /// `action` by [`Problem::successors`].
    fn result(&self, state: &Self::State, action: &Self::Action)
        -> Result<Self::State, SearchError>;

    fn step_cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> f64 {
        1.0
    }

    /// Estimate of the remaining cost to a goal. Should never overestimate if
    /// A* is expected to return optimal solutions.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

/// Check that every successor of `state` is reproduced by `result`.
pub fn check_successors<P: Problem>(problem: &P, state: &P::State) -> Result<(), SearchError> {
    for (action, next) in problem.successors(state) {
        let applied = problem.result(state, &action)?;
        trace!("{state} --{action}--> {applied}");
        if applied != next {
            return Err(SearchError::InconsistentSuccessor {
                action: action.to_string(),
                state: state.to_string(),
            });
        }
    }
    Ok(())
}
