use serde::Serialize;

use crate::error::SearchError;
use crate::problem::Problem;

/// Action sequence leading from a problem's initial state to a goal state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution<A> {
    pub actions: Vec<A>,
    pub cost: f64,
}

impl<A> Solution<A> {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the initial state already satisfies the goal test.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Apply every action in order starting from the initial state.
    pub fn replay<P>(&self, problem: &P) -> Result<P::State, SearchError>
    where
        P: Problem<Action = A>,
    {
        self.actions
            .iter()
            .try_fold(problem.initial_state().clone(), |state, action| {
                problem.result(&state, action)
            })
    }

    pub fn verify<P>(&self, problem: &P) -> bool
    where
        P: Problem<Action = A>,
    {
        self.replay(problem)
            .is_ok_and(|state| problem.goal_test(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::tests::NumberLine;

    fn number_line() -> NumberLine {
        NumberLine {
            start: 0,
            goal: 4,
            broken: false,
        }
    }

    #[test]
    fn test_replay_and_verify() {
        let problem = number_line();
        let solution = Solution {
            actions: vec![3, 1],
            cost: 6.0,
        };
        assert_eq!(solution.replay(&problem), Ok(4));
        assert!(solution.verify(&problem));

        let short = Solution {
            actions: vec![3],
            cost: 5.0,
        };
        assert!(!short.verify(&problem));
    }

    #[test]
    fn test_replay_fails_fast_on_invalid_action() {
        let problem = number_line();
        let solution = Solution {
            actions: vec![1, 2, 1],
            cost: 3.0,
        };
        assert!(matches!(
            solution.replay(&problem),
            Err(SearchError::InvalidAction { .. })
        ));
        assert!(!solution.verify(&problem));
    }

    #[test]
    fn test_empty_solution() {
        let problem = NumberLine {
            start: 4,
            goal: 4,
            broken: false,
        };
        let solution: Solution<i32> = Solution {
            actions: vec![],
            cost: 0.0,
        };
        assert!(solution.is_empty());
        assert!(solution.verify(&problem));
    }
}
