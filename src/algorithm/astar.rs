use super::construct_solution;
use crate::common::Solution;
use crate::frontier::{FinalizedCosts, PriorityFrontier};
use crate::node::SearchTree;
use crate::problem::Problem;
use crate::stat::Stats;

use tracing::{debug, instrument, trace};

/// A* search ordered by `f = g + h`, preferring larger `g` on ties.
///
/// Uses the same lazy stale-entry discard as uniform-cost search, keyed on
/// `g`. With an admissible heuristic the first goal popped is optimal. An
/// inconsistent heuristic may cause states to be expanded again at a lower
/// cost; an inadmissible one only costs optimality.
#[instrument(skip_all, name = "a_star", level = "debug")]
pub fn a_star_search<P: Problem>(
    problem: &P,
    stats: &mut Stats,
) -> Option<Solution<P::Action>> {
    let mut tree = SearchTree::from_problem(problem);
    let mut frontier = PriorityFrontier::new();
    let mut finalized = FinalizedCosts::new();

    let start_h_cost = problem.heuristic(problem.initial_state());
    frontier.push(tree.root(), start_h_cost);

    while let Some((current, f_cost)) = frontier.pop() {
        let state = tree.state(current).clone();
        let g_cost = tree.get(current).path_cost;

        if finalized.is_stale(&state, g_cost) {
            trace!("discard stale node: {state} at g {g_cost}");
            stats.stale_discards += 1;
            continue;
        }
        if let Some(previous) = finalized.finalize(state.clone(), g_cost) {
            debug!("reopen node: {state} from {previous} to {g_cost}");
            stats.reopened_nodes += 1;
        }
        trace!("expand node: {state} at g {g_cost} f {f_cost}");

        if problem.goal_test(&state) {
            debug!("goal found with cost {g_cost}");
            return Some(construct_solution(&tree, current));
        }

        stats.expanded_nodes += 1;
        for (action, next) in problem.successors(&state) {
            let step_cost = problem.step_cost(&state, &action, &next);
            let h_cost = problem.heuristic(&next);
            let child = tree.push_child(current, action, next, step_cost);
            let tentative_g_cost = tree.get(child).path_cost;
            // Higher g cost has higher priority.
            frontier.push_with_tie_break(child, tentative_g_cost + h_cost, -tentative_g_cost);
            stats.generated_nodes += 1;
        }
        stats.observe_frontier(frontier.len());
    }

    debug!("cannot find solution");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::uniform_cost_search;
    use crate::error::SearchError;
    use crate::problem::tests::{Guided, NumberLine};

    use std::cell::RefCell;

    /// S->A costs 4, S->B 1, B->A 1, A->G 10. h(B) = 5 and 0 elsewhere, which
    /// breaks consistency on S->B: A is first reached at g 4, then at g 2.
    #[derive(Default)]
    struct Detour {
        expansions: RefCell<Vec<char>>,
    }

    impl Detour {
        const EDGES: [(char, char, f64); 4] =
            [('S', 'A', 4.0), ('S', 'B', 1.0), ('B', 'A', 1.0), ('A', 'G', 10.0)];
    }

    impl Problem for Detour {
        type State = char;
        type Action = char;

        fn initial_state(&self) -> &char {
            &'S'
        }

        fn goal_state(&self) -> Option<&char> {
            Some(&'G')
        }

        fn successors(&self, state: &char) -> Vec<(char, char)> {
            self.expansions.borrow_mut().push(*state);
            Self::EDGES
                .iter()
                .filter(|(from, _, _)| from == state)
                .map(|&(_, to, _)| (to, to))
                .collect()
        }

        fn result(&self, state: &char, action: &char) -> Result<char, SearchError> {
            Self::EDGES
                .iter()
                .find(|(from, to, _)| from == state && to == action)
                .map(|&(_, to, _)| to)
                .ok_or_else(|| SearchError::InvalidAction {
                    action: action.to_string(),
                    state: state.to_string(),
                    reason: "no such edge".to_string(),
                })
        }

        fn step_cost(&self, state: &char, action: &char, _next: &char) -> f64 {
            Self::EDGES
                .iter()
                .find(|(from, to, _)| from == state && to == action)
                .map_or(f64::INFINITY, |&(_, _, cost)| cost)
        }

        fn heuristic(&self, state: &char) -> f64 {
            if *state == 'B' {
                5.0
            } else {
                0.0
            }
        }
    }

    #[test]
    fn test_a_star_reopens_on_cheaper_path() {
        let problem = Detour::default();
        let stats = &mut Stats::default();
        let solution = a_star_search(&problem, stats).unwrap();

        // A (f 4) is expanded before B (f 6), so its first finalization is at
        // g 4. The path through B then reaches A again at g 2 and reopens it.
        assert_eq!(*problem.expansions.borrow(), vec!['S', 'A', 'B', 'A']);
        assert_eq!(stats.reopened_nodes, 1);
        // The entry for G at g 14 is left on the frontier behind the one at 12.
        assert_eq!(solution.actions, vec!['B', 'A', 'G']);
        assert_eq!(solution.cost, 12.0);
        assert!(solution.verify(&problem));
    }

    fn guided(goal: i32, weight: f64) -> Guided {
        Guided {
            line: NumberLine {
                start: 0,
                goal,
                broken: false,
            },
            weight,
        }
    }

    #[test]
    fn test_a_star_admissible_is_optimal() {
        let problem = guided(11, 1.0);
        let stats = &mut Stats::default();
        let solution = a_star_search(&problem, stats).unwrap();
        assert_eq!(solution.cost, 11.0);
        assert!(solution.verify(&problem));

        let ucs_stats = &mut Stats::default();
        let ucs_solution = uniform_cost_search(&problem, ucs_stats).unwrap();
        assert_eq!(solution.cost, ucs_solution.cost);
        assert!(stats.expanded_nodes <= ucs_stats.expanded_nodes);
    }

    #[test]
    fn test_a_star_zero_heuristic_matches_ucs() {
        let problem = guided(7, 0.0);
        let stats = &mut Stats::default();
        let solution = a_star_search(&problem, stats).unwrap();
        assert_eq!(solution.cost, 7.0);
        assert_eq!(solution.len(), 7);
    }

    #[test]
    fn test_a_star_tolerates_inadmissible_heuristic() {
        let problem = guided(11, 10.0);
        let stats = &mut Stats::default();
        let solution = a_star_search(&problem, stats).unwrap();
        assert!(solution.verify(&problem));
        assert!(solution.cost >= 11.0);
        assert_eq!(stats.reopened_nodes, 0);
    }

    #[test]
    fn test_a_star_unreachable() {
        let problem = guided(-3, 1.0);
        let stats = &mut Stats::default();
        assert!(a_star_search(&problem, stats).is_none());
        assert_eq!(stats.expanded_nodes, 21);
    }
}
