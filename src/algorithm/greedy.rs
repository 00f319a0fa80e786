use super::construct_solution;
use crate::common::Solution;
use crate::frontier::PriorityFrontier;
use crate::node::SearchTree;
use crate::problem::Problem;
use crate::stat::Stats;

use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// Best-first search ordered by the heuristic alone.
///
/// Path cost is ignored, so the result can be arbitrarily expensive. A state
/// is expanded at most once; successors whose state was already expanded are
/// never pushed.
#[instrument(skip_all, name = "greedy", level = "debug")]
pub fn greedy_best_first_search<P: Problem>(
    problem: &P,
    stats: &mut Stats,
) -> Option<Solution<P::Action>> {
    let mut tree = SearchTree::from_problem(problem);
    let mut frontier = PriorityFrontier::new();
    let mut explored = HashSet::new();
    frontier.push(tree.root(), problem.heuristic(problem.initial_state()));

    while let Some((current, h_cost)) = frontier.pop() {
        let state = tree.state(current).clone();
        trace!("expand node: {state} with heuristic {h_cost}");

        if problem.goal_test(&state) {
            debug!("goal found at depth {}", tree.get(current).depth);
            return Some(construct_solution(&tree, current));
        }

        // Reached again through another frontier entry before this one popped.
        if !explored.insert(state.clone()) {
            continue;
        }

        stats.expanded_nodes += 1;
        for (action, next) in problem.successors(&state) {
            if explored.contains(&next) {
                continue;
            }
            let step_cost = problem.step_cost(&state, &action, &next);
            let h_cost = problem.heuristic(&next);
            frontier.push(tree.push_child(current, action, next, step_cost), h_cost);
            stats.generated_nodes += 1;
        }
        stats.observe_frontier(frontier.len());
    }

    debug!("cannot find solution");
    None
}
