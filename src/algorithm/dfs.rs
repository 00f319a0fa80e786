use super::construct_solution;
use crate::common::Solution;
use crate::node::SearchTree;
use crate::problem::Problem;
use crate::stat::Stats;

use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// Depth-first graph search over a LIFO stack.
///
/// States are marked explored when popped. A successor is skipped when its
/// state is already explored or already waiting on the stack. No optimality
/// guarantee, and no depth bound.
#[instrument(skip_all, name = "dfs", level = "debug")]
pub fn depth_first_search<P: Problem>(
    problem: &P,
    stats: &mut Stats,
) -> Option<Solution<P::Action>> {
    let mut tree = SearchTree::from_problem(problem);
    let mut frontier = vec![tree.root()];
    // States currently on the stack; replaces a linear scan of `frontier`.
    let mut on_frontier = HashSet::from([problem.initial_state().clone()]);
    let mut explored = HashSet::new();

    while let Some(current) = frontier.pop() {
        let state = tree.state(current).clone();
        on_frontier.remove(&state);
        trace!("expand node: {state}");

        if problem.goal_test(&state) {
            debug!("goal found at depth {}", tree.get(current).depth);
            return Some(construct_solution(&tree, current));
        }

        stats.expanded_nodes += 1;
        explored.insert(state.clone());

        for (action, next) in problem.successors(&state) {
            if explored.contains(&next) || on_frontier.contains(&next) {
                continue;
            }
            let step_cost = problem.step_cost(&state, &action, &next);
            on_frontier.insert(next.clone());
            frontier.push(tree.push_child(current, action, next, step_cost));
            stats.generated_nodes += 1;
        }
        stats.observe_frontier(frontier.len());
    }

    debug!("cannot find solution");
    None
}
