use super::construct_solution;
use crate::common::Solution;
use crate::frontier::{FinalizedCosts, PriorityFrontier};
use crate::node::SearchTree;
use crate::problem::Problem;
use crate::stat::Stats;

use tracing::{debug, instrument, trace};

/// Dijkstra's algorithm over the implicit state graph.
///
/// The frontier is ordered by path cost. Instead of decreasing keys, every
/// improved path is pushed again and entries whose state was already
/// finalized at an equal or lower cost are discarded when popped. Optimal as
/// long as step costs are non-negative.
#[instrument(skip_all, name = "ucs", level = "debug")]
pub fn uniform_cost_search<P: Problem>(
    problem: &P,
    stats: &mut Stats,
) -> Option<Solution<P::Action>> {
    let mut tree = SearchTree::from_problem(problem);
    let mut frontier = PriorityFrontier::new();
    let mut finalized = FinalizedCosts::new();
    frontier.push(tree.root(), 0.0);

    while let Some((current, cost)) = frontier.pop() {
        let state = tree.state(current).clone();

        if finalized.is_stale(&state, cost) {
            trace!("discard stale node: {state} at cost {cost}");
            stats.stale_discards += 1;
            continue;
        }
        if let Some(previous) = finalized.finalize(state.clone(), cost) {
            debug!("reopen node: {state} from {previous} to {cost}");
            stats.reopened_nodes += 1;
        }
        trace!("expand node: {state} at cost {cost}");

        if problem.goal_test(&state) {
            debug!("goal found with cost {cost}");
            return Some(construct_solution(&tree, current));
        }

        stats.expanded_nodes += 1;
        for (action, next) in problem.successors(&state) {
            let step_cost = problem.step_cost(&state, &action, &next);
            let child = tree.push_child(current, action, next, step_cost);
            frontier.push(child, tree.get(child).path_cost);
            stats.generated_nodes += 1;
        }
        stats.observe_frontier(frontier.len());
    }

    debug!("cannot find solution");
    None
}
