use super::construct_solution;
use crate::common::Solution;
use crate::node::SearchTree;
use crate::problem::Problem;
use crate::stat::Stats;

use std::collections::{HashSet, VecDeque};
use tracing::{debug, instrument, trace};

/// Breadth-first graph search over a FIFO queue.
///
/// Same duplicate policy as depth-first search. Returns a solution with the
/// fewest actions, which is only the cheapest one under unit step costs.
#[instrument(skip_all, name = "bfs", level = "debug")]
pub fn breadth_first_search<P: Problem>(
    problem: &P,
    stats: &mut Stats,
) -> Option<Solution<P::Action>> {
    let mut tree = SearchTree::from_problem(problem);
    let mut frontier = VecDeque::from([tree.root()]);
    let mut on_frontier = HashSet::from([problem.initial_state().clone()]);
    let mut explored = HashSet::new();

    while let Some(current) = frontier.pop_front() {
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
            frontier.push_back(tree.push_child(current, action, next, step_cost));
            stats.generated_nodes += 1;
        }
        stats.observe_frontier(frontier.len());
    }

    debug!("cannot find solution");
    None
}
