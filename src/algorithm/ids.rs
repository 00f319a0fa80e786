use super::construct_solution;
use crate::common::Solution;
use crate::node::{NodeId, SearchTree};
use crate::problem::Problem;
use crate::stat::Stats;

use std::vec::IntoIter;
use tracing::{debug, instrument, trace};

/// Outcome of one depth-limited pass.
#[derive(Debug)]
pub(crate) enum DepthLimited<A> {
    Found(Solution<A>),
    /// Some node sat on the depth limit, so a deeper pass might succeed.
    Cutoff,
    /// Every branch ended before the limit: nothing is left to search.
    Exhausted,
}

struct Frame<A, S> {
    node: NodeId,
    successors: IntoIter<(A, S)>,
}

/// Depth-first search that treats nodes at depth `limit` as leaves.
///
/// Nothing is memoized across branches. Only the current path lives in the
/// arena: a node is released as soon as its subtree has been searched.
/// Exploration order matches the recursive formulation.
pub(crate) fn depth_limited_search<P: Problem>(
    problem: &P,
    limit: usize,
    stats: &mut Stats,
) -> DepthLimited<P::Action> {
    let mut tree = SearchTree::from_problem(problem);
    let root = tree.root();

    if problem.goal_test(tree.state(root)) {
        return DepthLimited::Found(construct_solution(&tree, root));
    }
    if limit == 0 {
        return DepthLimited::Cutoff;
    }

    stats.expanded_nodes += 1;
    let mut stack = vec![Frame {
        node: root,
        successors: problem.successors(tree.state(root)).into_iter(),
    }];
    let mut cutoff = false;

    while let Some(frame) = stack.last_mut() {
        let parent = frame.node;
        let Some((action, next)) = frame.successors.next() else {
            stack.pop();
            if let Some(grandparent) = tree.get(parent).parent {
                tree.truncate_after(grandparent);
            }
            continue;
        };

        let step_cost = problem.step_cost(tree.state(parent), &action, &next);
        let child = tree.push_child(parent, action, next, step_cost);
        stats.generated_nodes += 1;
        trace!("visit node: {} at depth {}", tree.state(child), tree.get(child).depth);

        if problem.goal_test(tree.state(child)) {
            return DepthLimited::Found(construct_solution(&tree, child));
        }

        if tree.get(child).depth >= limit {
            cutoff = true;
            tree.truncate_after(parent);
            continue;
        }

        stats.expanded_nodes += 1;
        let successors = problem.successors(tree.state(child)).into_iter();
        stack.push(Frame {
            node: child,
            successors,
        });
        stats.observe_frontier(tree.len());
    }

    if cutoff {
        DepthLimited::Cutoff
    } else {
        DepthLimited::Exhausted
    }
}

/// Repeat depth-limited search with limits `0..=max_depth`.
///
/// `max_depth` is inclusive: a solution of exactly `max_depth` actions is
/// still found.
///
/// The first solution found has the fewest actions. `None` means either the
/// limit was reached or the whole space was searched without reaching a goal.
#[instrument(skip_all, name = "ids", fields(max_depth = max_depth), level = "debug")]
pub fn iterative_deepening_search<P: Problem>(
    problem: &P,
    max_depth: usize,
    stats: &mut Stats,
) -> Option<Solution<P::Action>> {
    for limit in 0..=max_depth {
        stats.depth_iterations += 1;
        match depth_limited_search(problem, limit, stats) {
            DepthLimited::Found(solution) => {
                debug!("goal found with depth limit {limit}");
                return Some(solution);
            }
            DepthLimited::Cutoff => trace!("no solution within depth {limit}"),
            DepthLimited::Exhausted => {
                debug!("search space exhausted at depth limit {limit}");
                return None;
            }
        }
    }

    debug!("depth limit {max_depth} reached without solution");
    None
}
