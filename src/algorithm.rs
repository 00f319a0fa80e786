mod astar;
mod bfs;
mod dfs;
mod greedy;
mod ids;
mod ucs;

pub use astar::a_star_search;
pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;
pub use greedy::greedy_best_first_search;
pub use ids::iterative_deepening_search;
pub use ucs::uniform_cost_search;

use std::fmt;
use std::time::Instant;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::common::Solution;
use crate::node::{NodeId, SearchTree};
use crate::problem::Problem;
use crate::stat::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Dfs,
    Bfs,
    Ids,
    Ucs,
    Greedy,
    Astar,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Dfs,
        Strategy::Bfs,
        Strategy::Ids,
        Strategy::Ucs,
        Strategy::Greedy,
        Strategy::Astar,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Dfs => "dfs",
            Strategy::Bfs => "bfs",
            Strategy::Ids => "ids",
            Strategy::Ucs => "ucs",
            Strategy::Greedy => "greedy",
            Strategy::Astar => "astar",
        };
        f.write_str(name)
    }
}

/// Run `strategy` on `problem`. `max_depth` is only used by IDS.
///
/// `None` means the strategy exhausted its search space without reaching a
/// goal.
pub fn search<P: Problem>(
    problem: &P,
    strategy: Strategy,
    max_depth: usize,
    stats: &mut Stats,
) -> Option<Solution<P::Action>> {
    let start_time = Instant::now();
    let solution = match strategy {
        Strategy::Dfs => depth_first_search(problem, stats),
        Strategy::Bfs => breadth_first_search(problem, stats),
        Strategy::Ids => iterative_deepening_search(problem, max_depth, stats),
        Strategy::Ucs => uniform_cost_search(problem, stats),
        Strategy::Greedy => greedy_best_first_search(problem, stats),
        Strategy::Astar => a_star_search(problem, stats),
    };
    stats.time_us = start_time.elapsed().as_micros() as usize;

    match &solution {
        Some(solution) => info!(
            "{strategy}: found {} actions with cost {}",
            solution.len(),
            solution.cost
        ),
        None => debug!("{strategy}: no solution"),
    }
    solution
}

fn construct_solution<S, A: Clone>(tree: &SearchTree<S, A>, goal: NodeId) -> Solution<A> {
    Solution {
        actions: tree.solution(goal),
        cost: tree.get(goal).path_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::tests::NumberLine;

    #[test]
    fn test_every_strategy_reaches_goal() {
        let problem = NumberLine {
            start: 0,
            goal: 7,
            broken: false,
        };
        for strategy in Strategy::ALL {
            let stats = &mut Stats::default();
            let solution = search(&problem, strategy, 20, stats).unwrap();
            assert!(solution.verify(&problem), "{strategy} returned {solution:?}");
        }
    }

    #[test]
    fn test_unreachable_goal_is_no_solution() {
        let problem = NumberLine {
            start: 0,
            goal: -1,
            broken: false,
        };
        for strategy in Strategy::ALL {
            let stats = &mut Stats::default();
            assert_eq!(search(&problem, strategy, 25, stats), None, "{strategy}");
        }
    }

    #[test]
    fn test_start_at_goal() {
        let problem = NumberLine {
            start: 5,
            goal: 5,
            broken: false,
        };
        for strategy in Strategy::ALL {
            let stats = &mut Stats::default();
            let solution = search(&problem, strategy, 0, stats).unwrap();
            assert!(solution.is_empty(), "{strategy}");
            assert_eq!(solution.cost, 0.0);
        }
    }
}
