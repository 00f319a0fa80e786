use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Stats {
    pub expanded_nodes: usize,
    pub generated_nodes: usize,
    pub stale_discards: usize,
    pub reopened_nodes: usize,
    pub max_frontier: usize,
    pub depth_iterations: usize,
    pub time_us: usize,
}

impl Stats {
    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.max_frontier = self.max_frontier.max(len);
    }

    pub fn print(&self) {
        info!(
            "Time(microseconds) {:?} Expanded nodes {:?} Generated nodes {:?} Stale discards {:?} Reopened nodes {:?} Max frontier {:?} Depth iterations {:?}",
            self.time_us,
            self.expanded_nodes,
            self.generated_nodes,
            self.stale_discards,
            self.reopened_nodes,
            self.max_frontier,
            self.depth_iterations
        );
    }
}
