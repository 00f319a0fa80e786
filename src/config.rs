use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;
use tracing::warn;

use crate::algorithm::Strategy;
use crate::hanoi::TowerOfHanoi;

/// Largest puzzle the demo accepts; the state space has `3^n` states.
pub const MAX_DISKS: u32 = 20;

#[derive(Parser, Debug)]
#[command(
    name = "Hanoi Search",
    about = "Uninformed and informed state-space search on the Tower of Hanoi.",
    version = "0.1"
)]
pub struct Cli {
    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Number of disks")]
    pub num_disks: Option<u32>,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        help = "Strategies to run, comma separated (default: all)"
    )]
    pub strategy: Vec<Strategy>,

    #[arg(long, help = "Deepest limit tried by iterative deepening")]
    pub max_depth: Option<usize>,

    #[arg(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,

    #[arg(
        long,
        help = "Start from a random legal configuration instead of peg 0",
        default_value_t = false
    )]
    pub random_start: bool,

    #[arg(long, help = "Path to write the JSON report to")]
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub num_disks: u32,
    pub strategies: Vec<Strategy>,
    pub max_depth: usize,
    pub seed: u64,
    pub random_start: bool,
    pub output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_disks: 3,
            strategies: Strategy::ALL.to_vec(),
            max_depth: 50,
            seed: 0,
            random_start: false,
            output_path: None,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(num_disks) = cli.num_disks {
            self.num_disks = num_disks;
        }
        if !cli.strategy.is_empty() {
            self.strategies = cli.strategy.clone();
        }
        if let Some(max_depth) = cli.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if cli.random_start {
            self.random_start = true;
        }
        if let Some(output_path) = &cli.output_path {
            self.output_path = Some(output_path.clone());
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.num_disks == 0 || self.num_disks > MAX_DISKS {
            return Err(anyhow!(
                "Number of disks must be between 1 and {MAX_DISKS}, got {}",
                self.num_disks
            ));
        }

        if self.strategies.is_empty() {
            return Err(anyhow!("At least one strategy must be selected"));
        }

        if self.strategies.contains(&Strategy::Ids) {
            if self.max_depth < 1 {
                return Err(anyhow!(
                    "Max depth must be at least 1 for iterative deepening, got {}",
                    self.max_depth
                ));
            }
            self.warn_unreachable_depth();
        }
        Ok(())
    }

    fn warn_unreachable_depth(&self) {
        let optimal_moves = TowerOfHanoi::new(self.num_disks).optimal_moves();
        if (self.max_depth as u64) < optimal_moves {
            warn!(
                "max depth {} is below {optimal_moves}, iterative deepening cannot solve the classic start",
                self.max_depth
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strategies.len(), 6);
    }

    #[test]
    fn test_yaml_config() {
        let config = Config::from_yaml_str("num_disks: 4\nstrategies: [bfs, astar]\n").unwrap();
        assert_eq!(config.num_disks, 4);
        assert_eq!(config.strategies, vec![Strategy::Bfs, Strategy::Astar]);
        assert_eq!(config.max_depth, 50);
    }

    #[test]
    fn test_command_line_overrides() {
        let cli = Cli::parse_from([
            "hanoi_search",
            "--num-disks",
            "5",
            "--strategy",
            "ucs,ids",
            "--random-start",
        ]);
        let config = Config::default().override_from_command_line(&cli).unwrap();
        assert_eq!(config.num_disks, 5);
        assert_eq!(config.strategies, vec![Strategy::Ucs, Strategy::Ids]);
        assert!(config.random_start);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_ids_requires_positive_max_depth() {
        let cli = Cli::parse_from(["hanoi_search", "--strategy", "ids", "--max-depth", "0"]);
        assert!(Config::default().override_from_command_line(&cli).is_err());

        // Without IDS the depth limit is unused.
        let cli = Cli::parse_from(["hanoi_search", "--strategy", "bfs", "--max-depth", "0"]);
        assert!(Config::default().override_from_command_line(&cli).is_ok());

        // Too shallow for the classic start is only a warning.
        let cli = Cli::parse_from(["hanoi_search", "--strategy", "ids", "--max-depth", "3"]);
        assert!(Config::default().override_from_command_line(&cli).is_ok());
    }

    #[test]
    fn test_invalid_num_disks() {
        let cli = Cli::parse_from(["hanoi_search", "--num-disks", "0"]);
        assert!(Config::default().override_from_command_line(&cli).is_err());
    }
}
