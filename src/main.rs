use hanoi_search::algorithm::{search, Strategy};
use hanoi_search::common::Solution;
use hanoi_search::config::{Cli, Config};
use hanoi_search::hanoi::{HanoiMove, HanoiState, TowerOfHanoi};
use hanoi_search::problem::Problem;
use hanoi_search::stat::Stats;

use anyhow::{anyhow, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct Report {
    strategy: Strategy,
    solution: Option<Solution<HanoiMove>>,
    stats: Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)
            .with_context(|| format!("cannot read config file: {config_file}"))?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;

    let problem = if config.random_start {
        let mut rng = StdRng::seed_from_u64(config.seed);
        TowerOfHanoi::with_initial(HanoiState::random(config.num_disks, &mut rng))
    } else {
        TowerOfHanoi::new(config.num_disks)
    };
    info!(
        "{} disks, initial state: {}",
        problem.num_disks(),
        problem.initial_state()
    );
    if let Some(goal) = problem.goal_state() {
        info!("Goal state: {goal}");
    }

    let mut reports = Vec::with_capacity(config.strategies.len());
    for &strategy in &config.strategies {
        let mut stats = Stats::default();
        let solution = search(&problem, strategy, config.max_depth, &mut stats);
        stats.print();

        match &solution {
            Some(solution) => {
                if !solution.verify(&problem) {
                    let reached = solution.replay(&problem).with_context(|| {
                        format!("{strategy} returned an action the puzzle rejects")
                    })?;
                    return Err(anyhow!(
                        "{strategy} solution ends in {reached}, which is not a goal state"
                    ));
                }
                let actions: Vec<String> =
                    solution.actions.iter().map(ToString::to_string).collect();
                info!("{strategy} solution: {actions:?}");
            }
            None => error!("{strategy} solve fails"),
        }

        reports.push(Report {
            strategy,
            solution,
            stats,
        });
    }

    if let Some(output_path) = &config.output_path {
        let json = serde_json::to_string_pretty(&reports)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("cannot write report to {output_path}"))?;
        info!("Report written to {output_path}");
    }

    Ok(())
}
