//! compare: MCTS planner vs. greedy baseline on identical episode seeds.
//!
//! ```text
//! cargo run --release -p compare                 # default settings
//! cargo run --release -p compare -- demo.json    # settings from JSON
//! RUST_LOG=fd_mcts=debug cargo run -p compare    # per-search statistics
//! ```

mod config;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fd_engine::TransitionEngine;
use fd_mcts::MctsPlanner;
use fd_output::{CsvWriter, SimOutputObserver};
use fd_policy::{GreedyPolicy, Policy};
use fd_sim::{ExperimentReport, SimBuilder, episode_seed, run_experiment};

use config::DemoConfig;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn run<P: Policy>(cfg: &DemoConfig, policy: &P) -> Result<ExperimentReport> {
    let t0 = Instant::now();
    let report = run_experiment(&cfg.dispatch, policy, &cfg.weights, cfg.episodes, cfg.horizon)?;
    info!(policy = policy.name(), secs = t0.elapsed().as_secs_f64(), "policy evaluated");
    Ok(report)
}

fn print_summary(report: &ExperimentReport) {
    println!(
        "{:<10} reward {:>9.2} ± {:<8.2} rides {:>6.2}  wait {:>5.2}  idle {:>6.2}  revenue {:>7.2}",
        report.policy,
        report.mean_reward,
        report.std_reward,
        report.mean_of(|e| e.completed_rides as f64),
        report.mean_of(|e| e.average_wait),
        report.mean_of(|e| e.average_idle),
        report.mean_of(|e| e.revenue),
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    enable_tracing();

    let cfg = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    let d = &cfg.dispatch;
    println!("=== compare: MCTS vs greedy dispatch ===");
    println!(
        "Grid: {g}x{g}  |  Vehicles: {}  |  Rate: {}  |  Episodes: {}  |  Horizon: {}  |  Seed: {}",
        d.vehicle_count, d.request_rate, cfg.episodes, cfg.horizon, d.seed, g = d.grid_size,
    );
    println!("MCTS: {} iterations, c = {}, rollout depth {}", cfg.mcts.iterations, cfg.mcts.exploration, cfg.mcts.rollout_depth);
    println!();

    // 1. Policies.
    let engine = TransitionEngine::new(cfg.dispatch.clone())?;
    let mcts = MctsPlanner::new(cfg.mcts.clone(), engine, cfg.weights.clone())?;
    let greedy = GreedyPolicy::new(cfg.greedy.clone(), cfg.dispatch.grid_size)?;

    // 2. Experiments on the same episode seeds.
    let mcts_report = run(&cfg, &mcts)?;
    let greedy_report = run(&cfg, &greedy)?;

    // 3. Per-episode table.
    println!("{:<8} {:>12} {:>12}", "Episode", mcts_report.policy, greedy_report.policy);
    println!("{}", "-".repeat(34));
    for (i, (m, g)) in mcts_report.episodes.iter().zip(&greedy_report.episodes).enumerate() {
        println!("{:<8} {:>12.2} {:>12.2}", i, m.total_reward, g.total_reward);
    }
    println!();
    print_summary(&mcts_report);
    print_summary(&greedy_report);

    // 4. Optional CSV trace of the first MCTS episode.
    if let Some(dir) = &cfg.output_dir {
        let mut sim = SimBuilder::new(cfg.dispatch.clone(), &mcts)
            .seed(episode_seed(cfg.dispatch.seed, 0))
            .weights(cfg.weights.clone())
            .horizon(cfg.horizon)
            .build()?;
        let writer = CsvWriter::new(Path::new(dir))?;
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs)?;
        if let Some(e) = obs.take_error() {
            eprintln!("output error: {e}");
        }
        println!();
        println!("Episode 0 trace written to {dir}/tick_summaries.csv and {dir}/vehicle_snapshots.csv");
    }

    Ok(())
}
