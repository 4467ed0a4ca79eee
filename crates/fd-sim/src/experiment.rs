//! Multi-episode experiments.
//!
//! Each episode gets its own seed derived from the master seed and the
//! episode index, so an experiment is reproducible and episodes do not
//! depend on each other.  With the `parallel` feature the episodes run on
//! Rayon's thread pool; the report lists them in episode order either way.

use fd_core::{DispatchConfig, SimRng};
use fd_policy::{Policy, RewardWeights};
use tracing::info;

use crate::{EpisodeSummary, NoopObserver, SimBuilder, SimResult};

/// Seed of episode `episode` of an experiment seeded with `master`.
pub fn episode_seed(master: u64, episode: u64) -> u64 {
    SimRng::for_stream(master, episode).random::<u64>()
}

/// Per-episode summaries of one policy plus reward statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    pub policy:      String,
    pub episodes:    Vec<EpisodeSummary>,
    pub mean_reward: f64,
    /// Population standard deviation of the episode rewards.
    pub std_reward:  f64,
}

impl ExperimentReport {
    pub fn from_episodes(policy: impl Into<String>, episodes: Vec<EpisodeSummary>) -> Self {
        let n = episodes.len() as f64;
        let (mean_reward, std_reward) = if episodes.is_empty() {
            (0.0, 0.0)
        } else {
            let mean = episodes.iter().map(|e| e.total_reward).sum::<f64>() / n;
            let var = episodes.iter().map(|e| (e.total_reward - mean).powi(2)).sum::<f64>() / n;
            (mean, var.sqrt())
        };
        ExperimentReport { policy: policy.into(), episodes, mean_reward, std_reward }
    }

    /// Mean of `f` over the episodes; 0 when there are none.
    pub fn mean_of(&self, f: impl Fn(&EpisodeSummary) -> f64) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        self.episodes.iter().map(f).sum::<f64>() / self.episodes.len() as f64
    }
}

/// Run `episodes` episodes of `horizon` ticks each with `policy`.
///
/// Episode `i` uses [`episode_seed`]`(config.seed, i)`; the first failing
/// episode aborts the experiment.
pub fn run_experiment<P: Policy>(
    config:   &DispatchConfig,
    policy:   &P,
    weights:  &RewardWeights,
    episodes: u64,
    horizon:  u64,
) -> SimResult<ExperimentReport> {
    let run_one = |episode: u64| -> SimResult<EpisodeSummary> {
        let mut sim = SimBuilder::new(config.clone(), policy)
            .seed(episode_seed(config.seed, episode))
            .weights(weights.clone())
            .horizon(horizon)
            .build()?;
        sim.run(&mut NoopObserver)
    };

    #[cfg(not(feature = "parallel"))]
    let summaries = (0..episodes).map(run_one).collect::<SimResult<Vec<_>>>()?;

    #[cfg(feature = "parallel")]
    let summaries = {
        use rayon::prelude::*;
        (0..episodes).into_par_iter().map(run_one).collect::<SimResult<Vec<_>>>()?
    };

    let report = ExperimentReport::from_episodes(policy.name(), summaries);
    info!(
        policy = %report.policy,
        episodes,
        mean = report.mean_reward,
        std = report.std_reward,
        "experiment finished"
    );
    Ok(report)
}
