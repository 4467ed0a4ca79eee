//! Demo settings, optionally loaded from a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use fd_core::DispatchConfig;
use fd_mcts::MctsConfig;
use fd_policy::{GreedyConfig, RewardWeights};
use serde::{Deserialize, Serialize};

/// Everything the demo can be told.  Missing JSON fields keep their default.
///
/// ```json
/// { "dispatch": { "grid_size": 8, "vehicle_count": 4 },
///   "mcts": { "iterations": 100 },
///   "episodes": 5,
///   "output_dir": "output/compare" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub dispatch:   DispatchConfig,
    pub mcts:       MctsConfig,
    pub greedy:     GreedyConfig,
    pub weights:    RewardWeights,
    pub episodes:   u64,
    pub horizon:    u64,
    /// Write CSV output of one MCTS episode here.
    pub output_dir: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            dispatch:   DispatchConfig::default(),
            mcts:       MctsConfig::default(),
            greedy:     GreedyConfig::default(),
            weights:    RewardWeights::default(),
            episodes:   20,
            horizon:    50,
            output_dir: None,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
