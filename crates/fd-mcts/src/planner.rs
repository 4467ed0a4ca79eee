//! `MctsPlanner`: UCB1 tree search with random rollouts.

use fd_core::SimRng;
use fd_engine::TransitionEngine;
use fd_model::{JointAction, WorldState};
use fd_policy::{Policy, PolicyResult, RewardWeights, score};
use tracing::debug;

use crate::{MctsError, MctsResult, Node, NodeId, SearchTree, legal_actions};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MctsConfig {
    /// Iterations per decision.  0 makes the planner return all-idle.
    pub iterations: u32,
    /// UCB1 exploration constant `c`.
    pub exploration: f64,
    /// Ticks simulated per rollout.
    pub rollout_depth: u32,
    /// Maximum pickup distance for a candidate assignment.
    pub distance_cutoff: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations:      200,
            exploration:     1.4,
            rollout_depth:   20,
            distance_cutoff: 10,
        }
    }
}

impl MctsConfig {
    pub fn validate(&self) -> MctsResult<()> {
        if !(self.exploration.is_finite() && self.exploration >= 0.0) {
            return Err(MctsError::InvalidConfig {
                msg: format!("exploration must be finite and >= 0, got {}", self.exploration),
            });
        }
        if self.rollout_depth == 0 {
            return Err(MctsError::InvalidConfig { msg: "rollout_depth must be > 0".into() });
        }
        if self.distance_cutoff == 0 {
            return Err(MctsError::InvalidConfig { msg: "distance_cutoff must be > 0".into() });
        }
        Ok(())
    }
}

/// Summary numbers of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    pub iterations:  u32,
    pub nodes:       usize,
    pub max_depth:   u32,
    pub root_visits: u32,
    /// Visits of the chosen root child (0 when the fallback was used).
    pub best_visits: u32,
    /// Mean rollout total of the chosen root child.
    pub best_value:  f64,
}

/// Everything a search produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best_action: JointAction,
    pub tree:        SearchTree,
    pub stats:       SearchStats,
}

impl SearchOutcome {
    /// `(action, visits, mean value)` for every root child, in expansion order.
    pub fn root_children(&self) -> impl Iterator<Item = (&JointAction, u32, f64)> + '_ {
        self.tree
            .children(NodeId::ROOT)
            .filter_map(|(_, n)| n.action.as_ref().map(|a| (a, n.visits, n.mean_value())))
    }
}

/// Plans one joint action per call by searching over simulated futures.
///
/// Shares the [`TransitionEngine`] with the authoritative simulation, so
/// rollouts follow exactly the same dynamics.
#[derive(Debug, Clone)]
pub struct MctsPlanner {
    config:  MctsConfig,
    engine:  TransitionEngine,
    weights: RewardWeights,
}

impl MctsPlanner {
    pub fn new(config: MctsConfig, engine: TransitionEngine, weights: RewardWeights) -> MctsResult<Self> {
        config.validate()?;
        weights
            .validate()
            .map_err(|e| MctsError::InvalidConfig { msg: e.to_string() })?;
        Ok(Self { config, engine, weights })
    }

    #[inline]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Run the configured number of iterations from `root_state`.
    pub fn search(&self, root_state: &WorldState, rng: &mut SimRng) -> MctsResult<SearchOutcome> {
        let mut tree = SearchTree::new(Node::root(root_state.clone()));

        for _ in 0..self.config.iterations {
            let leaf = self.select(&tree);
            let start = if tree.get(leaf).visits == 0 {
                leaf
            } else {
                self.expand(&mut tree, leaf, rng)?.unwrap_or(leaf)
            };
            let total = self.rollout(&tree.get(start).state, rng)?;
            tree.backpropagate(start, total);
        }

        let best = tree.most_visited_child(NodeId::ROOT);
        let (best_action, best_visits, best_value) = match best {
            Some(id) => {
                let node = tree.get(id);
                (node.action.clone().unwrap_or_default(), node.visits, node.mean_value())
            }
            None => (JointAction::all_idle(), 0, 0.0),
        };
        let stats = SearchStats {
            iterations:  self.config.iterations,
            nodes:       tree.len(),
            max_depth:   tree.max_depth(),
            root_visits: tree.root().visits,
            best_visits,
            best_value,
        };
        debug!(
            tick = root_state.tick.0,
            iterations = stats.iterations,
            nodes = stats.nodes,
            depth = stats.max_depth,
            best_visits = stats.best_visits,
            best_value = stats.best_value,
            "mcts search done"
        );
        Ok(SearchOutcome { best_action, tree, stats })
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// Descend by UCB1 until a node without children.
    fn select(&self, tree: &SearchTree) -> NodeId {
        let mut current = NodeId::ROOT;
        loop {
            let node = tree.get(current);
            if !node.is_expanded() {
                return current;
            }
            let mut best: Option<(NodeId, f64)> = None;
            for (child, child_node) in tree.children(current) {
                let u = child_node.ucb(node.visits, self.config.exploration);
                if best.is_none_or(|(_, b)| u > b) {
                    best = Some((child, u));
                }
            }
            match best {
                Some((child, _)) => current = child,
                None => return current,
            }
        }
    }

    /// Add one child per legal action of `leaf`.  Returns the first new child.
    fn expand(&self, tree: &mut SearchTree, leaf: NodeId, rng: &mut SimRng) -> MctsResult<Option<NodeId>> {
        let (state, depth) = {
            let node = tree.get(leaf);
            (node.state.clone(), node.depth)
        };
        let mut first = None;
        for action in legal_actions(&state, self.config.distance_cutoff) {
            let next = self.engine.step(&state, &action, rng)?.state;
            let child = tree.push(Node::child(next, action, leaf, depth + 1));
            tree.get_mut(leaf).children.push(child);
            if first.is_none() {
                first = Some(child);
            }
        }
        Ok(first)
    }

    /// Random playout from `state`; returns the summed per-tick reward.
    fn rollout(&self, state: &WorldState, rng: &mut SimRng) -> MctsResult<f64> {
        let mut current = state.clone();
        let mut total = 0.0;
        for _ in 0..self.config.rollout_depth {
            let actions = legal_actions(&current, self.config.distance_cutoff);
            let action = rng.choose(&actions).cloned().unwrap_or_default();
            let transition = self.engine.step(&current, &action, rng)?;
            total += score(&transition.events, &self.weights);
            current = transition.state;
        }
        Ok(total)
    }
}

impl Policy for MctsPlanner {
    fn name(&self) -> &str {
        "mcts"
    }

    fn select_action(&self, state: &WorldState, rng: &mut SimRng) -> PolicyResult<JointAction> {
        Ok(self.search(state, rng)?.best_action)
    }
}
