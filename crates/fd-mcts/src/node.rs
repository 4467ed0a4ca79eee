//! Search-tree nodes.

use fd_model::{JointAction, WorldState};

/// Index of a node in its [`SearchTree`][crate::SearchTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    /// The sampled state this node stands for.
    pub state:    WorldState,
    /// The joint action that led here from the parent; `None` at the root.
    pub action:   Option<JointAction>,
    pub parent:   Option<NodeId>,
    pub children: Vec<NodeId>,
    pub visits:   u32,
    /// Sum of the rollout totals backpropagated through this node.
    pub value:    f64,
    pub depth:    u32,
}

impl Node {
    pub fn root(state: WorldState) -> Self {
        Node {
            state,
            action:   None,
            parent:   None,
            children: Vec::new(),
            visits:   0,
            value:    0.0,
            depth:    0,
        }
    }

    pub fn child(state: WorldState, action: JointAction, parent: NodeId, depth: u32) -> Self {
        Node {
            state,
            action:   Some(action),
            parent:   Some(parent),
            children: Vec::new(),
            visits:   0,
            value:    0.0,
            depth,
        }
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Average rollout total, 0 when unvisited.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 { 0.0 } else { self.value / f64::from(self.visits) }
    }

    /// UCB1 score seen from a parent with `parent_visits` visits.
    ///
    /// Unvisited nodes score `+∞`.
    pub fn ucb(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = f64::from(self.visits);
        let ln_parent = f64::from(parent_visits.max(1)).ln();
        self.value / n + exploration * (ln_parent / n).sqrt()
    }
}
