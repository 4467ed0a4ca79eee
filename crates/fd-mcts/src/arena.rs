//! Arena-backed search tree.

use crate::node::{Node, NodeId};

/// All nodes of one search, stored contiguously.  Node 0 is the root.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new(root: Node) -> Self {
        Self { nodes: vec![root] }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, n: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(n);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn root(&self) -> &Node {
        self.get(NodeId::ROOT)
    }

    /// Children of `id` with their node data, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.get(id).children.iter().map(move |&c| (c, self.get(c)))
    }

    /// Add `total` and one visit to `from` and every ancestor.
    pub fn backpropagate(&mut self, from: NodeId, total: f64) {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            let node = self.get_mut(id);
            node.visits += 1;
            node.value += total;
            cursor = node.parent;
        }
    }

    /// The child of `id` with the most visits; the first such child on ties.
    pub fn most_visited_child(&self, id: NodeId) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for (child, node) in self.children(id) {
            if best.is_none_or(|(_, v)| node.visits > v) {
                best = Some((child, node.visits));
            }
        }
        best.map(|(c, _)| c)
    }

    /// Deepest node depth in the tree.
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}
