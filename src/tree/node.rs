use crate::foundation::core::Point;
use crate::foundation::error::{HuffvisError, HuffvisResult};

/// Index of a node inside a [`Tree`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// One tree vertex.
///
/// Leaves have neither child and usually carry a symbol. Internal nodes have both children.
/// A node with exactly one child is representable so that malformed external input can be
/// reported instead of silently accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Positive aggregate weight.
    pub weight: f64,
    /// Symbol carried by a leaf.
    pub symbol: Option<char>,
    /// Left child (code bit `0`).
    pub left: Option<NodeId>,
    /// Right child (code bit `1`).
    pub right: Option<NodeId>,
    /// Canvas position, assigned during layout.
    pub position: Option<Point>,
}

impl Node {
    /// A leaf with an optional symbol.
    pub fn leaf(weight: f64, symbol: Option<char>) -> Self {
        Self {
            weight,
            symbol,
            left: None,
            right: None,
            position: None,
        }
    }

    /// `true` when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Both children, or `None` for a leaf.
    ///
    /// A half-populated node is a traversal error.
    pub fn children(&self) -> HuffvisResult<Option<(NodeId, NodeId)>> {
        match (self.left, self.right) {
            (None, None) => Ok(None),
            (Some(l), Some(r)) => Ok(Some((l, r))),
            _ => Err(HuffvisError::traversal(
                "node has exactly one child; prefix-code trees are full binary trees",
            )),
        }
    }
}

/// Arena owning every node of one tree.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node as-is and return its id.
    pub fn push(&mut self, node: Node) -> HuffvisResult<NodeId> {
        let id = next_id(self.nodes.len())?;
        self.nodes.push(node);
        Ok(id)
    }

    /// Insert a leaf.
    pub fn push_leaf(&mut self, weight: f64, symbol: Option<char>) -> HuffvisResult<NodeId> {
        self.push(Node::leaf(weight, symbol))
    }

    /// Insert an internal node owning `left` and `right`; its weight is their sum.
    pub fn push_internal(&mut self, left: NodeId, right: NodeId) -> HuffvisResult<NodeId> {
        let weight = self.node(left)?.weight + self.node(right)?.weight;
        self.push(Node {
            weight,
            symbol: None,
            left: Some(left),
            right: Some(right),
            position: None,
        })
    }

    /// Borrow a node, failing on a dangling id.
    pub fn node(&self, id: NodeId) -> HuffvisResult<&Node> {
        self.nodes
            .get(id.0 as usize)
            .ok_or_else(|| HuffvisError::traversal(format!("dangling node id {}", id.0)))
    }

    /// Mutably borrow a node, failing on a dangling id.
    pub fn node_mut(&mut self, id: NodeId) -> HuffvisResult<&mut Node> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or_else(|| HuffvisError::traversal(format!("dangling node id {}", id.0)))
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Leaves reachable from `root`, right subtree before left.
    ///
    /// Uses an explicit stack and rejects shared children, cycles, dangling ids and
    /// half-populated nodes.
    pub fn leaves_right_first(&self, root: NodeId) -> HuffvisResult<Vec<NodeId>> {
        let mut seen = vec![false; self.nodes.len()];
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = self.node(id)?;
            let slot = &mut seen[id.0 as usize];
            if *slot {
                return Err(HuffvisError::traversal(format!(
                    "node {} is reachable twice (shared child or cycle)",
                    id.0
                )));
            }
            *slot = true;
            match node.children()? {
                None => out.push(id),
                Some((left, right)) => {
                    // LIFO: push left first so right is visited first.
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        Ok(out)
    }
}

/// Id for the node stored at arena slot `len`.
fn next_id(len: usize) -> HuffvisResult<NodeId> {
    u32::try_from(len)
        .map(NodeId)
        .map_err(|_| HuffvisError::validation(format!("tree arena is full ({len} nodes)")))
}

#[cfg(test)]
#[path = "../../tests/unit/tree/node.rs"]
mod tests;
