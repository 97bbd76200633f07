//! Bottom-up replay of a prefix-code tree's merge history.
//!
//! The tree is flattened back into a weight-ordered [`MergeQueue`] of its leaves, and the merges
//! that built it are re-enacted: the two lightest nodes are joined under a synthesized parent,
//! both child-to-parent edges are animated in the same frame window, and the parent goes back
//! into the queue until a single root is left.

use crate::animation::connect::{Edge, connect};
use crate::foundation::core::{FrameIndex, Point, Rgba8, Vec2};
use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::layout::coords::CoordinateMapper;
use crate::scene::layer::{Layer, Timeline};
use crate::tree::code::Code;
use crate::tree::node::{Node, NodeId, Tree};
use crate::tree::queue::MergeQueue;
use std::collections::BTreeMap;

/// Edge animation settings for the replay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplayOpts {
    /// Time budget the edge duration is derived from.
    pub secs: f64,
    /// Number of edge slots `secs` is divided into; one edge lasts `secs / edge_slots`.
    pub edge_slots: u32,
    /// Leaf circle radius; edges leaving a leaf start on its boundary.
    pub node_radius: f64,
    /// Edge stroke color.
    pub color: Rgba8,
}

impl ReplayOpts {
    /// Seconds one edge takes to grow.
    pub fn edge_secs(&self) -> f64 {
        self.secs / f64::from(self.edge_slots)
    }

    fn validate(&self) -> HuffvisResult<()> {
        if self.edge_slots == 0 {
            return Err(HuffvisError::validation("edge_slots must be > 0"));
        }
        if !self.secs.is_finite() || self.secs < 0.0 {
            return Err(HuffvisError::validation("replay secs must be finite and >= 0"));
        }
        if !self.node_radius.is_finite() || self.node_radius < 0.0 {
            return Err(HuffvisError::validation(
                "node radius must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// One re-enacted merge.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeStep {
    /// First popped (lightest) node.
    pub left: NodeId,
    /// Second popped node.
    pub right: NodeId,
    /// Synthesized parent.
    pub parent: NodeId,
    /// Parent weight (sum of children).
    pub weight: f64,
    /// Parent position.
    pub position: Point,
    /// First frame both edges of this merge are drawn on.
    pub start: FrameIndex,
}

/// Result of a replay.
#[derive(Clone, Debug)]
pub struct ReplayReport {
    /// Working arena: the input nodes with positions assigned, plus every synthesized parent.
    pub tree: Tree,
    /// Final node left in the queue.
    pub root: NodeId,
    /// Merges in the order they were animated.
    pub steps: Vec<MergeStep>,
}

impl ReplayReport {
    /// Weight of the replayed root.
    pub fn root_weight(&self) -> HuffvisResult<f64> {
        Ok(self.tree.node(self.root)?.weight)
    }
}

/// Copy the tree reachable from `root` into a fresh arena and queue its leaves by weight.
///
/// Leaves are visited right subtree first and receive their x-position from their code;
/// symbol-less leaves take the position of the empty code. They are queued in ascending symbol
/// order (symbol-less leaves last), the order [`HuffmanTree`] inserts them in, so ties pop in
/// the same pairs the tree was built from.
///
/// [`HuffmanTree`]: crate::HuffmanTree
pub fn rebuild_queue(
    tree: &Tree,
    root: NodeId,
    codes: &BTreeMap<char, Code>,
    mapper: &CoordinateMapper,
) -> HuffvisResult<(Tree, MergeQueue<NodeId>)> {
    let leaves = tree.leaves_right_first(root)?;
    let mut arena = Tree::new();
    let mut seeded = Vec::with_capacity(leaves.len());
    let empty = Code::empty();
    for id in leaves {
        let src = tree.node(id)?;
        let code = match src.symbol {
            Some(symbol) => codes.get(&symbol).ok_or_else(|| {
                HuffvisError::validation(format!("leaf symbol {symbol:?} has no code"))
            })?,
            None => &empty,
        };
        let mut leaf = Node::leaf(src.weight, src.symbol);
        leaf.position = Some(Point::new(
            mapper.x_for_code(code),
            mapper.y_for_weight(src.weight),
        ));
        let key = (leaf.symbol.is_none(), leaf.symbol);
        let weight = leaf.weight;
        seeded.push((key, weight, arena.push(leaf)?));
    }

    seeded.sort_by_key(|&(key, _, _)| key);
    let mut queue = MergeQueue::new();
    for (_, weight, id) in seeded {
        queue.push(weight, id);
    }
    Ok((arena, queue))
}

/// Replay every merge of the tree rooted at `root`, animating its edges into `layer`.
#[tracing::instrument(skip_all, fields(cursor = timeline.cursor.0))]
pub fn replay(
    layer: &mut Layer,
    mut timeline: Timeline,
    tree: &Tree,
    root: NodeId,
    codes: &BTreeMap<char, Code>,
    mapper: &CoordinateMapper,
    opts: ReplayOpts,
) -> HuffvisResult<(Timeline, ReplayReport)> {
    opts.validate()?;
    let (mut arena, mut queue) = rebuild_queue(tree, root, codes, mapper)?;
    let edge_secs = opts.edge_secs();
    let edge_frames = timeline.frames_for(edge_secs);

    let mut steps = Vec::new();
    while let Some(((_, left), (_, right))) = queue.pop_pair() {
        let left_pos = refresh_position(&mut arena, left, mapper)?;
        let right_pos = refresh_position(&mut arena, right, mapper)?;

        let weight = arena.node(left)?.weight + arena.node(right)?.weight;
        let position = Point::new(
            (left_pos.x + right_pos.x) * 0.5,
            mapper.y_for_weight(weight),
        );
        let parent = arena.push(Node {
            weight,
            symbol: None,
            left: Some(left),
            right: Some(right),
            position: Some(position),
        })?;

        let start = timeline.cursor;
        let first = edge_start(arena.node(left)?, left_pos, position, opts.node_radius);
        timeline = connect(layer, timeline, start, edge_secs, edge(first, position, opts));

        // Back-date the sibling edge so both legs grow together.
        let back = FrameIndex(timeline.cursor.0.saturating_sub(edge_frames));
        let second = edge_start(arena.node(right)?, right_pos, position, opts.node_radius);
        timeline = connect(layer, timeline, back, edge_secs, edge(second, position, opts));

        tracing::debug!(
            left = left.0,
            right = right.0,
            parent = parent.0,
            weight,
            start = start.0,
            "merge"
        );
        steps.push(MergeStep {
            left,
            right,
            parent,
            weight,
            position,
            start,
        });
        queue.push(weight, parent);
    }

    let (_, root) = queue
        .pop()
        .ok_or_else(|| HuffvisError::traversal("tree has no leaves"))?;
    Ok((
        timeline,
        ReplayReport {
            tree: arena,
            root,
            steps,
        },
    ))
}

fn refresh_position(
    arena: &mut Tree,
    id: NodeId,
    mapper: &CoordinateMapper,
) -> HuffvisResult<Point> {
    let node = arena.node_mut(id)?;
    let x = node
        .position
        .map(|p| p.x)
        .ok_or_else(|| HuffvisError::traversal(format!("node {} has no x-position", id.0)))?;
    let p = Point::new(x, mapper.y_for_weight(node.weight));
    node.position = Some(p);
    Ok(p)
}

/// Leaves are drawn as circles, so their edges start on the circle boundary facing the parent.
fn edge_start(child: &Node, child_pos: Point, parent_pos: Point, radius: f64) -> Point {
    if child.symbol.is_none() {
        return child_pos;
    }
    let angle = (parent_pos - child_pos).atan2();
    child_pos + Vec2::from_angle(angle) * radius
}

fn edge(from: Point, to: Point, opts: ReplayOpts) -> Edge {
    Edge {
        from,
        from_radius: 0.0,
        to,
        to_radius: 0.0,
        color: opts.color,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/replay.rs"]
mod tests;
