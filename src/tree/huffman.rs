//! Reference Huffman builder.
//!
//! The visualizer treats tree construction as an external input. This builder supplies that
//! input for the CLI and the tests, using the same [`MergeQueue`] tie-break the replay uses.

use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::tree::code::Code;
use crate::tree::node::{NodeId, Tree};
use crate::tree::queue::MergeQueue;
use std::collections::BTreeMap;

/// A built prefix-code tree plus its code and weight tables.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    /// Arena holding every node.
    pub tree: Tree,
    /// Root of the tree inside [`HuffmanTree::tree`].
    pub root: NodeId,
    /// Symbol to bit-string code.
    pub codes: BTreeMap<char, Code>,
    /// Symbol to weight.
    pub weights: BTreeMap<char, f64>,
}

impl HuffmanTree {
    /// Build from per-symbol weights. Symbols are queued in ascending order.
    pub fn from_weights(weights: impl IntoIterator<Item = (char, f64)>) -> HuffvisResult<Self> {
        let mut table = BTreeMap::new();
        for (symbol, weight) in weights {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(HuffvisError::validation(format!(
                    "weight for {symbol:?} must be finite and > 0, got {weight}"
                )));
            }
            if table.insert(symbol, weight).is_some() {
                return Err(HuffvisError::validation(format!(
                    "duplicate weight for {symbol:?}"
                )));
            }
        }
        if table.is_empty() {
            return Err(HuffvisError::validation("at least one symbol is required"));
        }

        let mut tree = Tree::new();
        let mut queue = MergeQueue::new();
        for (&symbol, &weight) in &table {
            let id = tree.push_leaf(weight, Some(symbol))?;
            queue.push(weight, id);
        }
        while let Some(((_, left), (_, right))) = queue.pop_pair() {
            let parent = tree.push_internal(left, right)?;
            queue.push(tree.node(parent)?.weight, parent);
        }
        let (_, root) = queue
            .pop()
            .ok_or_else(|| HuffvisError::validation("merge queue drained unexpectedly"))?;

        let codes = assign_codes(&tree, root)?;
        tracing::debug!(symbols = table.len(), nodes = tree.len(), "built huffman tree");
        Ok(Self {
            tree,
            root,
            codes,
            weights: table,
        })
    }

    /// Build from character frequencies of `text`.
    pub fn from_text(text: &str) -> HuffvisResult<Self> {
        let mut counts = BTreeMap::<char, f64>::new();
        for c in text.chars() {
            *counts.entry(c).or_insert(0.0) += 1.0;
        }
        Self::from_weights(counts)
    }

    /// Aggregate weight of the root.
    pub fn root_weight(&self) -> HuffvisResult<f64> {
        Ok(self.tree.node(self.root)?.weight)
    }

    /// Encode `text` into a bit string.
    pub fn encode(&self, text: &str) -> HuffvisResult<String> {
        let mut out = String::new();
        for c in text.chars() {
            let code = self
                .codes
                .get(&c)
                .ok_or_else(|| HuffvisError::validation(format!("symbol {c:?} has no code")))?;
            out.push_str(&code.to_string());
        }
        Ok(out)
    }

    /// Decode a bit string produced by [`HuffmanTree::encode`].
    pub fn decode(&self, bits: &str) -> HuffvisResult<String> {
        let root = self.tree.node(self.root)?;
        if root.is_leaf() {
            // Single-symbol alphabet: every code is "0".
            let sym = root
                .symbol
                .ok_or_else(|| HuffvisError::validation("root leaf has no symbol"))?;
            return Code::parse(bits).map(|c| std::iter::repeat_n(sym, c.len()).collect());
        }

        let mut out = String::new();
        let mut cur = self.root;
        for bit in Code::parse(bits)?.bits() {
            let node = self.tree.node(cur)?;
            let (left, right) = node
                .children()?
                .ok_or_else(|| HuffvisError::traversal("walked past a leaf"))?;
            cur = if *bit { right } else { left };
            let next = self.tree.node(cur)?;
            if next.is_leaf() {
                out.push(
                    next.symbol
                        .ok_or_else(|| HuffvisError::validation("leaf has no symbol"))?,
                );
                cur = self.root;
            }
        }
        if cur != self.root {
            return Err(HuffvisError::validation("bit string ends mid-code"));
        }
        Ok(out)
    }
}

fn assign_codes(tree: &Tree, root: NodeId) -> HuffvisResult<BTreeMap<char, Code>> {
    let mut codes = BTreeMap::new();
    let root_node = tree.node(root)?;
    if root_node.is_leaf() {
        if let Some(symbol) = root_node.symbol {
            codes.insert(symbol, Code::parse("0")?);
        }
        return Ok(codes);
    }

    let mut stack = vec![(root, Code::empty())];
    while let Some((id, code)) = stack.pop() {
        let node = tree.node(id)?;
        match node.children()? {
            None => {
                if let Some(symbol) = node.symbol {
                    codes.insert(symbol, code);
                }
            }
            Some((left, right)) => {
                stack.push((right, code.child(true)));
                stack.push((left, code.child(false)));
            }
        }
    }
    Ok(codes)
}

#[cfg(test)]
#[path = "../../tests/unit/tree/huffman.rs"]
mod tests;
