use crate::animation::emerge::{NodeCircle, emerge};
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::layout::coords::CoordinateMapper;
use crate::scene::frame::DrawCmd;
use crate::scene::layer::{Layer, Timeline};
use crate::tree::code::Code;
use std::collections::BTreeMap;

/// Leaf emergence settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafOpts {
    /// Total seconds shared evenly by all leaves.
    pub secs: f64,
    /// Leaf circle radius.
    pub radius: f64,
    /// Leaf fill color.
    pub color: Rgba8,
    /// Symbol label color.
    pub label_color: Rgba8,
}

/// Where a leaf was placed and when its growth finished.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLeaf {
    /// Leaf symbol.
    pub symbol: char,
    /// Canvas position.
    pub position: Point,
    /// Timeline returned by this leaf's emergence; its label starts here.
    pub settled: Timeline,
}

/// Emerge one circle per coded symbol, in symbol order, each followed by its label.
pub fn draw_leaves(
    layer: &mut Layer,
    mut timeline: Timeline,
    codes: &BTreeMap<char, Code>,
    weights: &BTreeMap<char, f64>,
    mapper: &CoordinateMapper,
    opts: LeafOpts,
) -> HuffvisResult<(Timeline, Vec<PlacedLeaf>)> {
    if codes.is_empty() {
        return Ok((timeline, Vec::new()));
    }
    let per_leaf = opts.secs / codes.len() as f64;

    let mut placed = Vec::with_capacity(codes.len());
    for (&symbol, code) in codes {
        let weight = *weights
            .get(&symbol)
            .ok_or_else(|| HuffvisError::validation(format!("symbol {symbol:?} has no weight")))?;
        let position = mapper.position_for(code, weight);
        tracing::debug!(?symbol, %code, x = position.x, y = position.y, "placing leaf");

        timeline = emerge(
            layer,
            timeline,
            per_leaf,
            NodeCircle {
                center: position,
                radius: opts.radius,
                color: opts.color,
            },
        );

        let text = label_text(symbol);
        layer.draw_from(timeline.cursor, |_| DrawCmd::Label {
            text: text.clone(),
            center: position,
            color: opts.label_color,
        });
        placed.push(PlacedLeaf {
            symbol,
            position,
            settled: timeline,
        });
    }
    Ok((timeline, placed))
}

/// Printable label for a symbol; control characters are shown escaped.
pub fn label_text(symbol: char) -> String {
    if symbol.is_control() {
        symbol.escape_default().to_string()
    } else {
        symbol.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/leaves.rs"]
mod tests;
