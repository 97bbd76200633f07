//! Node placement from prefix code and weight.
//!
//! The horizontal axis is a recursive halving of the canvas driven by the code bits: a `0` moves
//! right and a `1` moves left by `width / 2^(depth + 2)`, after which the offset from centre is
//! damped by [`X_DAMPING`]. Codes sharing a prefix therefore share a neighbourhood.
//!
//! The vertical axis is logarithmic in weight relative to the root, so the root sits on the top
//! margin and rare symbols sink towards the bottom margin.

use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::tree::code::Code;

/// Fraction of the canvas height kept free above and below the node band.
pub const Y_MARGIN: f64 = 0.05;
/// Fraction of the canvas height spanned by the node band.
pub const Y_SPAN: f64 = 0.9;
/// Contraction applied to the horizontal offset after every code bit.
pub const X_DAMPING: f64 = 0.95;

/// Maps `(code, weight)` pairs to canvas positions for one tree.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    canvas: Canvas,
    root_weight: f64,
    // log10(1 / root_weight), never zero.
    lowest_location: f64,
}

impl CoordinateMapper {
    /// Create a mapper for a tree whose root carries `root_weight`.
    ///
    /// The logarithmic y-axis is undefined for non-positive or unit root weights, so those are
    /// rejected here rather than surfacing as NaN positions mid-animation.
    pub fn new(canvas: Canvas, root_weight: f64) -> HuffvisResult<Self> {
        if !root_weight.is_finite() || root_weight <= 0.0 {
            return Err(HuffvisError::validation(format!(
                "root weight must be finite and > 0, got {root_weight}"
            )));
        }
        let lowest_location = (1.0 / root_weight).log10();
        if lowest_location == 0.0 {
            return Err(HuffvisError::validation(
                "root weight of exactly 1 leaves the logarithmic y-axis without a scale",
            ));
        }
        Ok(Self {
            canvas,
            root_weight,
            lowest_location,
        })
    }

    /// Canvas this mapper lays out into.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Root weight the y-axis is normalized against.
    pub fn root_weight(&self) -> f64 {
        self.root_weight
    }

    /// Full position for a node with the given code and weight.
    pub fn position_for(&self, code: &Code, weight: f64) -> Point {
        Point::new(self.x_for_code(code), self.y_for_weight(weight))
    }

    /// Horizontal position derived solely from the code bits.
    pub fn x_for_code(&self, code: &Code) -> f64 {
        let width = f64::from(self.canvas.width);
        let center = self.canvas.center_x();
        let mut x = center;
        for (i, &bit) in code.bits().iter().enumerate() {
            let step = width / 2f64.powi(i as i32 + 2);
            if bit {
                x -= step;
            } else {
                x += step;
            }
            x = (x - center) * X_DAMPING + center;
        }
        x
    }

    /// Vertical position derived solely from `weight / root_weight`.
    pub fn y_for_weight(&self, weight: f64) -> f64 {
        let height = f64::from(self.canvas.height);
        let t = ((weight / self.root_weight).log10() / self.lowest_location).clamp(0.0, 1.0);
        t * Y_SPAN * height + Y_MARGIN * height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/coords.rs"]
mod tests;
