//! Circle "emerge" effect: grow past the target radius, then settle back onto it.

use crate::foundation::core::{Point, Rgba8};
use crate::scene::frame::DrawCmd;
use crate::scene::layer::{Layer, Timeline};

/// Peak radius as a multiple of the target radius.
pub const OVERSHOOT: f64 = 1.25;

/// A node circle to emerge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeCircle {
    /// Centre in canvas pixels.
    pub center: Point,
    /// Final radius.
    pub radius: f64,
    /// Fill color.
    pub color: Rgba8,
}

/// Radius at 1-based `step` of an emergence lasting `draw_frames` frames.
///
/// The first `ceil(draw_frames / 2)` steps grow linearly to `OVERSHOOT * target`; the rest relax
/// linearly to `target`, which is held from step `draw_frames` on.
pub fn emerge_radius(step: u64, draw_frames: u64, target: f64) -> f64 {
    let half = draw_frames.div_ceil(2);
    if draw_frames == 0 || (step >= draw_frames && step > half) {
        return target;
    }
    if step <= half {
        return OVERSHOOT * target * (step as f64 / half as f64);
    }
    let k = (step - half) as f64;
    let span = (draw_frames - half) as f64;
    OVERSHOOT * target - (OVERSHOOT - 1.0) * target * (k / span)
}

/// Emerge `circle` over `secs`, starting at the timeline cursor.
///
/// Every frame from the cursor to the end of the layer receives the circle, so it stays visible
/// once grown. The returned timeline is advanced by the draw-frame count.
pub fn emerge(layer: &mut Layer, timeline: Timeline, secs: f64, circle: NodeCircle) -> Timeline {
    let draw_frames = timeline.frames_for(secs);
    let start = timeline.cursor;
    layer.draw_from(start, |i| DrawCmd::Circle {
        center: circle.center,
        radius: emerge_radius(i - start.0 + 1, draw_frames, circle.radius),
        color: circle.color,
    });
    tracing::debug!(
        start = start.0,
        draw_frames,
        x = circle.center.x,
        y = circle.center.y,
        "emerge"
    );
    timeline.advance(draw_frames)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/emerge.rs"]
mod tests;
