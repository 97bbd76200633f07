//! Edge "connect" effect: a segment growing from one endpoint to the other.

use crate::foundation::core::{FrameIndex, Point, Rgba8};
use crate::scene::frame::DrawCmd;
use crate::scene::layer::{Layer, Timeline};

/// A segment between two node circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Growth starts here.
    pub from: Point,
    /// Radius of the circle around `from`; the segment starts on its boundary.
    pub from_radius: f64,
    /// Growth ends here.
    pub to: Point,
    /// Radius of the circle around `to`; the segment stops on its boundary.
    pub to_radius: f64,
    /// Stroke color.
    pub color: Rgba8,
}

/// Pull both endpoints toward each other by their radii, independently per axis.
pub fn shorten_endpoints(mut a: Point, ra: f64, mut b: Point, rb: f64) -> (Point, Point) {
    if a.x > b.x {
        a.x -= ra;
        b.x += rb;
    } else {
        a.x += ra;
        b.x -= rb;
    }
    if a.y > b.y {
        a.y -= ra;
        b.y += rb;
    } else {
        a.y += ra;
        b.y -= rb;
    }
    (a, b)
}

/// Tip of the growing segment after `step` of `draw_frames` frames.
///
/// Step 0 is exactly `a`; any step at or past `draw_frames` is exactly `b`.
pub fn connect_point(a: Point, b: Point, step: u64, draw_frames: u64) -> Point {
    if step >= draw_frames {
        return b;
    }
    let t = step as f64 / draw_frames as f64;
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Animate `edge` over `secs` starting at `start`.
///
/// `start` may lie before the timeline cursor, which lets two sibling edges issued one after the
/// other grow in the same frames. The cursor only moves forward, to `start + draw_frames` when
/// that is later than the current cursor.
pub fn connect(
    layer: &mut Layer,
    timeline: Timeline,
    start: FrameIndex,
    secs: f64,
    edge: Edge,
) -> Timeline {
    let draw_frames = timeline.frames_for(secs);
    let (a, b) = shorten_endpoints(edge.from, edge.from_radius, edge.to, edge.to_radius);
    layer.draw_from(start, |i| DrawCmd::Line {
        from: a,
        to: connect_point(a, b, i - start.0 + 1, draw_frames),
        color: edge.color,
    });
    tracing::debug!(start = start.0, draw_frames, "connect");

    let end = start.0.saturating_add(draw_frames);
    if end > timeline.cursor.0 {
        timeline.at(FrameIndex(end))
    } else {
        timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/connect.rs"]
mod tests;
