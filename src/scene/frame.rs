use crate::foundation::core::{Point, Rgba8};

/// One drawing command submitted to a frame.
///
/// Commands are replayed in submission order by the rasterizer, so later commands paint over
/// earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole canvas.
    Clear {
        /// Fill color.
        color: Rgba8,
    },
    /// Filled and outlined circle.
    Circle {
        /// Centre in canvas pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill and outline color.
        color: Rgba8,
    },
    /// Stroked straight segment.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke color.
        color: Rgba8,
    },
    /// Text centred on a point.
    Label {
        /// Text to shape.
        text: String,
        /// Centre of the text box.
        center: Point,
        /// Glyph color.
        color: Rgba8,
    },
}

/// Append-only display list for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameScene {
    cmds: Vec<DrawCmd>,
}

impl FrameScene {
    /// Append a command.
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Commands in submission order.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// `true` when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}
