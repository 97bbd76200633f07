use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex, Rgba8};
use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::render::cpu::CpuRasterizer;
use crate::scene::frame::{DrawCmd, FrameScene};

/// Stroke and text settings shared by every frame of a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayerStyle {
    /// Line and outline width in pixels.
    pub stroke_width: f64,
    /// Round line caps when `true`, butt caps otherwise.
    pub round_caps: bool,
    /// Label font size in pixels.
    pub font_size: f32,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            stroke_width: 3.0,
            round_caps: true,
            font_size: 20.0,
        }
    }
}

/// Explicit animation clock for one layer.
///
/// Every animation takes a `Timeline` and returns the advanced one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeline {
    /// Frames already claimed by sequential animations. May run past `frame_count`.
    pub cursor: FrameIndex,
    /// Total frames in the layer.
    pub frame_count: u64,
    /// Frame rate used to convert seconds into frames.
    pub fps: Fps,
}

impl Timeline {
    /// Frame count for a duration in seconds.
    pub fn frames_for(self, secs: f64) -> u64 {
        self.fps.secs_to_frames_round(secs)
    }

    /// Same timeline with the cursor moved to `cursor`.
    pub fn at(self, cursor: FrameIndex) -> Self {
        Self { cursor, ..self }
    }

    /// Same timeline with the cursor advanced by `frames`.
    pub fn advance(self, frames: u64) -> Self {
        self.at(FrameIndex(self.cursor.0.saturating_add(frames)))
    }
}

/// N append-only frames that are animated together and composited with other layers.
#[derive(Clone, Debug)]
pub struct Layer {
    canvas: Canvas,
    fps: Fps,
    style: LayerStyle,
    frames: Vec<FrameScene>,
}

impl Layer {
    /// Allocate `frame_count` empty frames.
    pub fn new(
        canvas: Canvas,
        fps: Fps,
        frame_count: u64,
        style: LayerStyle,
    ) -> HuffvisResult<Self> {
        if frame_count == 0 {
            return Err(HuffvisError::validation("layer frame_count must be > 0"));
        }
        if !style.stroke_width.is_finite() || style.stroke_width < 0.0 {
            return Err(HuffvisError::validation(
                "layer stroke_width must be finite and >= 0",
            ));
        }
        if !style.font_size.is_finite() || style.font_size <= 0.0 {
            return Err(HuffvisError::validation(
                "layer font_size must be finite and > 0",
            ));
        }
        let n = usize::try_from(frame_count)
            .map_err(|_| HuffvisError::validation("layer frame_count exceeds usize"))?;
        Ok(Self {
            canvas,
            fps,
            style,
            frames: vec![FrameScene::default(); n],
        })
    }

    /// Canvas dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Shared stroke/text style.
    pub fn style(&self) -> LayerStyle {
        self.style
    }

    /// Number of frames, fixed at construction.
    pub fn frame_count(&self) -> u64 {
        self.frames.len() as u64
    }

    /// Fresh timeline starting at frame 0.
    pub fn timeline(&self) -> Timeline {
        Timeline {
            cursor: FrameIndex(0),
            frame_count: self.frame_count(),
            fps: self.fps,
        }
    }

    /// Borrow one frame's display list.
    pub fn frame(&self, idx: FrameIndex) -> Option<&FrameScene> {
        usize::try_from(idx.0).ok().and_then(|i| self.frames.get(i))
    }

    /// All frames in index order.
    pub fn frames(&self) -> &[FrameScene] {
        &self.frames
    }

    /// Append `cmd(i)` to every frame `i` in `[start, frame_count)`.
    pub(crate) fn draw_from(&mut self, start: FrameIndex, mut cmd: impl FnMut(u64) -> DrawCmd) {
        let start = usize::try_from(start.0).unwrap_or(usize::MAX);
        for (i, frame) in self.frames.iter_mut().enumerate().skip(start) {
            frame.push(cmd(i as u64));
        }
    }

    /// Paint a solid background on every frame.
    pub fn fill_background(&mut self, color: Rgba8) {
        self.draw_from(FrameIndex(0), |_| DrawCmd::Clear { color });
    }

    /// Rasterize every frame and push it to `sink`.
    ///
    /// A failed push is logged and the remaining frames are still attempted; the first failure is
    /// returned once the sink has been closed.
    #[tracing::instrument(skip_all, fields(frames = self.frames.len()))]
    pub fn finalize(
        &self,
        rasterizer: &mut CpuRasterizer,
        sink: &mut dyn FrameSink,
    ) -> HuffvisResult<()> {
        sink.begin(SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
            frame_count: self.frame_count(),
        })?;

        let mut first_err = None;
        for (i, scene) in self.frames.iter().enumerate() {
            let idx = FrameIndex(i as u64);
            let pushed = rasterizer
                .rasterize(self.canvas, self.style, scene)
                .and_then(|frame| sink.push_frame(idx, &frame));
            if let Err(e) = pushed {
                tracing::warn!(frame = i, error = %e, "frame write failed");
                first_err.get_or_insert(e);
            }
        }

        let ended = sink.end();
        match first_err {
            Some(e) => Err(e),
            None => ended,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layer.rs"]
mod tests;
