use crate::foundation::core::{BezPath, Canvas, Point, Rgba8};
use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::render::text::LabelShaper;
use crate::scene::frame::{DrawCmd, FrameScene};
use crate::scene::layer::LayerStyle;
use kurbo::Shape;
use std::path::Path;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

const CIRCLE_TOLERANCE: f64 = 0.1;

/// CPU rasterizer powered by `vello_cpu`.
///
/// Owns one render context that is reused across frames of the same size. Without a label font,
/// [`DrawCmd::Label`] commands are skipped.
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    labels: Option<LabelShaper>,
}

impl Default for CpuRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRasterizer {
    /// Rasterizer without a label font.
    pub fn new() -> Self {
        Self {
            ctx: None,
            labels: None,
        }
    }

    /// Rasterizer that shapes labels with the font at `path`.
    pub fn with_label_font(path: impl AsRef<Path>) -> HuffvisResult<Self> {
        Ok(Self {
            ctx: None,
            labels: Some(LabelShaper::from_path(path.as_ref())?),
        })
    }

    /// Rasterizer that shapes labels with in-memory font bytes.
    pub fn with_label_font_bytes(font_bytes: Vec<u8>) -> HuffvisResult<Self> {
        Ok(Self {
            ctx: None,
            labels: Some(LabelShaper::from_bytes(font_bytes)?),
        })
    }

    /// `true` when labels will be drawn.
    pub fn has_label_font(&self) -> bool {
        self.labels.is_some()
    }

    /// Rasterize one display list into a premultiplied RGBA8 frame.
    pub fn rasterize(
        &mut self,
        canvas: Canvas,
        style: LayerStyle,
        scene: &FrameScene,
    ) -> HuffvisResult<FrameRGBA> {
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| HuffvisError::render("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| HuffvisError::render("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        if !scene.is_empty() {
            self.with_ctx_mut(w, h, |this, ctx| {
                ctx.set_stroke(stroke_for(style));
                for cmd in scene.cmds() {
                    this.draw_cmd(canvas, style, cmd, ctx);
                }
                ctx.flush();
                ctx.render_to_pixmap(&mut pixmap);
            });
        }

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> R,
    ) -> R {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx);
        self.ctx = Some(ctx);
        out
    }

    fn draw_cmd(
        &mut self,
        canvas: Canvas,
        style: LayerStyle,
        cmd: &DrawCmd,
        ctx: &mut vello_cpu::RenderContext,
    ) {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match cmd {
            DrawCmd::Clear { color } => {
                ctx.set_paint(paint(*color));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(canvas.width),
                    f64::from(canvas.height),
                ));
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                if *radius <= 0.0 {
                    return;
                }
                let path = kurbo::Circle::new(*center, *radius).to_path(CIRCLE_TOLERANCE);
                let cpu_path = bezpath_to_cpu(&path);
                ctx.set_paint(paint(*color));
                ctx.fill_path(&cpu_path);
                ctx.stroke_path(&cpu_path);
            }
            DrawCmd::Line { from, to, color } => {
                let mut path = BezPath::new();
                path.move_to(*from);
                path.line_to(*to);
                ctx.set_paint(paint(*color));
                ctx.stroke_path(&bezpath_to_cpu(&path));
            }
            DrawCmd::Label {
                text,
                center,
                color,
            } => {
                let Some(labels) = self.labels.as_mut() else {
                    tracing::trace!(%text, "no label font; skipping label");
                    return;
                };
                let layout = labels.layout(text, style.font_size, *color);
                let origin = Point::new(
                    center.x - f64::from(layout.width()) * 0.5,
                    center.y - f64::from(layout.height()) * 0.5,
                );
                ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));
                        let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(labels.font())
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            }
        }
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stroke_for(style: LayerStyle) -> vello_cpu::kurbo::Stroke {
    let cap = if style.round_caps {
        vello_cpu::kurbo::Cap::Round
    } else {
        vello_cpu::kurbo::Cap::Butt
    };
    vello_cpu::kurbo::Stroke::new(style.stroke_width).with_caps(cap)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
