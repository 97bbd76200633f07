//! Back-to-front layer compositing.
//!
//! `layers[0]` is the base surface. The remaining layers are painted over it from the last
//! declared to the second, so `layers[1]` ends up on top.

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::cpu::{CpuRasterizer, FrameRGBA};
use crate::scene::frame::FrameScene;
use crate::scene::layer::Layer;

pub(crate) type PremulRgba8 = [u8; 4];

/// Premultiplied source-over of `src` onto `dst`.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = src;
    for (o, d) in out.iter_mut().zip(dst) {
        *o = o.saturating_add(mul_div255_u8(u16::from(d), inv));
    }
    out
}

/// Source-over every pixel of `src` onto `dst`.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> HuffvisResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(HuffvisError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite one frame index across `layers`.
pub fn composite_frame(
    layers: &[&Layer],
    idx: FrameIndex,
    rasterizer: &mut CpuRasterizer,
) -> HuffvisResult<FrameRGBA> {
    let (base, rest) = layers
        .split_first()
        .ok_or_else(|| HuffvisError::validation("composite needs at least one layer"))?;
    fn scene(layer: &Layer, idx: FrameIndex) -> HuffvisResult<&FrameScene> {
        layer
            .frame(idx)
            .ok_or_else(|| HuffvisError::render(format!("frame {} out of range", idx.0)))
    }

    let mut out = rasterizer.rasterize(base.canvas(), base.style(), scene(base, idx)?)?;
    for layer in rest.iter().rev() {
        let src = rasterizer.rasterize(layer.canvas(), layer.style(), scene(layer, idx)?)?;
        over_in_place(&mut out.data, &src.data)?;
    }
    Ok(out)
}

/// Composite every frame of `layers` and push the results to `sink`.
///
/// All layers must share canvas size and frame count. As with [`Layer::finalize`], a failed frame
/// is logged and skipped and the first failure is reported after the sink is closed.
#[tracing::instrument(skip_all, fields(layers = layers.len()))]
pub fn composite(
    layers: &[&Layer],
    rasterizer: &mut CpuRasterizer,
    sink: &mut dyn FrameSink,
) -> HuffvisResult<()> {
    let base = layers
        .first()
        .ok_or_else(|| HuffvisError::validation("composite needs at least one layer"))?;
    for (i, layer) in layers.iter().enumerate().skip(1) {
        if layer.canvas() != base.canvas() {
            return Err(HuffvisError::validation(format!(
                "layer {i} canvas {:?} differs from base {:?}",
                layer.canvas(),
                base.canvas()
            )));
        }
        if layer.frame_count() != base.frame_count() {
            return Err(HuffvisError::validation(format!(
                "layer {i} has {} frames, base has {}",
                layer.frame_count(),
                base.frame_count()
            )));
        }
    }

    sink.begin(SinkConfig {
        width: base.canvas().width,
        height: base.canvas().height,
        fps: base.fps(),
        frame_count: base.frame_count(),
    })?;

    let mut first_err = None;
    for i in 0..base.frame_count() {
        let idx = FrameIndex(i);
        let pushed = composite_frame(layers, idx, rasterizer).and_then(|f| sink.push_frame(idx, &f));
        if let Err(e) = pushed {
            tracing::warn!(frame = i, error = %e, "composited frame write failed");
            first_err.get_or_insert(e);
        }
    }

    let ended = sink.end();
    match first_err {
        Some(e) => Err(e),
        None => ended,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
