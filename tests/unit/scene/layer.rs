use super::*;
use crate::encode::sink::InMemorySink;
use crate::render::cpu::FrameRGBA;

fn layer(frames: u64) -> Layer {
    Layer::new(
        Canvas::new(8, 8).unwrap(),
        Fps::new(10, 1).unwrap(),
        frames,
        LayerStyle::default(),
    )
    .unwrap()
}

#[derive(Default)]
struct FlakySink {
    attempts: Vec<u64>,
    ended: bool,
}

impl FrameSink for FlakySink {
    fn begin(&mut self, _cfg: SinkConfig) -> HuffvisResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRGBA) -> HuffvisResult<()> {
        self.attempts.push(idx.0);
        if idx.0 == 1 {
            return Err(HuffvisError::encode("disk full"));
        }
        Ok(())
    }

    fn end(&mut self) -> HuffvisResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[test]
fn new_rejects_zero_frames_and_bad_style() {
    let canvas = Canvas::new(8, 8).unwrap();
    let fps = Fps::new(10, 1).unwrap();
    assert!(Layer::new(canvas, fps, 0, LayerStyle::default()).is_err());
    let bad = LayerStyle {
        font_size: 0.0,
        ..LayerStyle::default()
    };
    assert!(Layer::new(canvas, fps, 4, bad).is_err());
}

#[test]
fn default_style_matches_reference_settings() {
    let s = LayerStyle::default();
    assert_eq!(s.stroke_width, 3.0);
    assert!(s.round_caps);
    assert_eq!(s.font_size, 20.0);
}

#[test]
fn timeline_starts_at_zero_and_advances() {
    let l = layer(200);
    let t = l.timeline();
    assert_eq!(t.cursor, FrameIndex(0));
    assert_eq!(t.frame_count, 200);
    assert_eq!(t.advance(7).cursor, FrameIndex(7));
    assert_eq!(t.frames_for(1.5), 15);
}

#[test]
fn background_lands_on_every_frame() {
    let mut l = layer(5);
    l.fill_background(Rgba8::BLACK);
    assert!(l.frames().iter().all(|f| f.cmds().len() == 1));
}

#[test]
fn draw_from_past_end_is_a_noop() {
    let mut l = layer(5);
    l.draw_from(FrameIndex(9), |_| DrawCmd::Clear {
        color: Rgba8::WHITE,
    });
    assert!(l.frames().iter().all(FrameScene::is_empty));
}

#[test]
fn finalize_pushes_every_frame_in_order() {
    let l = layer(4);
    let mut sink = InMemorySink::new();
    l.finalize(&mut CpuRasterizer::new(), &mut sink).unwrap();
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2, 3]);
    assert_eq!(sink.config().unwrap().frame_count, 4);
    assert!(sink.ended());
}

#[test]
fn finalize_keeps_going_after_a_failed_frame() {
    let l = layer(4);
    let mut sink = FlakySink::default();
    let err = l.finalize(&mut CpuRasterizer::new(), &mut sink).unwrap_err();
    assert!(matches!(err, HuffvisError::Encode(_)));
    assert_eq!(sink.attempts, vec![0, 1, 2, 3]);
    assert!(sink.ended);
}
