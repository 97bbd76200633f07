use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::scene::layer::LayerStyle;

fn layer(frames: u64) -> Layer {
    Layer::new(
        Canvas::new(64, 64).unwrap(),
        Fps::new(10, 1).unwrap(),
        frames,
        LayerStyle::default(),
    )
    .unwrap()
}

fn radius_at(layer: &Layer, frame: u64) -> Option<f64> {
    layer
        .frame(FrameIndex(frame))?
        .cmds()
        .iter()
        .rev()
        .find_map(|c| match c {
            DrawCmd::Circle { radius, .. } => Some(*radius),
            _ => None,
        })
}

fn circle() -> NodeCircle {
    NodeCircle {
        center: Point::new(32.0, 32.0),
        radius: 10.0,
        color: Rgba8::rgb(64, 255, 64),
    }
}

#[test]
fn curve_rises_then_falls() {
    for d in [2u64, 3, 4, 7, 10, 21] {
        let r: Vec<f64> = (1..=d).map(|f| emerge_radius(f, d, 10.0)).collect();
        let half = d.div_ceil(2) as usize;
        assert!(r[..half].windows(2).all(|w| w[0] <= w[1]), "d={d} {r:?}");
        assert!(r[half - 1..].windows(2).all(|w| w[0] >= w[1]), "d={d} {r:?}");
    }
}

#[test]
fn peak_is_exact_overshoot_at_half() {
    for d in [2u64, 3, 4, 7, 10, 21] {
        let half = d.div_ceil(2);
        assert_eq!(emerge_radius(half, d, 10.0), OVERSHOOT * 10.0, "d={d}");
        assert_eq!(emerge_radius(half, d, 7.3), OVERSHOOT * 7.3, "d={d}");
    }
}

#[test]
fn settles_exactly_on_target_from_last_draw_frame() {
    for d in [2u64, 3, 4, 7, 10, 21] {
        for f in d..d + 5 {
            assert_eq!(emerge_radius(f, d, 7.3), 7.3, "d={d} f={f}");
        }
    }
}

#[test]
fn zero_duration_is_fully_grown() {
    assert_eq!(emerge_radius(0, 0, 4.0), 4.0);
    assert_eq!(emerge_radius(1, 0, 4.0), 4.0);
}

#[test]
fn emerge_advances_cursor_by_draw_frames() {
    let mut l = layer(50);
    let t = l.timeline().advance(5);
    let t = emerge(&mut l, t, 1.0, circle());
    assert_eq!(t.cursor, FrameIndex(15));
}

#[test]
fn emerge_draws_from_cursor_to_end_of_layer() {
    let mut l = layer(30);
    let t = l.timeline().advance(5);
    emerge(&mut l, t, 1.0, circle());

    for f in 0..5 {
        assert_eq!(radius_at(&l, f), None, "frame {f}");
    }
    // Ten draw frames: five growing, five settling.
    assert_eq!(radius_at(&l, 5), Some(2.5));
    assert_eq!(radius_at(&l, 9), Some(12.5));
    assert_eq!(radius_at(&l, 14), Some(10.0));
    for f in 15..30 {
        assert_eq!(radius_at(&l, f), Some(10.0), "frame {f}");
    }
}

#[test]
fn emerge_past_layer_end_still_moves_cursor() {
    let mut l = layer(10);
    let t = l.timeline().advance(8);
    let t = emerge(&mut l, t, 1.0, circle());
    assert_eq!(t.cursor, FrameIndex(18));
    assert!(radius_at(&l, 9).is_some());
}
