use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(10, 0).is_err());
}

#[test]
fn secs_to_frames_rounds_to_nearest() {
    let fps = Fps::new(10, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(10.0 / 30.0), 3);
    assert_eq!(fps.secs_to_frames_round(0.25), 3);
    assert_eq!(fps.secs_to_frames_round(2.0), 20);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);
    assert_eq!(fps.secs_to_frames_round(f64::NAN), 0);
}

#[test]
fn canvas_bounds_are_validated() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(400, 300).unwrap();
    assert_eq!(c.center_x(), 200.0);
    assert_eq!(c.rgba_len(), 400 * 300 * 4);
}

#[test]
fn premul_of_opaque_color_is_identity() {
    assert_eq!(Rgba8::rgb(64, 255, 64).to_premul(), [64, 255, 64, 255]);
    let half = Rgba8 {
        r: 255,
        g: 0,
        b: 0,
        a: 128,
    };
    assert_eq!(half.to_premul(), [128, 0, 0, 128]);
}
