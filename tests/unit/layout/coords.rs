use super::*;

fn mapper(root_weight: f64) -> CoordinateMapper {
    CoordinateMapper::new(Canvas::new(400, 300).unwrap(), root_weight).unwrap()
}

fn code(s: &str) -> Code {
    Code::parse(s).unwrap()
}

#[test]
fn rejects_degenerate_root_weights() {
    let canvas = Canvas::new(400, 300).unwrap();
    assert!(CoordinateMapper::new(canvas, 0.0).is_err());
    assert!(CoordinateMapper::new(canvas, -3.0).is_err());
    assert!(CoordinateMapper::new(canvas, f64::NAN).is_err());
    assert!(CoordinateMapper::new(canvas, f64::INFINITY).is_err());
    assert!(CoordinateMapper::new(canvas, 1.0).is_err());
}

#[test]
fn root_weight_sits_exactly_on_top_margin() {
    let m = mapper(100.0);
    assert_eq!(m.y_for_weight(100.0), Y_MARGIN * 300.0);
}

#[test]
fn unit_weight_sits_on_bottom_margin() {
    let m = mapper(100.0);
    assert!((m.y_for_weight(1.0) - 0.95 * 300.0).abs() < 1e-9);
}

#[test]
fn y_stays_inside_margins_for_any_admissible_weight() {
    let m = mapper(100.0);
    for w in [1e-6, 0.5, 1.0, 2.0, 5.0, 33.3, 99.999, 100.0] {
        let y = m.y_for_weight(w);
        assert!(
            (0.05 * 300.0 - 1e-9..=0.95 * 300.0 + 1e-9).contains(&y),
            "w={w} y={y}"
        );
    }
}

#[test]
fn heavier_nodes_sit_higher() {
    let m = mapper(100.0);
    assert!(m.y_for_weight(50.0) < m.y_for_weight(10.0));
    assert!(m.y_for_weight(10.0) < m.y_for_weight(5.0));
}

#[test]
fn empty_code_is_centered() {
    let m = mapper(100.0);
    assert_eq!(m.x_for_code(&Code::empty()), 200.0);
}

#[test]
fn first_bit_moves_zero_right_and_one_left() {
    let m = mapper(100.0);
    // (200 + 100 - 200) * 0.95 + 200
    assert!((m.x_for_code(&code("0")) - 295.0).abs() < 1e-9);
    assert!((m.x_for_code(&code("1")) - 105.0).abs() < 1e-9);
}

#[test]
fn x_ignores_weight() {
    let m = mapper(100.0);
    let a = m.position_for(&code("0110"), 3.0);
    let b = m.position_for(&code("0110"), 40.0);
    assert_eq!(a.x, b.x);
    assert!(a.y > b.y);
}

#[test]
fn longer_shared_prefix_means_closer_x() {
    let m = mapper(100.0);
    let base = "0110101";
    let mut prev = f64::INFINITY;
    for k in 0..base.len() {
        let shared = &base[..k];
        let flip = if &base[k..=k] == "0" { "1" } else { "0" };
        let c1 = code(&format!("{shared}{}{}", &base[k..=k], "00"));
        let c2 = code(&format!("{shared}{flip}00"));
        let d = (m.x_for_code(&c1) - m.x_for_code(&c2)).abs();
        assert!(d < prev, "k={k} d={d} prev={prev}");
        prev = d;
    }
}

#[test]
fn sibling_codes_mirror_around_damped_parent_anchor() {
    let m = mapper(100.0);
    let center = 200.0;
    for p in ["", "0", "1", "01", "110", "0101"] {
        let parent = m.x_for_code(&code(p));
        let anchor = center + X_DAMPING * (parent - center);
        let x0 = m.x_for_code(&code(&format!("{p}0")));
        let x1 = m.x_for_code(&code(&format!("{p}1")));
        assert!(((x0 + x1) * 0.5 - anchor).abs() < 1e-9, "prefix {p}");
        assert!(x0 > x1);
    }
}

#[test]
fn parse_rejects_non_bit_characters() {
    assert!(Code::parse("01a").is_err());
    assert_eq!(code("0110").to_string(), "0110");
}
