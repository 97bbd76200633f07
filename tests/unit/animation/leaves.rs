use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::scene::layer::LayerStyle;
use crate::tree::huffman::HuffmanTree;

fn opts() -> LeafOpts {
    LeafOpts {
        secs: 10.0,
        radius: 10.0,
        color: Rgba8::rgb(64, 255, 64),
        label_color: Rgba8::BLACK,
    }
}

#[test]
fn leaves_share_the_time_budget_in_symbol_order() {
    let h = HuffmanTree::from_weights([('a', 5.0), ('b', 5.0), ('c', 10.0), ('d', 30.0), ('e', 50.0)])
        .unwrap();
    let mut l = Layer::new(
        Canvas::new(400, 300).unwrap(),
        Fps::new(10, 1).unwrap(),
        200,
        LayerStyle::default(),
    )
    .unwrap();
    let mapper = CoordinateMapper::new(l.canvas(), 100.0).unwrap();
    let t = l.timeline();
    let (t, placed) = draw_leaves(&mut l, t, &h.codes, &h.weights, &mapper, opts()).unwrap();

    assert_eq!(t.cursor, FrameIndex(100));
    let symbols: String = placed.iter().map(|p| p.symbol).collect();
    assert_eq!(symbols, "abcde");
    let settled: Vec<u64> = placed.iter().map(|p| p.settled.cursor.0).collect();
    assert_eq!(settled, vec![20, 40, 60, 80, 100]);

    let e = placed.iter().find(|p| p.symbol == 'e').unwrap();
    let a = placed.iter().find(|p| p.symbol == 'a').unwrap();
    assert!(e.position.y < a.position.y);
}

#[test]
fn labels_appear_once_growth_finishes() {
    let h = HuffmanTree::from_weights([('x', 1.0), ('y', 3.0)]).unwrap();
    let mut l = Layer::new(
        Canvas::new(100, 100).unwrap(),
        Fps::new(10, 1).unwrap(),
        30,
        LayerStyle::default(),
    )
    .unwrap();
    let mapper = CoordinateMapper::new(l.canvas(), 4.0).unwrap();
    let t = l.timeline();
    let quick = LeafOpts {
        secs: 1.0,
        ..opts()
    };
    draw_leaves(&mut l, t, &h.codes, &h.weights, &mapper, quick).unwrap();

    let labels = |f: u64| {
        l.frame(FrameIndex(f))
            .unwrap()
            .cmds()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Label { .. }))
            .count()
    };
    assert_eq!(labels(4), 0);
    assert_eq!(labels(5), 1);
    assert_eq!(labels(10), 2);
    assert_eq!(labels(29), 2);
}

#[test]
fn missing_weight_is_rejected() {
    let h = HuffmanTree::from_weights([('x', 1.0), ('y', 3.0)]).unwrap();
    let mut weights = h.weights.clone();
    weights.remove(&'y');
    let mut l = Layer::new(
        Canvas::new(100, 100).unwrap(),
        Fps::new(10, 1).unwrap(),
        30,
        LayerStyle::default(),
    )
    .unwrap();
    let mapper = CoordinateMapper::new(l.canvas(), 4.0).unwrap();
    let t = l.timeline();
    assert!(draw_leaves(&mut l, t, &h.codes, &weights, &mapper, opts()).is_err());
}

#[test]
fn control_characters_are_escaped_in_labels() {
    assert_eq!(label_text('\n'), "\\n");
    assert_eq!(label_text(' '), " ");
    assert_eq!(label_text('é'), "é");
}
