use super::Labeled;
use crate::shapes::Text;
use crate::{Press, Rect, Shape};
use easel_geometry::{Area, FnAdjustment, NoAdjustment, Size};
use easel_testing::{CharCellMetrics, PaintOp, RecordingSurface, ScriptedInput};

#[test]
fn the_label_follows_the_hosts_committed_origin() {
    let metrics = CharCellMetrics::default();
    let host = Rect::new(Area::soft(0.0, 0.0, 10.0, 10.0));
    let mut labeled = Labeled::new(host, Text::new("ok", &metrics));
    labeled.adjustment(&FnAdjustment::new(
        |_, _| (30.0, 40.0),
        |_, _| (100.0, 20.0),
    ));

    let mut surface = RecordingSurface::new();
    labeled.draw(&mut surface);
    match surface.ops() {
        [PaintOp::FillRect { x, y, .. }, PaintOp::Text { x: label_x, baseline, .. }] => {
            assert_eq!((*x, *y), (30.0, 40.0));
            assert_eq!(*label_x, 30.0);
            assert_eq!(*baseline, 56.0);
        }
        ops => panic!("expected a fill and a label, got {ops:?}"),
    }
}

#[test]
fn probing_reports_the_host_alone() {
    let metrics = CharCellMetrics::default();
    let host = Rect::new(Area::from_size(Size::fix(50.0, 10.0)));
    let mut labeled = Labeled::new(host, Text::new("a very wide label", &metrics));

    let natural = labeled.adjustment(&NoAdjustment);

    assert_eq!(natural.width(), 50.0);
    assert_eq!(natural.height(), 10.0);
}

#[test]
fn only_the_host_registers() {
    let metrics = CharCellMetrics::default();
    let host = Rect::new(Area::fix(0.0, 0.0, 20.0, 20.0)).with_event(Press::new(|| {}));
    let labeled = Labeled::new(host, Text::new("x", &metrics));

    let mut input = ScriptedInput::new();
    labeled.register(&mut input);

    assert_eq!(input.listener_count(), 1);
}
