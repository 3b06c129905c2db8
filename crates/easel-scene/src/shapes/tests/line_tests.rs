use super::Line;
use crate::{Color, Shape};
use easel_geometry::{FnAdjustment, NoAdjustment, Pos};
use easel_testing::{PaintOp, RecordingSurface};

#[test]
fn advertises_the_fixed_bounding_box() {
    let mut line = Line::new(10.0, 10.0, 40.0, 30.0);
    let natural = line.adjustment(&NoAdjustment);

    assert_eq!(natural.x(), 10.0);
    assert_eq!(natural.y(), 10.0);
    assert_eq!(natural.width(), 30.0);
    assert_eq!(natural.height(), 20.0);
    assert!(natural.size.width.is_fix());
    assert!(!natural.pos.x.is_fix());
}

#[test]
fn commit_translates_both_endpoints() {
    let mut line = Line::new(10.0, 10.0, 40.0, 30.0);
    let committed = line.adjustment(&FnAdjustment::new(
        |_, _| (100.0, 50.0),
        |width, height| (width, height),
    ));

    assert_eq!(committed.x(), 100.0);
    assert_eq!(committed.y(), 50.0);
    assert_eq!(committed.width(), 30.0);

    let mut surface = RecordingSurface::new();
    line.draw(&mut surface);
    assert_eq!(
        surface.ops(),
        [PaintOp::Line {
            x1: 100.0,
            y1: 50.0,
            x2: 130.0,
            y2: 70.0,
            color: Color::BLACK,
        }]
    );
}

#[test]
fn fixed_endpoint_components_stay_pinned() {
    let mut line = Line::between(Pos::fix(10.0, 10.0), Pos::soft(40.0, 30.0), Color::RED);
    line.adjustment(&FnAdjustment::new(
        |_, _| (100.0, 50.0),
        |width, height| (width, height),
    ));

    let mut surface = RecordingSurface::new();
    line.draw(&mut surface);
    assert_eq!(
        surface.ops(),
        [PaintOp::Line {
            x1: 10.0,
            y1: 10.0,
            x2: 130.0,
            y2: 70.0,
            color: Color::RED,
        }]
    );
}

#[test]
fn recommitting_reads_the_declared_endpoints() {
    let mut line = Line::new(0.0, 0.0, 10.0, 10.0);
    line.adjustment(&FnAdjustment::new(|_, _| (20.0, 20.0), |w, h| (w, h)));
    line.adjustment(&FnAdjustment::new(|_, _| (20.0, 20.0), |w, h| (w, h)));

    let mut surface = RecordingSurface::new();
    line.draw(&mut surface);
    assert_eq!(
        surface.ops(),
        [PaintOp::Line {
            x1: 20.0,
            y1: 20.0,
            x2: 30.0,
            y2: 30.0,
            color: Color::BLACK,
        }]
    );
}
