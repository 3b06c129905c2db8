use super::Area;
use crate::{FnAdjustment, NoAdjustment, Pos, Scalar, Size};
use std::cell::Cell;

fn move_and_resize(x: f32, y: f32, w: f32, h: f32) -> impl crate::Adjustment {
    FnAdjustment::new(move |_, _| (x, y), move |_, _| (w, h))
}

#[test]
fn adjusted_overrides_only_the_soft_scalars() {
    let area = Area::new(
        Pos::new(Scalar::fix(5.0), Scalar::soft(0.0)),
        Size::new(Scalar::soft(10.0), Scalar::fix(20.0)),
    );
    let committed = area.adjusted(&move_and_resize(100.0, 200.0, 300.0, 400.0));
    assert_eq!(committed.x(), 5.0);
    assert_eq!(committed.y(), 200.0);
    assert_eq!(committed.width(), 300.0);
    assert_eq!(committed.height(), 20.0);
}

#[test]
fn fully_fixed_pairs_never_consult_the_adjustment() {
    let calls = Cell::new(0);
    let adjustment = FnAdjustment::new(
        |x, y| {
            calls.set(calls.get() + 1);
            (x, y)
        },
        |w, h| {
            calls.set(calls.get() + 1);
            (w, h)
        },
    );
    Area::fix(0.0, 0.0, 10.0, 10.0).adjusted(&adjustment);
    assert_eq!(calls.get(), 0);
}

#[test]
fn recommitting_starts_from_the_declared_values() {
    let area = Area::soft(0.0, 0.0, 50.0, 50.0);
    let once = area.adjusted(&move_and_resize(10.0, 10.0, 100.0, 100.0));
    let twice = once.adjusted(&move_and_resize(10.0, 10.0, 100.0, 100.0));
    assert_eq!(once, twice);
}

#[test]
fn identity_adjustment_reproduces_the_natural_snapshot() {
    let area = Area::soft(3.0, 4.0, 5.0, 6.0)
        .adjusted(&move_and_resize(30.0, 40.0, 50.0, 60.0));
    assert_eq!(area.adjusted(&NoAdjustment), area.natural());
}

#[test]
fn contains_includes_all_four_edges() {
    let area = Area::fix(10.0, 10.0, 30.0, 20.0);
    assert!(area.contains(10.0, 10.0));
    assert!(area.contains(40.0, 30.0));
    assert!(area.contains(25.0, 15.0));
    assert!(!area.contains(9.9, 15.0));
    assert!(!area.contains(25.0, 30.1));
}
