use super::Group;
use crate::Shape;
use easel_geometry::{Area, FnAdjustment, NoAdjustment};
use easel_testing::TrackedShape;

#[test]
fn natural_area_covers_the_children() {
    let mut group = Group::new()
        .child(TrackedShape::new(Area::fix(0.0, 0.0, 30.0, 10.0)))
        .child(TrackedShape::new(Area::fix(20.0, 5.0, 30.0, 10.0)));

    let natural = group.adjustment(&NoAdjustment);

    assert_eq!(natural.x(), 0.0);
    assert_eq!(natural.y(), 0.0);
    assert_eq!(natural.width(), 50.0);
    assert_eq!(natural.height(), 15.0);
    assert!(natural.size.width.is_fix());
    assert!(natural.size.height.is_fix());
}

#[test]
fn one_soft_child_makes_the_overlay_soft() {
    let mut group = Group::new()
        .child(TrackedShape::new(Area::fix(0.0, 0.0, 30.0, 10.0)))
        .child(TrackedShape::new(Area::soft(0.0, 0.0, 10.0, 10.0)));

    let natural = group.adjustment(&NoAdjustment);

    assert!(!natural.size.width.is_fix());
    assert!(!natural.size.height.is_fix());
}

#[test]
fn commit_reaches_every_child_with_the_same_slot() {
    let first = TrackedShape::new(Area::soft(0.0, 0.0, 10.0, 10.0));
    let second = TrackedShape::new(Area::soft(0.0, 0.0, 20.0, 20.0));
    let first_slot = first.committed();
    let second_slot = second.committed();
    let mut group = Group::new().child(first).child(second);

    let committed = group.adjustment(&FnAdjustment::new(
        |_, _| (5.0, 5.0),
        |_, _| (100.0, 80.0),
    ));

    for slot in [first_slot.get(), second_slot.get()] {
        assert_eq!(slot.x(), 5.0);
        assert_eq!(slot.y(), 5.0);
        assert_eq!(slot.width(), 100.0);
        assert_eq!(slot.height(), 80.0);
    }
    assert_eq!(committed.x(), 5.0);
    assert_eq!(committed.width(), 100.0);
}

#[test]
fn empty_group_is_zero() {
    let mut group = Group::new();
    assert_eq!(group.adjustment(&NoAdjustment), Area::default());
}
