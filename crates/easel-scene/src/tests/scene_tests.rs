use super::Scene;
use crate::{Button, Column, Rect};
use easel_geometry::{Area, Size};
use easel_testing::{ScriptedInput, TrackedShape};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn layout_injects_the_viewport_into_soft_roots() {
    let root = TrackedShape::new(Area::soft(0.0, 0.0, 10.0, 10.0));
    let slot = root.committed();
    let mut scene = Scene::new(root);

    let committed = scene.layout(800.0, 600.0);

    assert_eq!(committed.width(), 800.0);
    assert_eq!(committed.height(), 600.0);
    assert_eq!(slot.get().width(), 800.0);
    assert_eq!(scene.committed(), Some(committed));
}

#[test]
fn fixed_roots_ignore_the_viewport() {
    let mut scene = Scene::new(TrackedShape::new(Area::from_size(Size::fix(200.0, 100.0))));

    let committed = scene.layout(800.0, 600.0);

    assert_eq!(committed.width(), 200.0);
    assert_eq!(committed.height(), 100.0);
}

#[test]
fn natural_probes_without_committing() {
    let mut scene = Scene::new(TrackedShape::new(Area::from_size(Size::fix(200.0, 100.0))));

    let natural = scene.natural();

    assert_eq!(natural.width(), 200.0);
    assert_eq!(scene.committed(), None);
}

#[test]
fn a_click_reaches_a_laid_out_button() {
    let clicks = Rc::new(Cell::new(0));
    let bump = Rc::clone(&clicks);
    let mut scene = Scene::new(
        Column::new()
            .child(Rect::new(Area::from_size(Size::fix(100.0, 50.0))))
            .child(Button::new(move || bump.set(bump.get() + 1))),
    );
    scene.layout(100.0, 100.0);

    let mut input = ScriptedInput::new();
    scene.register(&mut input);
    input.click(50.0, 75.0);

    assert_eq!(clicks.get(), 1);
    input.click(50.0, 25.0);
    assert_eq!(clicks.get(), 1);
}
