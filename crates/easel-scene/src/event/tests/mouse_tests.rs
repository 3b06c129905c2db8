use super::{Press, PressRelease, PressState, Release};
use crate::Event;
use easel_geometry::Area;
use easel_testing::ScriptedInput;
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, impl FnMut()) {
    let count = Rc::new(Cell::new(0));
    let bump = Rc::clone(&count);
    (count, move || bump.set(bump.get() + 1))
}

#[test]
fn press_fires_only_inside_the_area() {
    let (count, bump) = counter();
    let mut input = ScriptedInput::new();
    Press::new(bump).register(&mut input, Area::fix(10.0, 10.0, 20.0, 20.0));

    input.press(5.0, 5.0);
    assert_eq!(count.get(), 0);
    input.press(15.0, 15.0);
    assert_eq!(count.get(), 1);
    input.press(30.0, 30.0);
    assert_eq!(count.get(), 2);
}

#[test]
fn release_fires_only_inside_the_area() {
    let (count, bump) = counter();
    let mut input = ScriptedInput::new();
    Release::new(bump).register(&mut input, Area::fix(0.0, 0.0, 10.0, 10.0));

    input.release(11.0, 5.0);
    assert_eq!(count.get(), 0);
    input.release(10.0, 10.0);
    assert_eq!(count.get(), 1);
}

#[test]
fn release_fires_only_after_a_press() {
    let (pressed, on_press) = counter();
    let (released, on_release) = counter();
    let event = PressRelease::new(on_press, on_release);
    let mut input = ScriptedInput::new();
    event.register(&mut input, Area::fix(0.0, 0.0, 50.0, 50.0));

    input.release(25.0, 25.0);
    assert_eq!(released.get(), 0);
    assert_eq!(event.state(), PressState::Idle);

    input.press(25.0, 25.0);
    assert_eq!(pressed.get(), 1);
    assert_eq!(event.state(), PressState::Pressed);

    input.release(25.0, 25.0);
    assert_eq!(released.get(), 1);
    assert_eq!(event.state(), PressState::Idle);

    input.release(25.0, 25.0);
    assert_eq!(released.get(), 1);
}

#[test]
fn a_release_outside_keeps_the_latch() {
    let (_, on_press) = counter();
    let (released, on_release) = counter();
    let event = PressRelease::new(on_press, on_release);
    let mut input = ScriptedInput::new();
    event.register(&mut input, Area::fix(0.0, 0.0, 50.0, 50.0));

    input.press(25.0, 25.0);
    input.release(100.0, 100.0);
    assert_eq!(released.get(), 0);
    assert_eq!(event.state(), PressState::Pressed);

    input.release(25.0, 25.0);
    assert_eq!(released.get(), 1);
    assert_eq!(event.state(), PressState::Idle);
}
