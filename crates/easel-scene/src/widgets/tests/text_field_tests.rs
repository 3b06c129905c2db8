use super::TextField;
use crate::{Key, Shape};
use easel_geometry::{Area, FnAdjustment};
use easel_testing::{CharCellMetrics, PaintOp, RecordingSurface, ScriptedInput};

fn registered_field() -> (TextField, ScriptedInput) {
    let metrics = CharCellMetrics::default();
    let field = TextField::new(Area::soft(0.0, 0.0, 100.0, 20.0), &metrics);
    let mut input = ScriptedInput::new();
    field.register(&mut input);
    (field, input)
}

#[test]
fn keys_edit_the_buffer() {
    let (field, mut input) = registered_field();

    input.type_str("hi");
    input.key(Key::Char('!'));
    assert_eq!(field.value(), "hi!");

    input.key(Key::Backspace);
    assert_eq!(field.value(), "hi");

    input.key(Key::Enter);
    assert_eq!(field.value(), "hi");
}

#[test]
fn backspace_on_an_empty_buffer_is_a_no_op() {
    let (field, mut input) = registered_field();

    input.key(Key::Backspace);
    assert_eq!(field.value(), "");
}

#[test]
fn drawing_clips_to_the_committed_area() {
    let metrics = CharCellMetrics::default();
    let mut field = TextField::new(Area::soft(0.0, 0.0, 0.0, 0.0), &metrics);
    field.adjustment(&FnAdjustment::new(
        |_, _| (5.0, 6.0),
        |_, _| (100.0, 20.0),
    ));

    let mut surface = RecordingSurface::new();
    field.draw(&mut surface);

    assert_eq!(
        surface.ops().first(),
        Some(&PaintOp::SetClip {
            x: 5.0,
            y: 6.0,
            width: 100.0,
            height: 20.0,
        })
    );
    assert_eq!(surface.ops().last(), Some(&PaintOp::ClearClip));
}
