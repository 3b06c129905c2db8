use easel_geometry::{Area, Pos, Size};
use easel_scene::{
    ButtonConfig, Color, Column, EmptyShape, Grid, Image, ImageHandle, Line, ListView, Oval,
    Rect, Scene, Shape, Text, TextButton, TextField,
};
use easel_testing::{CharCellMetrics, PaintOp, RecordingSurface, ScriptedInput};
use std::cell::Cell;
use std::rc::Rc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Easel gallery ===");
    println!("A headless tour of the scene graph: the scene below is assembled,");
    println!("negotiated against a fake 800x600 viewport, and then driven by");
    println!("scripted mouse and key input.");
    println!();

    let metrics = CharCellMetrics::default();
    let clicks = Rc::new(Cell::new(0u32));
    let bump = Rc::clone(&clicks);

    let cells: Vec<Box<dyn Shape>> = (0..4u32)
        .map(|cell| {
            let slot = Area::from_size(Size::fix(60.0, 40.0));
            let shade = (60 + 40 * cell) as u8;
            let color = Color::rgb(shade, shade, shade);
            if cell % 2 == 0 {
                Box::new(Rect::colored(slot, color)) as Box<dyn Shape>
            } else {
                Box::new(Oval::new(slot, color)) as Box<dyn Shape>
            }
        })
        .collect();

    let mut scene = Scene::new(
        Column::new()
            .child(Text::new("Easel gallery", &metrics))
            .child(TextButton::with_config(
                ButtonConfig::default().with_area(Area::from_size(Size::fix(120.0, 32.0))),
                "Press me",
                &metrics,
                move || bump.set(bump.get() + 1),
            ))
            .child(TextField::new(Area::soft(0.0, 0.0, 240.0, 24.0), &metrics))
            .child(ListView::with_area(
                Area::from_size(Size::fix(240.0, 120.0)),
                &["alpha", "beta", "gamma", "delta"],
                &metrics,
            ))
            .child(Grid::new(2, cells))
            .child(Image::new(ImageHandle::new(1, 64.0, 64.0)))
            .child(EmptyShape::new())
            .child(Line::between(
                Pos::fix(600.0, 40.0),
                Pos::fix(760.0, 120.0),
                Color::BLUE,
            )),
    );

    let natural = scene.natural();
    log::info!(
        "content asks for {}x{}",
        natural.width(),
        natural.height()
    );

    let committed = scene.layout(800.0, 600.0);
    log::info!(
        "root committed at ({}, {}) size {}x{}",
        committed.x(),
        committed.y(),
        committed.width(),
        committed.height()
    );

    let mut input = ScriptedInput::new();
    scene.register(&mut input);
    log::info!("{} input listeners bound", input.listener_count());

    // The button occupies the column's second slot, just below the title.
    input.click(60.0, 32.0);
    input.type_str("hello");

    let mut surface = RecordingSurface::new();
    scene.draw(&mut surface);
    for op in surface.ops() {
        if let PaintOp::Text { text, x, baseline, .. } = op {
            log::info!("text {text:?} drawn at ({x}, {baseline})");
        }
    }

    println!("button clicks: {}", clicks.get());
    println!("paint ops recorded: {}", surface.ops().len());
}
