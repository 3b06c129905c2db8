//! Editable single-line text input

use crate::event::KeyPress;
use crate::shapes::{Rect, Text};
use crate::{Color, FontMetrics, InputHardware, Key, Shape, Surface};
use easel_geometry::{Adjustment, Area, FnAdjustment};
use std::cell::RefCell;
use std::rc::Rc;

/// A text buffer edited through key presses, drawn over a background rect
/// and clipped to the committed area.
///
/// Edits never renegotiate layout; overlong content simply disappears
/// under the clip.
pub struct TextField {
    background: Rect,
    text: Text,
    buffer: Rc<RefCell<String>>,
    area: Area,
}

impl TextField {
    pub fn new(area: Area, metrics: &dyn FontMetrics) -> Self {
        let buffer = Rc::new(RefCell::new(String::new()));
        let edits = Rc::clone(&buffer);
        let background = Rect::colored(area, Color::rgb(50, 203, 43)).with_event(KeyPress::new(
            move |key| match key {
                Key::Char(c) => edits.borrow_mut().push(c),
                Key::Backspace => {
                    edits.borrow_mut().pop();
                }
                Key::Enter => {}
            },
        ));
        let reads = Rc::clone(&buffer);
        let text = Text::supplied(move || reads.borrow().clone(), metrics);
        Self {
            background,
            text,
            buffer,
            area: Area::default(),
        }
    }

    /// The current buffer contents.
    pub fn value(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl Shape for TextField {
    fn draw(&self, surface: &mut dyn Surface) {
        let area = self.area;
        surface.set_clip(area.x(), area.y(), area.width(), area.height());
        self.background.draw(surface);
        self.text.draw(surface);
        surface.clear_clip();
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        self.background.register(hardware);
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        if adjustment.is_probe() {
            return self.background.adjustment(adjustment);
        }
        let committed = self.background.adjustment(adjustment);
        let (x, y) = (committed.x(), committed.y());
        self.text.adjustment(&FnAdjustment::new(
            move |_, _| (x, y),
            |width, height| (width, height),
        ));
        self.area = committed;
        committed
    }
}
