//! Keyboard events

use super::Event;
use crate::{InputHardware, Key};
use easel_geometry::Area;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs an action for every key press. Not hit-tested; the keyboard has no
/// position.
pub struct KeyPress {
    action: Rc<RefCell<dyn FnMut(Key)>>,
}

impl KeyPress {
    pub fn new(action: impl FnMut(Key) + 'static) -> Self {
        Self {
            action: Rc::new(RefCell::new(action)),
        }
    }
}

impl Event for KeyPress {
    fn register(&self, hardware: &mut dyn InputHardware, _area: Area) {
        let action = Rc::clone(&self.action);
        hardware.on_key_press(Box::new(move |key| {
            (action.borrow_mut())(key);
        }));
    }
}
