//! Mouse events hit-tested against committed areas

use super::Event;
use crate::InputHardware;
use easel_geometry::Area;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Runs an action when the mouse is pressed inside the registered area.
pub struct Press {
    action: Rc<RefCell<dyn FnMut()>>,
}

impl Press {
    pub fn new(action: impl FnMut() + 'static) -> Self {
        Self {
            action: Rc::new(RefCell::new(action)),
        }
    }
}

impl Event for Press {
    fn register(&self, hardware: &mut dyn InputHardware, area: Area) {
        let action = Rc::clone(&self.action);
        hardware.on_mouse_press(Box::new(move |x, y| {
            if area.contains(x, y) {
                (action.borrow_mut())();
            }
        }));
    }
}

/// Runs an action when the mouse is released inside the registered area.
pub struct Release {
    action: Rc<RefCell<dyn FnMut()>>,
}

impl Release {
    pub fn new(action: impl FnMut() + 'static) -> Self {
        Self {
            action: Rc::new(RefCell::new(action)),
        }
    }
}

impl Event for Release {
    fn register(&self, hardware: &mut dyn InputHardware, area: Area) {
        let action = Rc::clone(&self.action);
        hardware.on_mouse_release(Box::new(move |x, y| {
            if area.contains(x, y) {
                (action.borrow_mut())();
            }
        }));
    }
}

/// Whether a press is currently held on the shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PressState {
    #[default]
    Idle,
    Pressed,
}

/// A press/release pair latched through [`PressState`].
///
/// The release action can only ever fire after the press action did on the
/// same shape; a stray release leaves the state untouched.
pub struct PressRelease {
    on_press: Rc<RefCell<dyn FnMut()>>,
    on_release: Rc<RefCell<dyn FnMut()>>,
    state: Rc<Cell<PressState>>,
}

impl PressRelease {
    pub fn new(on_press: impl FnMut() + 'static, on_release: impl FnMut() + 'static) -> Self {
        Self {
            on_press: Rc::new(RefCell::new(on_press)),
            on_release: Rc::new(RefCell::new(on_release)),
            state: Rc::new(Cell::new(PressState::Idle)),
        }
    }

    /// The current latch state.
    pub fn state(&self) -> PressState {
        self.state.get()
    }
}

impl Event for PressRelease {
    fn register(&self, hardware: &mut dyn InputHardware, area: Area) {
        let state = Rc::clone(&self.state);
        let action = Rc::clone(&self.on_press);
        hardware.on_mouse_press(Box::new(move |x, y| {
            if area.contains(x, y) {
                (action.borrow_mut())();
                state.set(PressState::Pressed);
            }
        }));
        let state = Rc::clone(&self.state);
        let action = Rc::clone(&self.on_release);
        hardware.on_mouse_release(Box::new(move |x, y| {
            if area.contains(x, y) && state.get() == PressState::Pressed {
                (action.borrow_mut())();
                state.set(PressState::Idle);
            }
        }));
    }
}
