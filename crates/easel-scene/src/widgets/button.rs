//! Press-and-release buttons

use super::{DualShape, FaceHandle};
use crate::event::{Event, PressRelease};
use crate::shapes::Rect;
use crate::{Color, InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area};

/// Optional knobs for [`Button::with_config`]. The defaults give a soft
/// area and two gray faces.
pub struct ButtonConfig {
    pub area: Area,
    pub released: Color,
    pub pressed: Color,
}

impl ButtonConfig {
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = area;
        self
    }

    pub fn with_colors(mut self, released: Color, pressed: Color) -> Self {
        self.released = released;
        self.pressed = pressed;
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            area: Area::default(),
            released: Color::GRAY,
            pressed: Color::rgb(64, 64, 64),
        }
    }
}

/// A shape with a press/release cycle: the press flips to the pressed
/// face, the release runs the action and flips back.
pub struct Button {
    faces: DualShape,
    event: PressRelease,
    area: Area,
}

impl Button {
    /// A soft-area button with the default faces. The action runs on
    /// release.
    pub fn new(action: impl FnMut() + 'static) -> Self {
        Self::with_config(ButtonConfig::default(), action)
    }

    pub fn with_config(config: ButtonConfig, action: impl FnMut() + 'static) -> Self {
        let handle = FaceHandle::new();
        let faces = DualShape::new(
            Rect::colored(config.area, config.released),
            Rect::colored(config.area, config.pressed),
            handle,
        );
        Self::with_faces(faces, action)
    }

    /// A button over custom faces: released first, pressed second.
    pub fn with_faces(faces: DualShape, mut action: impl FnMut() + 'static) -> Self {
        let press = faces.handle();
        let release = faces.handle();
        let event = PressRelease::new(
            move || press.toggle(),
            move || {
                action();
                release.toggle();
            },
        );
        Self {
            faces,
            event,
            area: Area::default(),
        }
    }
}

impl Shape for Button {
    fn draw(&self, surface: &mut dyn Surface) {
        self.faces.draw(surface);
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        self.faces.register(hardware);
        self.event.register(hardware, self.area);
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        if adjustment.is_probe() {
            return self.faces.adjustment(adjustment);
        }
        self.area = self.faces.adjustment(adjustment);
        self.area
    }
}
