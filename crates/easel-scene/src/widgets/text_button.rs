//! Labeled buttons

use super::{Button, ButtonConfig, Labeled};
use crate::shapes::Text;
use crate::{FontMetrics, InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area};

/// A [`Button`] with a label at its origin.
pub struct TextButton {
    inner: Labeled,
}

impl TextButton {
    pub fn new(
        label: impl Into<String>,
        metrics: &dyn FontMetrics,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self::with_config(ButtonConfig::default(), label, metrics, action)
    }

    pub fn with_config(
        config: ButtonConfig,
        label: impl Into<String>,
        metrics: &dyn FontMetrics,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self {
            inner: Labeled::new(Button::with_config(config, action), Text::new(label, metrics)),
        }
    }
}

impl Shape for TextButton {
    fn draw(&self, surface: &mut dyn Surface) {
        self.inner.draw(surface);
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        self.inner.register(hardware);
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        self.inner.adjustment(adjustment)
    }
}
