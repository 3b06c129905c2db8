//! Synthetic input driver

use easel_scene::{InputHardware, Key};

/// An [`InputHardware`] that stores registered listeners and replays
/// scripted events against them.
#[derive(Default)]
pub struct ScriptedInput {
    presses: Vec<Box<dyn FnMut(f32, f32)>>,
    releases: Vec<Box<dyn FnMut(f32, f32)>>,
    keys: Vec<Box<dyn FnMut(Key)>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, x: f32, y: f32) {
        for listener in &mut self.presses {
            listener(x, y);
        }
    }

    pub fn release(&mut self, x: f32, y: f32) {
        for listener in &mut self.releases {
            listener(x, y);
        }
    }

    pub fn click(&mut self, x: f32, y: f32) {
        self.press(x, y);
        self.release(x, y);
    }

    pub fn key(&mut self, key: Key) {
        for listener in &mut self.keys {
            listener(key);
        }
    }

    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.key(Key::Char(c));
        }
    }

    /// Number of listeners currently bound.
    pub fn listener_count(&self) -> usize {
        self.presses.len() + self.releases.len() + self.keys.len()
    }
}

impl InputHardware for ScriptedInput {
    fn on_mouse_press(&mut self, listener: Box<dyn FnMut(f32, f32)>) {
        self.presses.push(listener);
    }

    fn on_mouse_release(&mut self, listener: Box<dyn FnMut(f32, f32)>) {
        self.releases.push(listener);
    }

    fn on_key_press(&mut self, listener: Box<dyn FnMut(Key)>) {
        self.keys.push(listener);
    }
}
