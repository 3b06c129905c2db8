//! Input seams implemented by out-of-scope collaborators

/// A key event forwarded by the window layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    Backspace,
    Enter,
}

/// The registration target for event listeners.
///
/// Events register boxed listeners on raw window coordinates and keys; hit
/// testing against committed areas happens inside the listeners themselves.
pub trait InputHardware {
    fn on_mouse_press(&mut self, listener: Box<dyn FnMut(f32, f32)>);
    fn on_mouse_release(&mut self, listener: Box<dyn FnMut(f32, f32)>);
    fn on_key_press(&mut self, listener: Box<dyn FnMut(Key)>);
}
