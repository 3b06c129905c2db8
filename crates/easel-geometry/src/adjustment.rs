//! The negotiation protocol between a shape and whoever places it

/// A request to move and resize a shape. Soft scalars take the values the
/// adjustment hands back; fixed scalars ignore it entirely.
pub trait Adjustment {
    /// Probe adjustments only ask for the natural footprint; nothing is
    /// committed while one is in flight.
    fn is_probe(&self) -> bool {
        false
    }

    /// Maps a clean origin to the committed one.
    fn pos(&self, x: f32, y: f32) -> (f32, f32);

    /// Maps a clean extent to the committed one.
    fn size(&self, width: f32, height: f32) -> (f32, f32);
}

/// Identity adjustment used to read a shape's natural footprint.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAdjustment;

impl Adjustment for NoAdjustment {
    fn is_probe(&self) -> bool {
        true
    }

    fn pos(&self, x: f32, y: f32) -> (f32, f32) {
        (x, y)
    }

    fn size(&self, width: f32, height: f32) -> (f32, f32) {
        (width, height)
    }
}

/// Adjustment built from a pair of closures, one per channel.
pub struct FnAdjustment<P, S> {
    pos: P,
    size: S,
}

impl<P, S> FnAdjustment<P, S>
where
    P: Fn(f32, f32) -> (f32, f32),
    S: Fn(f32, f32) -> (f32, f32),
{
    pub fn new(pos: P, size: S) -> Self {
        Self { pos, size }
    }
}

impl<P, S> Adjustment for FnAdjustment<P, S>
where
    P: Fn(f32, f32) -> (f32, f32),
    S: Fn(f32, f32) -> (f32, f32),
{
    fn pos(&self, x: f32, y: f32) -> (f32, f32) {
        (self.pos)(x, y)
    }

    fn size(&self, width: f32, height: f32) -> (f32, f32) {
        (self.size)(width, height)
    }
}

#[cfg(test)]
#[path = "tests/adjustment_tests.rs"]
mod tests;
