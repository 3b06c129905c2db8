//! One axis value tagged fixed or soft

/// A single dimension (one coordinate or one extent) of a shape.
///
/// A *fixed* scalar is a commitment: containers must preserve its value
/// unchanged. A *soft* scalar is a hint: a container occupying it is free to
/// override it. Every scalar keeps the value it was declared with (its
/// *clean* value) for its whole lifetime; adjustments only ever replace the
/// committed side.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Scalar {
    fix: bool,
    clean: f32,
    current: f32,
}

impl Scalar {
    /// Creates a fixed scalar.
    pub const fn fix(value: f32) -> Self {
        Self {
            fix: true,
            clean: value,
            current: value,
        }
    }

    /// Creates a soft scalar.
    pub const fn soft(value: f32) -> Self {
        Self {
            fix: false,
            clean: value,
            current: value,
        }
    }

    pub const ZERO: Scalar = Scalar::soft(0.0);

    /// Returns true if containers must preserve this scalar.
    #[inline]
    pub fn is_fix(self) -> bool {
        self.fix
    }

    /// The declared value. Never changes after construction.
    #[inline]
    pub fn clean(self) -> f32 {
        self.clean
    }

    /// The committed value. Starts equal to [`clean`](Self::clean) and is
    /// replaced by commit adjustments.
    #[inline]
    pub fn value(self) -> f32 {
        self.current
    }

    /// Snapshot with the committed value reset to the declared one.
    pub fn natural(self) -> Self {
        Self {
            current: self.clean,
            ..self
        }
    }

    /// Applies `transform` to the declared value and returns a scalar
    /// committed to the result, still tagged soft. A fixed scalar returns
    /// itself *without invoking the transform*; share computations built
    /// for soft siblings therefore never run against fixed ones.
    pub fn adjust<F>(self, transform: F) -> Self
    where
        F: FnOnce(f32) -> f32,
    {
        if self.fix {
            self
        } else {
            Self {
                fix: false,
                clean: self.clean,
                current: transform(self.clean),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/scalar_tests.rs"]
mod tests;
