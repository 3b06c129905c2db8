//! Line segments between two negotiable endpoints

use crate::{Color, InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area, Pos, Scalar, Size};

/// A line between two endpoints.
///
/// The advertised area is the endpoints' bounding box with a fixed extent,
/// so containers can move a line but never squash it. A commit translates
/// the soft endpoint components by the delta the adjustment applied to the
/// bounding origin; fixed components stay pinned.
pub struct Line {
    first: Pos,
    second: Pos,
    color: Color,
}

impl Line {
    /// A black line between two soft points.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::between(Pos::soft(x1, y1), Pos::soft(x2, y2), Color::BLACK)
    }

    pub fn between(first: Pos, second: Pos, color: Color) -> Self {
        Self {
            first,
            second,
            color,
        }
    }

    fn bounds(first: Pos, second: Pos) -> Area {
        let left = first.x.value().min(second.x.value());
        let top = first.y.value().min(second.y.value());
        let width = (first.x.value() - second.x.value()).abs();
        let height = (first.y.value() - second.y.value()).abs();
        let x = if first.x.is_fix() && second.x.is_fix() {
            Scalar::fix(left)
        } else {
            Scalar::soft(left)
        };
        let y = if first.y.is_fix() && second.y.is_fix() {
            Scalar::fix(top)
        } else {
            Scalar::soft(top)
        };
        Area::new(Pos::new(x, y), Size::fix(width, height))
    }
}

impl Shape for Line {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_line(
            self.first.x.value(),
            self.first.y.value(),
            self.second.x.value(),
            self.second.y.value(),
            self.color,
        );
    }

    fn register(&self, _hardware: &mut dyn InputHardware) {}

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        let natural = Self::bounds(self.first.natural(), self.second.natural());
        if adjustment.is_probe() {
            return natural;
        }
        let committed = natural.adjusted(adjustment);
        let dx = committed.x() - natural.x();
        let dy = committed.y() - natural.y();
        self.first = self.first.translated(dx, dy);
        self.second = self.second.translated(dx, dy);
        Self::bounds(self.first, self.second)
    }
}
