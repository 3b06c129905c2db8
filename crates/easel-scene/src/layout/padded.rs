//! Margin decorator

use crate::{InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area, FnAdjustment, NoAdjustment, Scalar, Size};

/// Outer margins around a shape.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Margin {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margin {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub const fn uniform(all: f32) -> Self {
        Self::new(all, all, all, all)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Reserves margins around a shape: the advertised footprint is the
/// child's inflated by the margins, and a commit insets the child within
/// the committed slot. The inner slot never goes negative.
pub struct Padded {
    child: Box<dyn Shape>,
    margin: Margin,
}

impl Padded {
    pub fn new(child: impl Shape + 'static, margin: Margin) -> Self {
        Self {
            child: Box::new(child),
            margin,
        }
    }

    fn inflated(&self, child: Area) -> Area {
        Area::new(
            child.pos,
            Size::new(
                inflate(child.size.width, self.margin.horizontal_sum()),
                inflate(child.size.height, self.margin.vertical_sum()),
            ),
        )
    }
}

fn inflate(extent: Scalar, by: f32) -> Scalar {
    if extent.is_fix() {
        Scalar::fix(extent.clean() + by)
    } else {
        Scalar::soft(extent.clean() + by)
    }
}

impl Shape for Padded {
    fn draw(&self, surface: &mut dyn Surface) {
        self.child.draw(surface);
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        self.child.register(hardware);
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        let child_natural = self.child.adjustment(&NoAdjustment);
        let natural = self.inflated(child_natural);
        if adjustment.is_probe() {
            return natural;
        }
        let own = natural.adjusted(adjustment);
        let x = own.x() + self.margin.left;
        let y = own.y() + self.margin.top;
        let width = (own.width() - self.margin.horizontal_sum()).max(0.0);
        let height = (own.height() - self.margin.vertical_sum()).max(0.0);
        self.child.adjustment(&FnAdjustment::new(
            move |_, _| (x, y),
            move |_, _| (width, height),
        ));
        own
    }
}
