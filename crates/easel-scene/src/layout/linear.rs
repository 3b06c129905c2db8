//! The one-dimensional distribution pass behind Row and Column

use crate::{InputHardware, Shape, Surface};
use easel_geometry::{covered, Adjustment, Area, Axis, FnAdjustment, NoAdjustment, Pos, Size};
use smallvec::SmallVec;

/// How the remaining main-axis capacity is handed to soft children.
///
/// Computed once per commit pass, after classification; the degenerate
/// inputs (no soft children, all-zero soft naturals) each get their own
/// variant, so no branch ever divides by zero.
#[derive(Clone, Copy, Debug)]
enum SharePlan {
    /// No soft children; nothing to distribute.
    Identity,
    /// Soft naturals sum to zero: every soft child gets the same slice of
    /// the remainder.
    EqualSplit { share: f32 },
    /// Each soft child keeps its proportion of the soft total.
    Proportional { soft_sum: f32, remaining: f32 },
}

impl SharePlan {
    fn new(capacity: f32, unavailable: f32, soft_sum: f32, soft_count: usize) -> Self {
        if soft_count == 0 {
            SharePlan::Identity
        } else if soft_sum == 0.0 {
            SharePlan::EqualSplit {
                share: (capacity - unavailable) / soft_count as f32,
            }
        } else {
            SharePlan::Proportional {
                soft_sum,
                remaining: (capacity - unavailable).max(0.0),
            }
        }
    }

    fn apply(self, natural: f32) -> f32 {
        match self {
            SharePlan::Identity => natural,
            SharePlan::EqualSplit { share } => share,
            SharePlan::Proportional {
                soft_sum,
                remaining,
            } => natural / soft_sum * remaining,
        }
    }
}

/// Axis-generic container body shared by [`Row`] and [`Column`].
struct Linear {
    axis: Axis,
    children: Vec<Box<dyn Shape>>,
    area: Option<Area>,
}

impl Linear {
    fn new(axis: Axis, area: Option<Area>) -> Self {
        Self {
            axis,
            children: Vec::new(),
            area,
        }
    }

    /// Natural area of an undeclared container: the children's naturals
    /// stacked along the main axis (cursor advances by the non-negative
    /// extent), covered. Its main extent is the sum of the child extents,
    /// its cross extent their maximum; everything stays soft.
    fn stacked_natural(&self, arena: &[Area]) -> Area {
        let mut stacked: SmallVec<[Area; 8]> = SmallVec::with_capacity(arena.len());
        let mut cursor = 0.0;
        for natural in arena {
            let (x, y) = self.axis.pack(cursor, 0.0);
            stacked.push(Area::new(Pos::soft(x, y), natural.size));
            cursor += natural.size.along(self.axis).value().max(0.0);
        }
        covered(&stacked)
    }
}

impl Shape for Linear {
    fn draw(&self, surface: &mut dyn Surface) {
        for child in &self.children {
            child.draw(surface);
        }
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        for child in &self.children {
            child.register(hardware);
        }
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        // One probe per child per pass; everything below reads the arena.
        let mut arena: SmallVec<[Area; 8]> = SmallVec::with_capacity(self.children.len());
        for child in &mut self.children {
            arena.push(child.adjustment(&NoAdjustment));
        }

        let natural = match self.area {
            Some(declared) => declared.natural(),
            None => self.stacked_natural(&arena),
        };
        if adjustment.is_probe() {
            return natural;
        }

        let mut unavailable = 0.0;
        let mut soft_sum = 0.0;
        let mut soft_count = 0usize;
        for natural in &arena {
            let extent = natural.size.along(self.axis);
            if extent.is_fix() {
                unavailable += extent.clean();
            } else {
                soft_sum += extent.clean();
                soft_count += 1;
            }
        }

        let own = natural.adjusted(adjustment);
        if self.area.is_some() {
            self.area = Some(own);
        }

        let capacity = own.size.along(self.axis).value();
        let plan = SharePlan::new(capacity, unavailable, soft_sum, soft_count);
        log::trace!(
            "{:?} distribution: capacity={} unavailable={} soft_sum={} soft_count={} plan={:?}",
            self.axis,
            capacity,
            unavailable,
            soft_sum,
            soft_count,
            plan
        );

        let axis = self.axis;
        let origin_cross = own.pos.along(axis.cross_axis()).value();
        let cross_extent = own.size.along(axis.cross_axis()).value();
        let mut cursor = own.pos.along(axis).value();
        for child in &mut self.children {
            let main_pos = cursor;
            let committed = child.adjustment(&FnAdjustment::new(
                move |_, _| axis.pack(main_pos, origin_cross),
                move |width, height| {
                    let main = plan.apply(axis.main_of(width, height));
                    axis.pack(main, cross_extent)
                },
            ));
            cursor = committed.pos.along(axis).value()
                + committed.size.along(axis).value().max(0.0);
        }

        own
    }
}

/// Stacks children left to right, splitting the width.
pub struct Row {
    inner: Linear,
}

impl Row {
    /// A row without a declared area; it advertises its children's stacked
    /// footprint.
    pub fn new() -> Self {
        Self {
            inner: Linear::new(Axis::Horizontal, None),
        }
    }

    /// A row with a declared area.
    pub fn with_area(area: Area) -> Self {
        Self {
            inner: Linear::new(Axis::Horizontal, Some(area)),
        }
    }

    /// A row with a declared size at a soft origin.
    pub fn with_size(size: Size) -> Self {
        Self::with_area(Area::from_size(size))
    }

    pub fn child(mut self, child: impl Shape + 'static) -> Self {
        self.inner.children.push(Box::new(child));
        self
    }

    pub fn children(mut self, children: Vec<Box<dyn Shape>>) -> Self {
        self.inner.children.extend(children);
        self
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Row {
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

/// Stacks children top to bottom, splitting the height.
pub struct Column {
    inner: Linear,
}

impl Column {
    /// A column without a declared area; it advertises its children's
    /// stacked footprint.
    pub fn new() -> Self {
        Self {
            inner: Linear::new(Axis::Vertical, None),
        }
    }

    /// A column with a declared area.
    pub fn with_area(area: Area) -> Self {
        Self {
            inner: Linear::new(Axis::Vertical, Some(area)),
        }
    }

    /// A column with a declared size at a soft origin.
    pub fn with_size(size: Size) -> Self {
        Self::with_area(Area::from_size(size))
    }

    pub fn child(mut self, child: impl Shape + 'static) -> Self {
        self.inner.children.push(Box::new(child));
        self
    }

    pub fn children(mut self, children: Vec<Box<dyn Shape>>) -> Self {
        self.inner.children.extend(children);
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Column {
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

#[cfg(test)]
#[path = "tests/share_plan_tests.rs"]
mod tests;
