//! Bounding box over committed areas

use crate::{Area, Pos, Size};

/// Folds a set of areas into their bounding box: minimal corner, maximal
/// extent, read from committed values. The result is entirely soft; an
/// empty slice yields the zero area.
pub fn covered(areas: &[Area]) -> Area {
    let mut iter = areas.iter();
    let first = match iter.next() {
        Some(area) => area,
        None => return Area::default(),
    };
    let mut left = first.x();
    let mut top = first.y();
    let mut right = first.x() + first.width();
    let mut bottom = first.y() + first.height();
    for area in iter {
        left = left.min(area.x());
        top = top.min(area.y());
        right = right.max(area.x() + area.width());
        bottom = bottom.max(area.y() + area.height());
    }
    Area::new(Pos::soft(left, top), Size::soft(right - left, bottom - top))
}

#[cfg(test)]
#[path = "tests/covered_tests.rs"]
mod tests;
