//! Two-dimensional composition of the linear pass

use super::{Column, Row};
use crate::{InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area};

/// A grid of cells, built as a column of rows.
///
/// There is no second distribution algorithm here: cells are chunked into
/// row groups of `columns` and the linear pass runs once per nesting level.
/// Zero columns is treated as one.
pub struct Grid {
    column: Column,
}

impl Grid {
    pub fn new(columns: usize, cells: Vec<Box<dyn Shape>>) -> Self {
        Self::assemble(Column::new(), columns, cells)
    }

    /// A grid with a declared area.
    pub fn with_area(area: Area, columns: usize, cells: Vec<Box<dyn Shape>>) -> Self {
        Self::assemble(Column::with_area(area), columns, cells)
    }

    fn assemble(mut column: Column, columns: usize, cells: Vec<Box<dyn Shape>>) -> Self {
        let per_row = columns.max(1);
        let mut cells = cells.into_iter();
        loop {
            let group: Vec<Box<dyn Shape>> = cells.by_ref().take(per_row).collect();
            if group.is_empty() {
                break;
            }
            column = column.child(Row::new().children(group));
        }
        Self { column }
    }
}

impl Shape for Grid {
    fn draw(&self, surface: &mut dyn Surface) {
        self.column.draw(surface);
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        self.column.register(hardware);
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        self.column.adjustment(adjustment)
    }
}
