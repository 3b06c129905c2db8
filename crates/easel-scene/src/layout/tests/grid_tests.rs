use super::Grid;
use crate::Shape;
use easel_geometry::{Adjustment, Area, FnAdjustment};
use easel_testing::TrackedShape;

fn viewport(width: f32, height: f32) -> impl Adjustment {
    FnAdjustment::new(|x, y| (x, y), move |_, _| (width, height))
}

#[test]
fn cells_split_both_axes() {
    let cells: Vec<TrackedShape> = (0..4)
        .map(|_| TrackedShape::new(Area::soft(0.0, 0.0, 0.0, 0.0)))
        .collect();
    let handles: Vec<_> = cells.iter().map(TrackedShape::committed).collect();

    let mut grid = Grid::new(
        2,
        cells.into_iter().map(|cell| Box::new(cell) as _).collect(),
    );
    grid.adjustment(&viewport(200.0, 100.0));

    let expected = [
        (0.0, 0.0),
        (100.0, 0.0),
        (0.0, 50.0),
        (100.0, 50.0),
    ];
    for (handle, (x, y)) in handles.iter().zip(expected) {
        let area = handle.get();
        assert_eq!((area.x(), area.y()), (x, y));
        assert_eq!(area.width(), 100.0);
        assert_eq!(area.height(), 50.0);
    }
}

#[test]
fn a_short_last_row_gets_the_whole_width() {
    let cells: Vec<TrackedShape> = (0..3)
        .map(|_| TrackedShape::new(Area::soft(0.0, 0.0, 0.0, 0.0)))
        .collect();
    let handles: Vec<_> = cells.iter().map(TrackedShape::committed).collect();

    let mut grid = Grid::new(
        2,
        cells.into_iter().map(|cell| Box::new(cell) as _).collect(),
    );
    grid.adjustment(&viewport(200.0, 100.0));

    // two full cells on the first row, one stretched cell on the second
    assert_eq!(handles[0].get().width(), 100.0);
    assert_eq!(handles[1].get().width(), 100.0);
    assert_eq!(handles[2].get().width(), 200.0);
    assert_eq!(handles[2].get().y(), 50.0);
}

#[test]
fn zero_columns_behave_as_one() {
    let a = TrackedShape::new(Area::soft(0.0, 0.0, 0.0, 0.0));
    let b = TrackedShape::new(Area::soft(0.0, 0.0, 0.0, 0.0));
    let (a_done, b_done) = (a.committed(), b.committed());

    let mut grid = Grid::new(0, vec![Box::new(a), Box::new(b)]);
    grid.adjustment(&viewport(100.0, 100.0));

    assert_eq!(a_done.get().y(), 0.0);
    assert_eq!(b_done.get().y(), 50.0);
    assert_eq!(a_done.get().width(), 100.0);
    assert_eq!(b_done.get().width(), 100.0);
}
