use crate::Canvas;

/// A logical position on the splash screen, specified by column `x` and row `y`.
///
/// Logical coordinates start at [`Canvas::ORIGIN`] on both axes, so the
/// top-left cell of the grid is `(2, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub x: i32,
    pub y: i32,
}

impl CellPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position `dx` columns to the right, on the same row.
    pub const fn offset_x(self, dx: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y)
    }

    /// Maps the position to a 0-based `(row, col)` index into the grid, or
    /// `None` if it falls outside of it.
    pub fn to_grid_index(self) -> Option<(usize, usize)> {
        let col = Self::axis_index(self.x, Canvas::WIDTH)?;
        let row = Self::axis_index(self.y, Canvas::HEIGHT)?;
        Some((row, col))
    }

    pub(crate) fn row_index(self) -> Option<usize> {
        Self::axis_index(self.y, Canvas::HEIGHT)
    }

    pub(crate) fn col_index(self) -> Option<usize> {
        Self::axis_index(self.x, Canvas::WIDTH)
    }

    fn axis_index(coordinate: i32, len: usize) -> Option<usize> {
        coordinate
            .checked_sub(Canvas::ORIGIN)
            .and_then(|idx| usize::try_from(idx).ok())
            .filter(|&idx| idx < len)
    }
}

impl From<(i32, i32)> for CellPosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_first_cell() {
        assert_eq!(CellPosition::new(2, 2).to_grid_index(), Some((0, 0)));
        assert_eq!(CellPosition::new(39, 25).to_grid_index(), Some((23, 37)));
    }

    #[test]
    fn test_outside_grid() {
        assert_eq!(CellPosition::new(1, 2).to_grid_index(), None);
        assert_eq!(CellPosition::new(2, 1).to_grid_index(), None);
        assert_eq!(CellPosition::new(40, 2).to_grid_index(), None);
        assert_eq!(CellPosition::new(2, 26).to_grid_index(), None);
        assert_eq!(CellPosition::new(i32::MIN, 2).to_grid_index(), None);
        assert_eq!(CellPosition::new(i32::MAX, 2).to_grid_index(), None);
    }

    #[test]
    fn test_offset_x() {
        let pos = CellPosition::new(2, 6).offset_x(5);
        assert_eq!(pos, CellPosition::new(7, 6));
    }
}
