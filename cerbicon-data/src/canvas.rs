use crate::{CellPosition, Error};

/// The in-memory character grid of the splash screen.
///
/// Each cell holds one byte: `0` for a cell that was never drawn, otherwise
/// the ASCII character or platform glyph code written into it. Cells are
/// addressed by logical coordinates starting at [`Canvas::ORIGIN`]; every
/// write is bounds checked.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: [[u8; Canvas::WIDTH]; Canvas::HEIGHT],
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let written = self
            .cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Self::UNSET)
            .count();

        f.debug_struct("Canvas")
            .field("width", &Self::WIDTH)
            .field("height", &Self::HEIGHT)
            .field("written_cells", &written)
            .finish()
    }
}

impl Canvas {
    /// Number of columns.
    pub const WIDTH: usize = 38;
    /// Number of rows.
    pub const HEIGHT: usize = 24;
    /// Logical coordinate of the first row and column.
    pub const ORIGIN: i32 = 2;
    /// Value of a cell that has not been drawn.
    pub const UNSET: u8 = 0;

    /// Creates an empty canvas.
    pub const fn new() -> Self {
        Self { cells: [[Self::UNSET; Self::WIDTH]; Self::HEIGHT] }
    }

    /// Writes `token` into the cell at logical position `(x, y)`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCoordinate`] if the position lies outside the
    /// grid; the canvas is left untouched.
    pub fn set_cell(&mut self, x: i32, y: i32, token: u8) -> Result<(), Error> {
        let (row, col) = CellPosition::new(x, y)
            .to_grid_index()
            .ok_or_else(|| Error::invalid_coordinate(x, y))?;

        self.cells[row][col] = token;
        Ok(())
    }

    /// Returns the byte stored at logical position `(x, y)`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCoordinate`] if the position lies outside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Result<u8, Error> {
        CellPosition::new(x, y)
            .to_grid_index()
            .map(|(row, col)| self.cells[row][col])
            .ok_or_else(|| Error::invalid_coordinate(x, y))
    }

    /// Writes the bytes of `text` as a horizontal run starting at `(x, y)`.
    ///
    /// Byte `i` lands in column `x + i`. Bytes whose column falls outside
    /// the grid are dropped, so `x` may start left of the grid and `text`
    /// may run past its right edge. The row is checked before anything is
    /// written.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCoordinate`] if row `y` lies outside the grid,
    /// even when every byte would have been clipped.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), Error> {
        let start = CellPosition::new(x, y);
        let row = start
            .row_index()
            .ok_or_else(|| Error::invalid_coordinate(x, y))?;

        for (i, byte) in text.bytes().enumerate() {
            let dx = i32::try_from(i).unwrap_or(i32::MAX);
            if let Some(col) = start.offset_x(dx).col_index() {
                self.cells[row][col] = byte;
            }
        }

        Ok(())
    }

    /// Iterates over the grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8; Canvas::WIDTH]> {
        self.cells.iter()
    }

    /// Returns true if no cell has been written.
    pub fn is_blank(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&cell| cell == Self::UNSET)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
