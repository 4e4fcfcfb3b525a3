//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Edge rule: coordinates left of column 0, right of the last column or below the
//! last row read as occupied; rows above the top never do. Collision checks can
//! then treat the walls and the floor like locked cells.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one line-clear pass, in the order they were cleared
pub type ClearedRows = ArrayVec<u8, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns false (and writes nothing) if out of bounds.
    ///
    /// Callers are expected to have validated the coordinates with the collision
    /// detector first; an out-of-range write is a caller bug.
    pub fn set_cell(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy under the edge rule: walls and floor are occupied, the sky is not.
    #[inline]
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.cells[(y as usize) * WIDTH + (x as usize)].is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Empty every cell of row `y`
    pub fn clear_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(None);
    }

    /// Move every row above `from_y` down by one, overwriting row `from_y`.
    /// Row 0 becomes empty.
    pub fn shift_rows_down(&mut self, from_y: usize) {
        if from_y >= HEIGHT {
            return;
        }
        // copy_within handles the overlapping ranges
        for row in (1..=from_y).rev() {
            let src_start = (row - 1) * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(None);
    }

    /// Remove all full rows, scanning bottom to top.
    ///
    /// A cleared row is replaced by the rows above it, so the cursor stays on the
    /// same index until that index no longer holds a full row. Returns the cursor
    /// index of every clear.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = HEIGHT - 1;
        loop {
            if self.is_row_full(y) {
                self.clear_row(y);
                self.shift_rows_down(y);
                cleared.push(y as u8);
                continue;
            }
            if y == 0 {
                break;
            }
            y -= 1;
        }
        cleared
    }

    /// Write `kind` into every filled cell of `shape` placed at (x, y).
    ///
    /// Cells above the top edge are dropped. Returns the number of cells written.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: ShapeKind) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.cells() {
            let (px, py) = (x + dx, y + dy);
            if py < 0 {
                continue;
            }
            debug_assert!(Self::index(px, py).is_some(), "merge out of bounds");
            if self.set_cell(px, py, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export as a grid of shape ids (0 = empty), see [`ShapeKind::id`].
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (row_out, row) in out.iter_mut().zip(self.cells.chunks_exact(WIDTH)) {
            for (dst, cell) in row_out.iter_mut().zip(row) {
                *dst = cell.map_or(0, |kind| kind.id());
            }
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
