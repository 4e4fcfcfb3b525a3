//! Pieces module - shape catalog, shape matrices and the active piece
//!
//! A [`Shape`] is a small binary matrix (at most 4x4) describing which cells of
//! a piece's bounding box are filled. Catalog shapes never change; a [`Piece`]
//! carries its own, possibly rotated, copy.
//!
//! Rotation is a plain matrix operation on the bounding box (transpose, then
//! reverse every row). There is no pivot cell and no kick table.

use serde::Serialize;

use crate::types::{ShapeKind, SPAWN_X, SPAWN_Y};

/// Largest bounding box dimension of any catalog shape
pub const MAX_SHAPE_DIM: usize = 4;

/// Binary occupancy matrix of a piece's bounding box.
///
/// Cells outside `width x height` are always empty, so two shapes with the same
/// occupied cells compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics (at compile time for the catalog) on empty, ragged or oversized input.
    pub const fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(height > 0 && height <= MAX_SHAPE_DIM);
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_DIM);

        let mut out = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < height {
            assert!(rows[y].len() == width);
            let mut x = 0;
            while x < width {
                out[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }

        Self {
            width: width as u8,
            height: height as u8,
            rows: out,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the bounding box cell at (x, y) is filled. Outside the box is empty.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.rows[y as usize][x as usize]
    }

    /// Offsets of the filled cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let shape = *self;
        (0..shape.height).flat_map(move |y| {
            (0..shape.width)
                .filter(move |&x| shape.rows[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// 90° clockwise rotation of the bounding box: transpose, then reverse each row.
    pub fn rotated_cw(&self) -> Shape {
        let mut rows = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let h = self.height as usize;
        for (i, row) in rows.iter_mut().enumerate().take(self.width as usize) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - j][i];
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            rows,
        }
    }
}

const I_SHAPE: Shape = Shape::from_rows(&[&[1, 1, 1, 1]]);
const O_SHAPE: Shape = Shape::from_rows(&[&[1, 1], &[1, 1]]);
const T_SHAPE: Shape = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]);
const L_SHAPE: Shape = Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]);
const J_SHAPE: Shape = Shape::from_rows(&[&[1, 1, 1], &[0, 0, 1]]);
const S_SHAPE: Shape = Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]);
const Z_SHAPE: Shape = Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]);

/// Catalog geometry for a piece kind (spawn orientation)
pub fn get_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::I => I_SHAPE,
        ShapeKind::O => O_SHAPE,
        ShapeKind::T => T_SHAPE,
        ShapeKind::L => L_SHAPE,
        ShapeKind::J => J_SHAPE,
        ShapeKind::S => S_SHAPE,
        ShapeKind::Z => Z_SHAPE,
    }
}

/// A piece on (or about to enter) the board.
///
/// `x`/`y` locate the top-left cell of the shape's bounding box in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece of `kind` at the spawn position
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// New piece of `kind` in catalog orientation at (x, y)
    pub fn at(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape.cells().map(move |(dx, dy)| (x + dx, y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_cells_per_shape() {
        for kind in ShapeKind::ALL {
            assert_eq!(get_shape(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_catalog_dimensions() {
        assert_eq!((I_SHAPE.width(), I_SHAPE.height()), (4, 1));
        assert_eq!((O_SHAPE.width(), O_SHAPE.height()), (2, 2));
        for shape in [T_SHAPE, L_SHAPE, J_SHAPE, S_SHAPE, Z_SHAPE] {
            assert_eq!((shape.width(), shape.height()), (3, 2));
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // 111     01
        // 010  -> 11
        //         01
        let rotated = T_SHAPE.rotated_cw();
        assert_eq!(
            rotated,
            Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]])
        );
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let vertical = I_SHAPE.rotated_cw();
        assert_eq!((vertical.width(), vertical.height()), (1, 4));
        assert_eq!(
            vertical.cells().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (0, 2), (0, 3)]
        );
    }

    #[test]
    fn test_rotate_l_clockwise() {
        // 111     11
        // 100  -> 01
        //         01
        assert_eq!(
            L_SHAPE.rotated_cw(),
            Shape::from_rows(&[&[1, 1], &[0, 1], &[0, 1]])
        );
    }

    #[test]
    fn test_four_rotations_is_identity() {
        for kind in ShapeKind::ALL {
            let shape = get_shape(kind);
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_is_filled_outside_box() {
        assert!(O_SHAPE.is_filled(1, 1));
        assert!(!O_SHAPE.is_filled(2, 0));
        assert!(!O_SHAPE.is_filled(0, 2));
    }

    #[test]
    fn test_piece_spawn_and_cells() {
        let piece = Piece::spawn(ShapeKind::O);
        assert_eq!((piece.x, piece.y), (4, 0));
        assert_eq!(
            piece.cells().collect::<Vec<_>>(),
            vec![(4, 0), (5, 0), (4, 1), (5, 1)]
        );
    }
}
