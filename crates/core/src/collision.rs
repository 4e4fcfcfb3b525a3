//! Collision detection between a shape placement and the board.

use crate::board::Board;
use crate::pieces::Shape;

/// True if any filled cell of `shape` placed at (x, y) lands on a wall, the
/// floor or a locked cell. Cells above the top row never collide.
#[inline]
pub fn collides(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape
        .cells()
        .any(|(dx, dy)| board.is_occupied(x + dx, y + dy))
}
