//! Movement and rotation of the active piece.
//!
//! Every operation is tentative: it is applied, checked against the board and
//! rolled back on collision. A rejected move leaves the piece untouched.

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::Piece;

/// Result of a one-row drop attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The row below is blocked; the piece stays put and must lock
    Lock,
}

/// Shift the piece horizontally by `dx`. Returns true if it moved.
pub fn shift(board: &Board, piece: &mut Piece, dx: i8) -> bool {
    let prev_x = piece.x;
    piece.x += dx;
    if collides(board, &piece.shape, piece.x, piece.y) {
        piece.x = prev_x;
        return false;
    }
    true
}

/// Rotate the piece 90° clockwise in place. No wall kicks.
/// Returns true if the rotated shape fits at the current position.
pub fn rotate(board: &Board, piece: &mut Piece) -> bool {
    let rotated = piece.shape.rotated_cw();
    if collides(board, &rotated, piece.x, piece.y) {
        return false;
    }
    piece.shape = rotated;
    true
}

/// Move the piece down one row, or report that it has to lock.
pub fn soft_drop(board: &Board, piece: &mut Piece) -> DropOutcome {
    piece.y += 1;
    if collides(board, &piece.shape, piece.x, piece.y) {
        piece.y -= 1;
        return DropOutcome::Lock;
    }
    DropOutcome::Moved
}

/// How many rows the piece can fall before it would lock.
pub fn drop_distance(board: &Board, piece: &Piece) -> i8 {
    let mut distance = 0;
    while !collides(board, &piece.shape, piece.x, piece.y + distance + 1) {
        distance += 1;
    }
    distance
}
