//! Shape catalog, rotation and movement tests

use blockfall::core::movement::{drop_distance, rotate, shift, soft_drop};
use blockfall::core::{get_shape, Board, DropOutcome, Piece, Shape};
use blockfall::types::{ShapeKind, SPAWN_X, SPAWN_Y};

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    shape.cells().collect()
}

#[test]
fn test_catalog_geometry() {
    let expected: [(ShapeKind, u8, u8); 7] = [
        (ShapeKind::I, 4, 1),
        (ShapeKind::O, 2, 2),
        (ShapeKind::T, 3, 2),
        (ShapeKind::L, 3, 2),
        (ShapeKind::J, 3, 2),
        (ShapeKind::S, 3, 2),
        (ShapeKind::Z, 3, 2),
    ];
    for (kind, w, h) in expected {
        let shape = get_shape(kind);
        assert_eq!((shape.width(), shape.height()), (w, h), "{:?}", kind);
        assert_eq!(shape.cells().count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_catalog_colors() {
    let hex: Vec<String> = ShapeKind::ALL.iter().map(|k| k.color().to_hex()).collect();
    assert_eq!(
        hex,
        [
            "#00ffff", "#ffff00", "#ff00ff", "#ffa500", "#0000ff", "#00ff00", "#ff0000"
        ]
    );
}

#[test]
fn test_rotate_s_and_z_clockwise() {
    // S: XX. / .XX  ->  .X / XX / X.
    let s = get_shape(ShapeKind::S).rotated_cw();
    assert_eq!((s.width(), s.height()), (2, 3));
    assert_eq!(cells(&s), vec![(1, 0), (0, 1), (1, 1), (0, 2)]);

    // Z: .XX / XX.  ->  X. / XX / .X
    let z = get_shape(ShapeKind::Z).rotated_cw();
    assert_eq!(cells(&z), vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_o_rotation_is_noop() {
    let o = get_shape(ShapeKind::O);
    assert_eq!(o.rotated_cw(), o);
}

#[test]
fn test_four_rotations_identity_for_every_kind() {
    for kind in ShapeKind::ALL {
        let shape = get_shape(kind);
        let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_spawn_position() {
    for kind in ShapeKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!((piece.x, piece.y), (4, 0));
    }
}

#[test]
fn test_shift_moves_by_exactly_one_or_not_at_all() {
    let board = Board::new();
    for kind in ShapeKind::ALL {
        let mut piece = Piece::spawn(kind);
        loop {
            let before = piece.x;
            if !shift(&board, &mut piece, 1) {
                assert_eq!(piece.x, before);
                break;
            }
            assert_eq!(piece.x, before + 1);
        }
        // Flush against the right wall.
        assert_eq!(piece.x + piece.shape.width() as i8, 10, "{:?}", kind);
    }
}

#[test]
fn test_i_piece_left_five_times() {
    let board = Board::new();
    let mut piece = Piece::spawn(ShapeKind::I);
    let moved = (0..5).filter(|_| shift(&board, &mut piece, -1)).count();
    assert_eq!(moved, 4);
    assert_eq!(piece.x, 0);
}

#[test]
fn test_shift_blocked_by_locked_cell() {
    let mut board = Board::new();
    board.set_cell(3, 0, Some(ShapeKind::T));
    let mut piece = Piece::spawn(ShapeKind::O);
    assert!(!shift(&board, &mut piece, -1));
    assert_eq!(piece.x, 4);
}

#[test]
fn test_rotate_rejected_without_kick() {
    let board = Board::new();
    // Vertical I against the right wall cannot turn horizontal.
    let mut piece = Piece::at(ShapeKind::I, 9, 5);
    piece.shape = piece.shape.rotated_cw();
    let before = piece;
    assert!(!rotate(&board, &mut piece));
    assert_eq!(piece, before);
}

#[test]
fn test_soft_drop_until_lock() {
    let board = Board::new();
    let mut piece = Piece::spawn(ShapeKind::O);
    let mut moves = 0;
    while soft_drop(&board, &mut piece) == DropOutcome::Moved {
        moves += 1;
    }
    assert_eq!(moves, 18);
    assert_eq!(piece.y, 18);
}

#[test]
fn test_drop_distance_stops_on_stack() {
    let mut board = Board::new();
    board.set_cell(5, 12, Some(ShapeKind::L));
    let piece = Piece::spawn(ShapeKind::T);
    // T cells: (4..=6, 0) and (5, 1); the stem lands on row 11.
    assert_eq!(drop_distance(&board, &piece), 10);
}
