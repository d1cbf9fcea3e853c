//! Pseudo-legal move generation tests.

use super::mv;
use crate::board::{Board, BoardBuilder, Color, Piece, Square};

fn sorted_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut squares: Vec<Square> = board.pseudo_moves(from).destinations().collect();
    squares.sort();
    squares
}

#[test]
fn rook_in_corner_on_empty_board_has_fourteen_moves() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .build();
    let dests = sorted_destinations(&board, Square(0, 0));
    assert_eq!(dests.len(), 14);
    assert!(dests.iter().all(|sq| (sq.row() == 0) ^ (sq.col() == 0)));
}

#[test]
fn knight_in_center_has_eight_moves() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::Black, Piece::Knight)
        .build();
    let expected = vec![
        Square(2, 3),
        Square(2, 5),
        Square(3, 2),
        Square(3, 6),
        Square(5, 2),
        Square(5, 6),
        Square(6, 3),
        Square(6, 5),
    ];
    assert_eq!(sorted_destinations(&board, Square(4, 4)), expected);
}

#[test]
fn empty_square_has_no_moves() {
    let board = Board::new();
    assert!(board.pseudo_moves(Square(4, 4)).is_empty());
}

#[test]
fn ray_stops_at_first_piece() {
    // Rook d4, own pawn d6, enemy knight g4.
    let board = BoardBuilder::new()
        .piece(Square(4, 3), Color::White, Piece::Rook)
        .piece(Square(2, 3), Color::White, Piece::Pawn)
        .piece(Square(4, 6), Color::Black, Piece::Knight)
        .build();
    let dests = sorted_destinations(&board, Square(4, 3));
    assert!(dests.contains(&Square(3, 3)));
    assert!(!dests.contains(&Square(2, 3)), "own piece is not a target");
    assert!(!dests.contains(&Square(1, 3)), "ray is blocked");
    assert!(dests.contains(&Square(4, 6)), "enemy piece can be captured");
    assert!(!dests.contains(&Square(4, 7)), "ray ends at capture");
    // d5, e4, f4, g4, c4, b4, a4, d3, d2, d1
    assert_eq!(dests.len(), 10);
}

#[test]
fn queen_combines_rook_and_bishop() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::Queen)
        .build();
    assert_eq!(board.pseudo_moves(Square(4, 4)).len(), 27);
}

#[test]
fn king_steps_once() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(6, 4), Color::White, Piece::Pawn)
        .build();
    let dests = sorted_destinations(&board, Square(7, 4));
    assert_eq!(dests, vec![Square(6, 3), Square(6, 5), Square(7, 3), Square(7, 5)]);
}

#[test]
fn pawn_pushes_and_captures() {
    let board = Board::new();
    let e2 = sorted_destinations(&board, "e2".parse().unwrap());
    assert_eq!(e2, vec!["e4".parse().unwrap(), "e3".parse().unwrap()]);

    let e7 = sorted_destinations(&board, "e7".parse().unwrap());
    assert_eq!(e7, vec!["e6".parse().unwrap(), "e5".parse().unwrap()]);

    // White pawn e4 facing black pawns on d5 and e5.
    let board = Board::from_fen("4k3/8/8/3pp3/4P3/8/8/4K3");
    let dests = sorted_destinations(&board, "e4".parse().unwrap());
    assert_eq!(dests, vec!["d5".parse().unwrap()]);
}

#[test]
fn pawn_double_push_needs_clear_path() {
    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3");
    assert!(board.pseudo_moves("e2".parse().unwrap()).is_empty());
    let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3");
    let dests = sorted_destinations(&board, "e2".parse().unwrap());
    assert_eq!(dests, vec!["e3".parse().unwrap()]);
}

#[test]
fn pseudo_moves_ignore_self_check() {
    // White bishop e2 is pinned by the rook on e8 but still generates moves.
    let board = Board::from_fen("4r1k1/8/8/8/8/8/4B3/4K3");
    assert!(!board.pseudo_moves("e2".parse().unwrap()).is_empty());
    assert!(board.legal_moves("e2".parse().unwrap()).is_empty());
}

#[test]
fn initial_side_aggregate() {
    let board = Board::new();
    for color in Color::BOTH {
        assert_eq!(board.pseudo_moves_for_side(color).len(), 20);
    }
    assert!(board
        .pseudo_moves_for_side(Color::White)
        .contains(mv("g1f3")));
}
