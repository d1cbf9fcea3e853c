//! Terminal-state suite loaded from `data/positions.json`.

use serde::Deserialize;

use chess_ai::board::{Board, GameStatus};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum ExpectedStatus {
    Checkmate,
    Stalemate,
    Ongoing,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    status: ExpectedStatus,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn terminal_status_suite() {
    for position in load().positions {
        let (board, side) = Board::parse_fen(&position.fen).expect(&position.name);
        let status = board.status(side);
        match position.status {
            ExpectedStatus::Checkmate => {
                assert_eq!(status, GameStatus::Checkmate(side), "{}", position.name);
                assert!(board.is_checkmate(side), "{}", position.name);
                assert!(!board.is_stalemate(side), "{}", position.name);
            }
            ExpectedStatus::Stalemate => {
                assert_eq!(status, GameStatus::Stalemate, "{}", position.name);
                assert!(board.is_stalemate(side), "{}", position.name);
                assert!(!board.is_checkmate(side), "{}", position.name);
            }
            ExpectedStatus::Ongoing => {
                assert_eq!(status, GameStatus::Ongoing, "{}", position.name);
                assert!(board.has_any_legal_move(side), "{}", position.name);
            }
        }
    }
}

#[test]
fn suite_round_trips_through_placement() {
    for position in load().positions {
        let (board, side) = Board::parse_fen(&position.fen).unwrap();
        let placement = position.fen.split_whitespace().next().unwrap();
        assert_eq!(board.placement(), placement, "{}", position.name);
        assert_eq!(Board::parse_fen(&board.to_fen(side)).unwrap(), (board, side));
    }
}
