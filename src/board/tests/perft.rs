//! Perft (performance test) for move generation correctness.
//!
//! Reference counts are only used where castling, en passant and
//! under-promotion cannot occur within the tested depth.

use crate::board::Board;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w",
        depths: &[(1, 14), (2, 191)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w",
        depths: &[(1, 46), (2, 2079)],
    },
];

#[test]
fn perft_reference_counts() {
    for pos in TEST_POSITIONS {
        let (board, side) = Board::parse_fen(pos.fen).unwrap();
        for &(depth, expected) in pos.depths {
            assert_eq!(
                board.perft(side, depth),
                expected,
                "{} depth {depth}",
                pos.name
            );
        }
    }
}

#[test]
#[ignore]
fn perft_initial_depth_four() {
    assert_eq!(Board::new().perft(crate::board::Color::White, 4), 197_281);
}
