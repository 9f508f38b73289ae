use rayon::prelude::*;

use amazons_core::{perft, Board, Move};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

#[test]
fn test_perft_depth_zero_and_one() {
    let board = Board::new();
    assert_eq!(perft(&board, 0), 1);
    assert_eq!(perft(&board, 1), 2176);
}

#[test]
fn test_perft_leaves_board_untouched() {
    let mut board = Board::new();
    board.make_move("d1-d7(g7)".parse().unwrap()).unwrap();
    let before = board.clone();
    let from_here = perft(&board, 1);
    assert_eq!(board, before);
    assert_eq!(from_here, board.legal_moves().count() as u64);
}

#[test]
fn test_perft_depth_two_on_cramped_position() {
    let diagram = "
   S S S S S S S S S S
   S - - S S S S S S S
   S W - S S S S S S S
   S S S S S S S S S S
   S S S S S S S S S S
   S S S S S S S S S S
   S S S S S S S S S S
   S S S S S S S S B S
   S S S S S S S S - S
   S S S S S S S S S S
";
    let board = Board::from_diagram(diagram, amazons_core::Color::White).unwrap();
    // White on b8 can step to c8, b9 or c9 and throw back along any open line.
    let white_moves: Vec<Move> = board.legal_moves().collect();
    let expected: u64 = white_moves
        .iter()
        .map(|&mv| {
            let mut child = board.clone();
            child.make_move(mv).unwrap();
            child.legal_moves().count() as u64
        })
        .sum();
    assert_eq!(perft(&board, 2), expected);
    // Black shuttles between i3 and i2 whatever White does: one move each time.
    assert_eq!(expected, white_moves.len() as u64);
}

#[test]
fn test_perft_depth_two_full_board() {
    if std::env::var(FULL_PERFT_ENV).is_err() {
        eprintln!("skipping full-board perft; set {FULL_PERFT_ENV}=1 to run it");
        return;
    }
    let board = Board::new();
    let roots: Vec<Move> = board.legal_moves().collect();
    let total: u64 = roots
        .par_iter()
        .map(|&mv| {
            // The winner cache keeps `Board` off shared references across threads.
            let mut child = Board::new();
            child.make_move(mv).unwrap();
            perft(&child, 1)
        })
        .sum();
    assert_eq!(total, 4_307_152);
    assert_eq!(perft(&board, 2), total);
}
