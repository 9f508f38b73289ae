use super::*;
use amazons_core::Move;

const CRAMPED: &str = "
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

const SEALED: &str = "
   S S S S S S S S S S
   S W S S S S S S S S
   S S S S S S S S S S
   S S S S S S S S S S
   S S S S S S S S S S
   S S S S S S S S S S
   S S S S S S S S S S
   S S S S S S S S B S
   S S S S S S S S - S
   S S S S S S S S S S
";

fn seeded(side: Color, seed: u64) -> MinimaxEngine {
    MinimaxEngine::with_rng(side, StdRng::seed_from_u64(seed))
}

#[test]
fn test_engine_identity() {
    let engine = MinimaxEngine::new(Color::Black);
    assert_eq!(engine.side(), Color::Black);
    assert_eq!(engine.name(), "Minimax v1.0");
    assert_eq!(engine.config(), &SearchConfig::default());
}

#[test]
fn test_opening_is_random_but_reproducible() {
    let board = Board::new();
    let mut engine = seeded(Color::White, 7);
    let mut replay = StdRng::seed_from_u64(7);

    let result = engine.search(&board);
    assert!(result.opening);
    assert_eq!(result.depth, 0);

    let ordinal = replay.gen_range(0..100u32) as usize;
    assert_eq!(result.best_move, board.legal_moves_for(Color::White).nth(ordinal));

    let mut again = seeded(Color::White, 7);
    assert_eq!(again.choose_move(&board), result.best_move);
}

#[test]
fn test_opening_ends_after_configured_moves() {
    let mut board = Board::from_diagram(CRAMPED, Color::Black).unwrap();
    let mut engine = seeded(Color::Black, 3).with_config(SearchConfig {
        opening_moves: 0,
        ..SearchConfig::default()
    });

    let result = engine.search(&board);
    assert!(!result.opening);
    assert_eq!(result.depth, 1);
    assert_eq!(result.nodes, 1);
    assert_eq!(result.best_move, Some("i3-i2(i3)".parse::<Move>().unwrap()));

    board.make_move(result.best_move.unwrap()).unwrap();
    assert_eq!(board.num_moves(), 1);
}

#[test]
fn test_engine_does_not_touch_the_board() {
    let board = Board::from_diagram(CRAMPED, Color::White).unwrap();
    let before = board.clone();
    let mut engine = seeded(Color::White, 11).with_config(SearchConfig {
        opening_moves: 0,
        max_depth: Some(2),
        ..SearchConfig::default()
    });
    let result = engine.search(&board);
    assert!(result.best_move.is_some());
    assert!(board.is_legal(result.best_move.unwrap()));
    assert_eq!(board, before);
}

#[test]
fn test_no_move_without_legal_moves() {
    let board = Board::from_diagram(SEALED, Color::White).unwrap();
    assert_eq!(board.winner(), Some(Color::Black));

    let mut opening = seeded(Color::White, 5);
    assert_eq!(opening.choose_move(&board), None);

    let mut searching = seeded(Color::White, 5).with_config(SearchConfig {
        opening_moves: 0,
        ..SearchConfig::default()
    });
    let result = searching.search(&board);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -WINNING_VALUE);
}

#[test]
fn test_new_game_resets_statistics() {
    let board = Board::from_diagram(CRAMPED, Color::White).unwrap();
    let mut engine = seeded(Color::White, 2).with_config(SearchConfig {
        opening_moves: 0,
        ..SearchConfig::default()
    });
    engine.search(&board);
    assert!(engine.nodes > 0);
    engine.new_game();
    assert_eq!(engine.nodes, 0);
}
