//! Minimax Amazons Player
//!
//! Plays a few random opening moves, then searches with minimax and
//! alpha-beta pruning over a mobility evaluation. The search deepens
//! logarithmically as the board fills up with spears.

mod config;
mod eval;
mod search;

use amazons_core::{Board, Color, Engine, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

pub use config::{ConfigError, SearchConfig};
pub use eval::{evaluate, INFINITY, WINNING_VALUE};
pub use search::{
    alpha_beta, minimax, pick_best_move, pick_best_move_exhaustive, random_opening_move, Role,
};

/// Minimax player bound to one side.
///
/// The random source is only used for the opening; seed it through
/// [`MinimaxEngine::with_rng`] for reproducible games.
#[derive(Debug, Clone)]
pub struct MinimaxEngine<R = StdRng> {
    side: Color,
    rng: R,
    config: SearchConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine<StdRng> {
    pub fn new(side: Color) -> Self {
        Self::with_rng(side, StdRng::from_entropy())
    }
}

impl<R: Rng> MinimaxEngine<R> {
    pub fn with_rng(side: Color, rng: R) -> Self {
        Self {
            side,
            rng,
            config: SearchConfig::default(),
            nodes: 0,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<R: Rng + Send> Engine for MinimaxEngine<R> {
    fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;

        if board.turn() != self.side {
            warn!(side = %self.side, turn = %board.turn(), "asked to move out of turn");
        }

        if board.num_moves() < self.config.opening_moves {
            let best_move =
                random_opening_move(board, self.side, &mut self.rng, self.config.opening_choices);
            trace!(?best_move, moves = board.num_moves(), "opening move");
            return SearchResult {
                best_move,
                score: 0,
                depth: 0,
                nodes: 0,
                opening: true,
            };
        }

        let depth = self.config.depth_for(board.num_moves());
        let (best_move, score) =
            match search::pick_best_move(board, depth, Role::of(self.side), &mut self.nodes) {
                Some((mv, score)) => (Some(mv), score),
                None => (board.legal_moves().next(), evaluate(board)),
            };

        debug!(
            side = %self.side,
            depth,
            nodes = self.nodes,
            score,
            ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            opening: false,
        }
    }

    fn side(&self) -> Color {
        self.side
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
