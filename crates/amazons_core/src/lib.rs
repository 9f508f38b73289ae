pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every automated Amazons player
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The move chosen (None only if the side has no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen line, positive when it favours White
    pub score: i32,
    /// Search depth used (0 when the move was picked without searching)
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
    /// Whether the move came from the random opening policy
    pub opening: bool,
}

/// Trait that all Amazons players must implement.
///
/// A player is bound to one side and never mutates the board it is given;
/// the caller applies the returned move itself.
pub trait Engine: Send {
    /// Pick a move for this engine's side in the given position.
    fn search(&mut self, board: &Board) -> SearchResult;

    /// Shorthand for the move part of [`Engine::search`].
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// The side this engine plays.
    fn side(&self) -> Color;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
