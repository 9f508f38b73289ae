//! Minimax search with alpha-beta pruning
//!
//! White is always the maximizing side and Black the minimizing one, so scores
//! mean the same thing at every ply. Each explored move is played on a fresh
//! copy of the board; the searched position itself is never touched.

use amazons_core::{Board, Color, Move};
use rand::Rng;
use tracing::warn;

use crate::eval::{evaluate, INFINITY};

/// Which way a node's score is optimised
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    /// White maximizes, Black minimizes.
    pub fn of(side: Color) -> Role {
        match side {
            Color::White => Role::Maximizer,
            Color::Black => Role::Minimizer,
        }
    }

    pub fn flip(self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    /// True iff `score` is strictly better than `best` for this role.
    pub fn improves(self, score: i32, best: i32) -> bool {
        match self {
            Role::Maximizer => score > best,
            Role::Minimizer => score < best,
        }
    }
}

/// Picks a move for the opening: the move at a random ordinal in
/// `0..choices` of `side`'s legal moves, or the last move if there are fewer.
pub fn random_opening_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    rng: &mut R,
    choices: u32,
) -> Option<Move> {
    let pick = rng.gen_range(0..choices.max(1)) as usize;
    board.legal_moves_for(side).take(pick + 1).last()
}

/// Searches the position with alpha-beta pruning and returns the best move with its score.
///
/// # Arguments
/// * `board` - The position to search; the side to move plays `role`
/// * `depth` - Search depth in plies (at least one ply is always searched)
/// * `nodes` - Counter for positions visited (for statistics)
///
/// # Returns
/// The first move reaching the best score, or `None` if there are no legal moves
pub fn pick_best_move(board: &Board, depth: u8, role: Role, nodes: &mut u64) -> Option<(Move, i32)> {
    search_root(board, depth, role, nodes, true)
}

/// Same as [`pick_best_move`] but visits the full tree without pruning.
pub fn pick_best_move_exhaustive(
    board: &Board,
    depth: u8,
    role: Role,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    search_root(board, depth, role, nodes, false)
}

fn search_root(
    board: &Board,
    depth: u8,
    role: Role,
    nodes: &mut u64,
    prune: bool,
) -> Option<(Move, i32)> {
    let depth = depth.max(1);
    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;

    for mv in board.legal_moves() {
        let Some(child) = child_after(board, mv) else {
            continue;
        };
        *nodes += 1;

        let score = if prune {
            alpha_beta(&child, depth - 1, role.flip(), alpha, beta, nodes)
        } else {
            minimax(&child, depth - 1, role.flip(), nodes)
        };

        // Ties keep the earlier move.
        let better = match best {
            None => true,
            Some((_, best_score)) => role.improves(score, best_score),
        };
        if better {
            best = Some((mv, score));
        }

        match role {
            Role::Maximizer => alpha = alpha.max(score),
            Role::Minimizer => beta = beta.min(score),
        }
    }

    best
}

/// Recursive minimax search with alpha-beta pruning.
///
/// Leaves (depth 0 or a decided game) return the static evaluation.
pub fn alpha_beta(
    board: &Board,
    depth: u8,
    role: Role,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 || board.winner().is_some() {
        return evaluate(board);
    }

    let mut best = match role {
        Role::Maximizer => -INFINITY,
        Role::Minimizer => INFINITY,
    };

    for mv in board.legal_moves() {
        let Some(child) = child_after(board, mv) else {
            continue;
        };
        *nodes += 1;

        let score = alpha_beta(&child, depth - 1, role.flip(), alpha, beta, nodes);
        match role {
            Role::Maximizer => {
                best = best.max(score);
                alpha = alpha.max(score);
            }
            Role::Minimizer => {
                best = best.min(score);
                beta = beta.min(score);
            }
        }
        if beta <= alpha {
            break; // Cutoff
        }
    }

    best
}

/// Plain minimax over the whole tree, the reference for [`alpha_beta`].
pub fn minimax(board: &Board, depth: u8, role: Role, nodes: &mut u64) -> i32 {
    if depth == 0 || board.winner().is_some() {
        return evaluate(board);
    }

    let mut best = match role {
        Role::Maximizer => -INFINITY,
        Role::Minimizer => INFINITY,
    };

    for mv in board.legal_moves() {
        let Some(child) = child_after(board, mv) else {
            continue;
        };
        *nodes += 1;

        let score = minimax(&child, depth - 1, role.flip(), nodes);
        if role.improves(score, best) {
            best = score;
        }
    }

    best
}

fn child_after(board: &Board, mv: Move) -> Option<Board> {
    let mut child = board.clone();
    match child.make_move(mv) {
        Ok(()) => Some(child),
        Err(err) => {
            warn!(%err, "board rejected a generated move");
            None
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
