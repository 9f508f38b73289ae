use crate::{board::Board, types::Move};

/// Pure perft node count.
/// Counts all move sequences of length `depth` from the given position.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 1 {
            return board.legal_moves().count() as u64;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        buf.clear();
        buf.extend(board.legal_moves());

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            board.apply(mv);
            nodes += inner(board, depth - 1, rest);
            board.undo();
        }
        nodes
    }

    let mut tmp = board.clone();
    let mut layers = vec![Vec::with_capacity(2048); depth as usize - 1];
    inner(&mut tmp, depth, &mut layers[..])
}
