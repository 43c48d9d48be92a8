use serde::Serialize;

use crate::board::Board;

/// Take `count` tokens from `pile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PileMove {
    pub pile: usize,
    pub count: u32,
}

/// Picks the computer's move.
///
/// With a non-zero nim-sum the first pile (in index order) that can be
/// shrunk to `pile ^ nim_sum` is reduced to that size, leaving a zero
/// nim-sum. With a zero nim-sum the position is already lost, so one token
/// is taken from the lowest-indexed non-empty pile.
///
/// Returns `None` only for a terminal board.
pub fn optimal_move(board: &Board) -> Option<PileMove> {
    let nim_sum = board.nim_sum();
    let piles = board.piles();

    if nim_sum == 0 {
        return piles
            .iter()
            .position(|&size| size > 0)
            .map(|pile| PileMove { pile, count: 1 });
    }

    piles.iter().enumerate().find_map(|(pile, &size)| {
        let target = size ^ nim_sum;
        (target < size).then(|| PileMove {
            pile,
            count: size - target,
        })
    })
}
