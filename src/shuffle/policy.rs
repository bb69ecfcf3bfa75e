//! Solvability-preserving in-place shuffle.
//!
//! The shuffle repositions the remaining tiles without moving any
//! empty cell: occupied cells' types are collected into a flat list,
//! uniformly permuted, and written back over the previously occupied
//! positions in row-major order. The index is rebuilt and the board
//! tested for a connectable pair; failures re-permute up to a bounded
//! retry count.
//!
//! The bound exists because repeated random permutations of a fixed
//! multiset are not guaranteed to produce a solvable layout in bounded
//! time on adversarial small residues. Exhaustion is a recoverable
//! outcome the caller maps to its own fallback policy, never a crash
//! and never unbounded recursion; the board is left holding the last
//! permutation attempted, with the index matching it.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::rng::GameRng;
use crate::index::MatchIndex;

/// Outcome of one shuffle operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleResult {
    /// The board now has at least one connectable pair.
    Solvable {
        /// Permutations tried, including the successful one.
        attempts: u32,
    },
    /// Every retry produced an unsolvable layout; the last permutation
    /// is left in place.
    Unsolvable {
        /// Permutations tried.
        attempts: u32,
    },
}

impl ShuffleResult {
    /// Did the shuffle end on a solvable board?
    #[must_use]
    pub fn is_solvable(self) -> bool {
        matches!(self, ShuffleResult::Solvable { .. })
    }
}

/// Permute the remaining tiles in place until the board is solvable or
/// the retry limit is hit.
///
/// Empty cells never move. The index is rebuilt from the final layout
/// before returning, whatever the outcome. A `retry_limit` of 0 is
/// treated as 1: the shuffle always permutes at least once.
pub fn shuffle(
    board: &mut Board,
    index: &mut MatchIndex,
    rng: &mut GameRng,
    retry_limit: u32,
) -> ShuffleResult {
    let positions: Vec<_> = board.occupied_positions().collect();
    if positions.len() < 2 {
        // Nothing to permute and nothing can ever pair.
        return ShuffleResult::Unsolvable { attempts: 0 };
    }

    let mut tiles: Vec<_> = positions.iter().map(|&p| board.get(p)).collect();
    let limit = retry_limit.max(1);

    for attempt in 1..=limit {
        rng.shuffle(&mut tiles);
        for (&pos, &ty) in positions.iter().zip(&tiles) {
            board.set(pos, ty);
        }
        index.rebuild(board);

        if index.has_any_pair(board) {
            return ShuffleResult::Solvable { attempts: attempt };
        }
    }

    ShuffleResult::Unsolvable { attempts: limit }
}
