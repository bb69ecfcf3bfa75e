//! Derived index from tile type to occupied positions.
//!
//! The whole point of this structure is to keep "does any connectable
//! pair exist?" away from an O(cells²) full-board scan: only positions
//! sharing a type can ever match, so the oracle walks the per-type
//! position lists instead of every cell pair.
//!
//! ## Invariant
//!
//! After every board mutation, not eventually but after every one, the
//! entry for a type is exactly the set of board cells holding that
//! type, and a type whose set empties is evicted entirely. The index
//! never holds an empty set. Positions are copies; the index never
//! aliases board storage. A divergence between index and board is a
//! programmer error and panics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::connect;
use crate::core::pos::{Pos, TileType};

/// Tile type → occupied positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchIndex {
    by_type: FxHashMap<TileType, Vec<Pos>>,
}

impl MatchIndex {
    /// Build the index from a board's current occupancy.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut index = Self::default();
        index.rebuild(board);
        index
    }

    /// Clear and repopulate from board contents.
    ///
    /// Used after any bulk mutation (the initial deal, a shuffle).
    pub fn rebuild(&mut self, board: &Board) {
        self.by_type.clear();
        for (pos, ty) in board.iter() {
            if !ty.is_empty() {
                self.by_type.entry(ty).or_default().push(pos);
            }
        }
    }

    /// Remove a matched pair's positions from the type's set.
    ///
    /// Must be called in lockstep with [`Board::remove_pair`] for the
    /// same two positions. A missing type or position means board and
    /// index have diverged: fatal, asserted.
    pub fn remove(&mut self, ty: TileType, a: Pos, b: Pos) {
        let positions = self
            .by_type
            .get_mut(&ty)
            .unwrap_or_else(|| panic!("index desync: {ty} missing from index"));

        for pos in [a, b] {
            let at = positions
                .iter()
                .position(|&p| p == pos)
                .unwrap_or_else(|| panic!("index desync: {pos} missing for {ty}"));
            positions.swap_remove(at);
        }

        // Never hold an empty set.
        if positions.is_empty() {
            self.by_type.remove(&ty);
        }
    }

    /// Is any connectable pair left on the board?
    ///
    /// For each remaining type, tests every unordered position pair
    /// (i < j) through the connectivity checker, returning on the
    /// first success. A singleton set yields zero iterations: one
    /// orphaned tile of a type can never match and must not crash or
    /// report a pair.
    #[must_use]
    pub fn has_any_pair(&self, board: &Board) -> bool {
        self.find_pair(board).is_some()
    }

    /// First connectable pair found, if any. Doubles as hint support.
    #[must_use]
    pub fn find_pair(&self, board: &Board) -> Option<(Pos, Pos)> {
        for positions in self.by_type.values() {
            for (i, &a) in positions.iter().enumerate() {
                for &b in &positions[i + 1..] {
                    if connect::can_connect(board, a, b) {
                        return Some((a, b));
                    }
                }
            }
        }
        None
    }

    /// True when no tile types remain: the level is cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Number of distinct tile types still on the board.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }

    /// Total tiles tracked across all types.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    /// Positions currently holding the given type.
    #[must_use]
    pub fn positions_of(&self, ty: TileType) -> &[Pos] {
        self.by_type.get(&ty).map_or(&[], Vec::as_slice)
    }

    /// Does the index exactly mirror board occupancy?
    ///
    /// O(cells) verification used by tests and debug assertions.
    #[must_use]
    pub fn mirrors(&self, board: &Board) -> bool {
        if self.tile_count() != board.occupied_count() {
            return false;
        }
        if self.by_type.values().any(Vec::is_empty) {
            return false;
        }
        self.by_type
            .iter()
            .all(|(&ty, positions)| positions.iter().all(|&p| board.get(p) == ty))
    }
}
