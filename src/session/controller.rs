//! The level/session controller: the engine's external boundary.
//!
//! A `Session` owns exactly one [`Board`] and one [`MatchIndex`] and
//! keeps them in lockstep. The hosting UI drives it through
//! [`try_select`](Session::try_select),
//! [`request_shuffle`](Session::request_shuffle),
//! [`advance_level`](Session::advance_level) and the query accessors;
//! every call runs to completion before returning. Time accounting is
//! host-owned: on countdown expiry the host simply calls
//! [`start_new_game`](Session::start_new_game).
//!
//! ## Selection state machine
//!
//! `NoSelection → OneSelected → resolve`. The second pick always
//! resolves in the same call, to `Matched`, `Rejected`, or
//! `Deselected`, and the selection resets to `NoSelection` after
//! every resolve regardless of outcome. Rejections are ordinary
//! outcomes, not errors: rejection is normal play.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::connect;
use crate::core::config::GameConfig;
use crate::core::error::EngineError;
use crate::core::pos::{Pos, TileType};
use crate::core::rng::GameRng;
use crate::index::MatchIndex;
use crate::shuffle;

use super::level;

/// Why a second pick did not resolve to a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The picked cell holds no tile.
    AlreadyEmpty,
    /// The two tiles differ in type or no ≤2-turn path joins them.
    NotConnectable,
}

/// Result of one `try_select` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// First tile of a prospective pair selected.
    FirstPicked,
    /// The selected tile was re-picked and is now deselected.
    Deselected,
    /// The pick was rejected. An empty-cell pick leaves any existing
    /// selection in place; a non-connectable second pick clears it.
    Rejected(RejectReason),
    /// The pair matched and was removed.
    Matched {
        /// Score awarded for this match.
        score_delta: u32,
        /// True when the match left tiles but no connectable pair and
        /// the engine re-shuffled automatically.
        auto_shuffled: bool,
    },
}

/// Result of one player-requested shuffle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleOutcome {
    /// The board was permuted into a solvable layout.
    Applied,
    /// The retry limit was exhausted without finding a solvable
    /// layout; the last permutation stands. The host decides the
    /// fallback (re-deal, bonus, accept the residue).
    StillUnsolvable,
    /// No shuffles left in the budget; the board is untouched.
    BudgetExhausted,
}

/// One resolved match, kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Level the match happened on.
    pub level: u32,
    /// The matched tile type.
    pub tile: TileType,
    /// First-picked cell.
    pub first: Pos,
    /// Second-picked cell.
    pub second: Pos,
    /// Score awarded.
    pub score_delta: u32,
}

/// One game session: board, index, score, level, shuffle budget.
pub struct Session {
    config: GameConfig,
    board: Board,
    index: MatchIndex,
    /// Master stream; forked once per level so deals replay level by
    /// level.
    rng: GameRng,
    /// The active level's stream (deal + shuffles).
    level_rng: GameRng,
    selected: Option<Pos>,
    level: u32,
    score: u32,
    shuffles_left: u32,
    history: im::Vector<MatchRecord>,
}

impl Session {
    /// Start a session: validate the configuration and deal level 1.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let mut level_rng = rng.fork();
        let board = Board::deal(config.width, config.height, config.num_types, &mut level_rng);
        let index = MatchIndex::from_board(&board);

        Ok(Self {
            config,
            board,
            index,
            rng,
            level_rng,
            selected: None,
            level: 1,
            score: 0,
            shuffles_left: config.shuffle_budget,
            history: im::Vector::new(),
        })
    }

    /// Start a session over an explicit board layout (puzzle hosts,
    /// tests). The tile count must be even: tiles exist in pairs.
    pub fn from_board(config: GameConfig, board: Board, seed: u64) -> Result<Self, EngineError> {
        if config.num_types == 0 {
            return Err(EngineError::InvalidTypeCount {
                num_types: config.num_types,
            });
        }
        assert!(
            board.occupied_count() % 2 == 0,
            "explicit boards must hold an even tile count"
        );

        let mut rng = GameRng::new(seed);
        let level_rng = rng.fork();
        let index = MatchIndex::from_board(&board);

        Ok(Self {
            config,
            board,
            index,
            rng,
            level_rng,
            selected: None,
            level: 1,
            score: 0,
            shuffles_left: config.shuffle_budget,
            history: im::Vector::new(),
        })
    }

    // === Queries ===

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tile at host coordinates, for rendering.
    ///
    /// Returns `EMPTY` (0) for a cleared cell. Idempotent between
    /// mutations.
    pub fn query_cell(&self, row: u16, col: u16) -> Result<TileType, EngineError> {
        self.board
            .try_get(Pos::new(row, col))
            .ok_or(EngineError::OutOfRange {
                row,
                col,
                width: self.board.width(),
                height: self.board.height(),
            })
    }

    /// Current board width.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.board.width()
    }

    /// Current board height.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.board.height()
    }

    /// Current level (1-based).
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Player shuffles remaining this level.
    #[must_use]
    pub fn shuffles_left(&self) -> u32 {
        self.shuffles_left
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// All matches resolved so far this game.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MatchRecord> {
        &self.history
    }

    /// True when every tile is gone: time to advance the level.
    #[must_use]
    pub fn level_cleared(&self) -> bool {
        self.index.is_empty()
    }

    /// A connectable pair, if one exists (hint support).
    #[must_use]
    pub fn hint(&self) -> Option<(Pos, Pos)> {
        self.index.find_pair(&self.board)
    }

    // === Mutations ===

    /// Select a cell; the core gameplay entry point.
    pub fn try_select(&mut self, pos: Pos) -> Result<SelectionOutcome, EngineError> {
        let tile = self.query_cell(pos.row, pos.col)?;

        if tile.is_empty() {
            // Selection survives a stray empty click, as in the
            // original two-click flow.
            return Ok(SelectionOutcome::Rejected(RejectReason::AlreadyEmpty));
        }

        let Some(first) = self.selected else {
            self.selected = Some(pos);
            return Ok(SelectionOutcome::FirstPicked);
        };

        if first == pos {
            self.selected = None;
            return Ok(SelectionOutcome::Deselected);
        }

        // Second pick: resolve now, reset selection whatever happens.
        self.selected = None;

        if !self.board.is_same_type(first, pos) || !connect::can_connect(&self.board, first, pos) {
            return Ok(SelectionOutcome::Rejected(RejectReason::NotConnectable));
        }

        Ok(self.resolve_match(first, pos))
    }

    /// Remove a validated pair, score it, and re-shuffle if the board
    /// became unsolvable. Board and index mutate in one transaction.
    fn resolve_match(&mut self, first: Pos, second: Pos) -> SelectionOutcome {
        let tile = self.board.get(first);
        let score_delta = self.config.score_per_match;

        self.board.remove_pair(first, second);
        self.index.remove(tile, first, second);
        debug_assert!(self.index.mirrors(&self.board));

        self.score += score_delta;
        self.history.push_back(MatchRecord {
            level: self.level,
            tile,
            first,
            second,
            score_delta,
        });

        let mut auto_shuffled = false;
        if !self.index.is_empty() && !self.index.has_any_pair(&self.board) {
            // Engine-forced shuffle; does not touch the player budget.
            shuffle::shuffle(
                &mut self.board,
                &mut self.index,
                &mut self.level_rng,
                self.config.shuffle_retry_limit,
            );
            auto_shuffled = true;
        }

        SelectionOutcome::Matched {
            score_delta,
            auto_shuffled,
        }
    }

    /// Spend one shuffle from the budget.
    pub fn request_shuffle(&mut self) -> ShuffleOutcome {
        if self.shuffles_left == 0 {
            return ShuffleOutcome::BudgetExhausted;
        }
        self.shuffles_left -= 1;

        let result = shuffle::shuffle(
            &mut self.board,
            &mut self.index,
            &mut self.level_rng,
            self.config.shuffle_retry_limit,
        );

        if result.is_solvable() {
            ShuffleOutcome::Applied
        } else {
            ShuffleOutcome::StillUnsolvable
        }
    }

    /// Advance to the next level: grow the board per the sizing policy
    /// and deal a brand-new board + index at the new size.
    ///
    /// Panics unless the current level is cleared.
    pub fn advance_level(&mut self) {
        assert!(self.level_cleared(), "advance_level before the level is cleared");

        let (width, height) = level::next_dimensions(
            self.level,
            self.board.width(),
            self.board.height(),
            self.config.max_width,
            self.config.max_height,
        );

        self.level += 1;
        self.level_rng = self.rng.fork();
        self.board = Board::deal(width, height, self.config.num_types, &mut self.level_rng);
        self.index.rebuild(&self.board);
        self.shuffles_left = self.config.shuffle_budget;
        self.selected = None;
    }

    /// Discard the session state and deal a fresh level 1.
    ///
    /// The host calls this on its own countdown expiry or on an
    /// explicit new-game request.
    pub fn start_new_game(&mut self) {
        self.level = 1;
        self.score = 0;
        self.history = im::Vector::new();
        self.shuffles_left = self.config.shuffle_budget;
        self.selected = None;
        self.level_rng = self.rng.fork();
        self.board = Board::deal(
            self.config.width,
            self.config.height,
            self.config.num_types,
            &mut self.level_rng,
        );
        self.index.rebuild(&self.board);
    }
}
