//! # tile-link
//!
//! A tile-matching puzzle board engine: connect two tiles of equal
//! type through an orthogonal path with at most two turns and they
//! vanish as a pair.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering, input mapping, audio, and timers are
//!    host concerns. The engine exposes pure state queries and
//!    mutations and never touches presentation.
//!
//! 2. **Deterministic**: no global RNG. The session owns a seeded
//!    [`GameRng`] injected into every deal and shuffle, so the same
//!    seed replays the same game.
//!
//! 3. **Lockstep invariants**: the [`Board`] and the derived
//!    [`MatchIndex`] mutate in the same logical transaction; a
//!    divergence is a programmer error and panics immediately.
//!
//! ## Modules
//!
//! - `core`: positions, tile types, RNG, configuration, errors
//! - `board`: the grid: dealing, queries, pair removal
//! - `connect`: the ≤2-turn connectivity search
//! - `index`: tile type → positions, behind every solvability query
//! - `shuffle`: solvability-preserving shuffle with bounded retries
//! - `session`: the controller hosts drive: selection, score,
//!   shuffle budget, level progression
//!
//! ## Example
//!
//! ```
//! use tile_link::{GameConfig, Pos, SelectionOutcome, Session};
//!
//! let config = GameConfig::new().board_size(6, 4).num_types(8);
//! let mut session = Session::new(config, 42).unwrap();
//!
//! match session.try_select(Pos::new(0, 0)).unwrap() {
//!     SelectionOutcome::FirstPicked => {}
//!     outcome => panic!("unexpected {outcome:?}"),
//! }
//! ```

pub mod board;
pub mod connect;
pub mod core;
pub mod index;
pub mod session;
pub mod shuffle;

// Re-export commonly used types
pub use crate::core::{Direction, EngineError, GameConfig, GameRng, GameRngState, Pos, TileType};

pub use crate::board::Board;

pub use crate::connect::{can_connect, find_path, ConnectionPath, MAX_TURNS};

pub use crate::index::MatchIndex;

pub use crate::shuffle::{shuffle, ShuffleResult};

pub use crate::session::{
    MatchRecord, RejectReason, SelectionOutcome, Session, ShuffleOutcome,
};
