//! The match index: the derived type → positions structure behind
//! every solvability query.

pub mod match_index;

pub use match_index::MatchIndex;
