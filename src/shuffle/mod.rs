//! The shuffle policy: bounded-retry in-place permutation that hands
//! the player back a solvable board whenever one is reachable.

pub mod policy;

pub use policy::{shuffle, ShuffleResult};
