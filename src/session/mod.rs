//! The level/session controller: selection flow, scoring, shuffle
//! budget, and level progression.

pub mod controller;
pub mod level;

pub use controller::{MatchRecord, RejectReason, SelectionOutcome, Session, ShuffleOutcome};
pub use level::next_dimensions;
