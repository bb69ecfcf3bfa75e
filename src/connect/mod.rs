//! Bounded-turn connectivity: the ≤2-turn path search and the
//! transient paths it produces.

pub mod checker;
pub mod path;

pub use checker::{can_connect, find_path, MAX_TURNS};
pub use path::ConnectionPath;
