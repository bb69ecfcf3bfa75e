//! Core engine types: positions, tile types, RNG, configuration, errors.
//!
//! These are the building blocks every other module shares. Nothing
//! here knows about boards or sessions.

pub mod config;
pub mod error;
pub mod pos;
pub mod rng;

pub use config::GameConfig;
pub use error::EngineError;
pub use pos::{Direction, Pos, TileType};
pub use rng::{GameRng, GameRngState};
