//! Game configuration.
//!
//! Hosts configure the engine at session construction: starting board
//! size, tile type count, level-growth caps, shuffle budget, scoring.
//! Construction validates; nothing is silently coerced.
//!
//! Defaults match the classic layout: 20×10 board, 36 tile types,
//! 10 points per match.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Configuration for one game session.
///
/// ```
/// use tile_link::core::GameConfig;
///
/// let config = GameConfig::new()
///     .board_size(8, 6)
///     .num_types(12)
///     .shuffle_budget(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Level-1 board width (columns).
    pub width: u16,
    /// Level-1 board height (rows).
    pub height: u16,
    /// Number of distinct tile types dealt, `1..=num_types`.
    pub num_types: u16,
    /// Width cap for level growth.
    pub max_width: u16,
    /// Height cap for level growth.
    pub max_height: u16,
    /// Player-requested shuffles allowed per level.
    pub shuffle_budget: u32,
    /// Re-permutation attempts before a shuffle reports the board
    /// unsolvable.
    pub shuffle_retry_limit: u32,
    /// Score awarded per matched pair.
    pub score_per_match: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            num_types: 36,
            max_width: 26,
            max_height: 14,
            shuffle_budget: 3,
            shuffle_retry_limit: 16,
            score_per_match: 10,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default classic layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level-1 board dimensions.
    #[must_use]
    pub fn board_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of tile types.
    #[must_use]
    pub fn num_types(mut self, num_types: u16) -> Self {
        self.num_types = num_types;
        self
    }

    /// Set the level-growth dimension caps.
    #[must_use]
    pub fn max_size(mut self, max_width: u16, max_height: u16) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    /// Set the per-level shuffle budget.
    #[must_use]
    pub fn shuffle_budget(mut self, budget: u32) -> Self {
        self.shuffle_budget = budget;
        self
    }

    /// Set the shuffle retry limit.
    #[must_use]
    pub fn shuffle_retry_limit(mut self, limit: u32) -> Self {
        self.shuffle_retry_limit = limit;
        self
    }

    /// Set the score awarded per matched pair.
    #[must_use]
    pub fn score_per_match(mut self, score: u32) -> Self {
        self.score_per_match = score;
        self
    }

    /// Validate the configuration.
    ///
    /// Rejects zero or odd-area dimensions (`InvalidDimensions`) and a
    /// zero type count (`InvalidTypeCount`). The caps must admit the
    /// starting size.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0
            || self.height == 0
            || (u32::from(self.width) * u32::from(self.height)) % 2 != 0
            || self.width > self.max_width
            || self.height > self.max_height
        {
            return Err(EngineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.num_types == 0 {
            return Err(EngineError::InvalidTypeCount {
                num_types: self.num_types,
            });
        }
        Ok(())
    }
}
