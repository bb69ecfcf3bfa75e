//! Grid coordinates, axis directions, and tile types.
//!
//! ## Pos
//!
//! A `(row, col)` cell coordinate. Rows grow downward, columns grow
//! rightward, both 0-based. Valid range is determined by the owning
//! board: `row < height`, `col < width`.
//!
//! ## TileType
//!
//! Opaque matching category. The engine never interprets tile types
//! beyond equality; hosts map them to visual assets. `TileType::EMPTY`
//! (the value 0) is the reserved sentinel for a cell with no tile.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    /// 0-based row (top to bottom).
    pub row: u16,
    /// 0-based column (left to right).
    pub col: u16,
}

impl Pos {
    /// Create a position.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed probe order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Step one cell in this direction, staying inside a
    /// `width × height` board.
    ///
    /// Returns `None` when the step would leave the board. The
    /// connectivity search never routes outside the rectangle.
    #[must_use]
    pub fn step(self, from: Pos, width: u16, height: u16) -> Option<Pos> {
        match self {
            Direction::Up if from.row > 0 => Some(Pos::new(from.row - 1, from.col)),
            Direction::Down if from.row + 1 < height => Some(Pos::new(from.row + 1, from.col)),
            Direction::Left if from.col > 0 => Some(Pos::new(from.row, from.col - 1)),
            Direction::Right if from.col + 1 < width => Some(Pos::new(from.row, from.col + 1)),
            _ => None,
        }
    }
}

/// A tile's matching category.
///
/// Categories are opaque positive integers; `TileType::EMPTY` (0) marks
/// a cell holding no tile. Two tiles match iff their types are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileType(pub u16);

impl TileType {
    /// The reserved empty-cell sentinel.
    pub const EMPTY: TileType = TileType(0);

    /// Create a tile type.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Is this the empty sentinel?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw type value (0 = empty).
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "Tile(empty)")
        } else {
            write!(f, "Tile({})", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interior() {
        let p = Pos::new(2, 3);
        assert_eq!(Direction::Up.step(p, 10, 10), Some(Pos::new(1, 3)));
        assert_eq!(Direction::Down.step(p, 10, 10), Some(Pos::new(3, 3)));
        assert_eq!(Direction::Left.step(p, 10, 10), Some(Pos::new(2, 2)));
        assert_eq!(Direction::Right.step(p, 10, 10), Some(Pos::new(2, 4)));
    }

    #[test]
    fn test_step_edges() {
        assert_eq!(Direction::Up.step(Pos::new(0, 0), 4, 4), None);
        assert_eq!(Direction::Left.step(Pos::new(0, 0), 4, 4), None);
        assert_eq!(Direction::Down.step(Pos::new(3, 0), 4, 4), None);
        assert_eq!(Direction::Right.step(Pos::new(0, 3), 4, 4), None);
    }

    #[test]
    fn test_tile_type_empty() {
        assert!(TileType::EMPTY.is_empty());
        assert!(TileType::new(0).is_empty());
        assert!(!TileType::new(1).is_empty());
        assert_eq!(TileType::new(7).raw(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Pos::new(1, 2)), "(1, 2)");
        assert_eq!(format!("{}", TileType::new(3)), "Tile(3)");
        assert_eq!(format!("{}", TileType::EMPTY), "Tile(empty)");
    }

    #[test]
    fn test_serialization() {
        let p = Pos::new(5, 9);
        let json = serde_json::to_string(&p).unwrap();
        let back: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
