//! The tile grid.
//!
//! A `Board` is a `height × width` row-major grid of [`TileType`]
//! values, `TileType::EMPTY` marking removed or never-placed tiles.
//! Tiles are dealt and removed strictly in pairs of equal type, so the
//! occupied-cell count is always even: `width * height` at level start,
//! minus 2 per successful match.
//!
//! Out-of-range access through the indexed accessors is a programmer
//! error and panics; the session boundary converts host coordinates to
//! [`EngineError::OutOfRange`](crate::core::EngineError) before they
//! reach this type.

use serde::{Deserialize, Serialize};

use crate::core::pos::{Pos, TileType};
use crate::core::rng::GameRng;

/// The puzzle grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<TileType>,
}

impl Board {
    /// Deal a fresh, completely filled board.
    ///
    /// For each of the `width * height / 2` pairs, a type is drawn
    /// uniformly from `1..=num_types` and the pair's two members land
    /// on two cells drawn uniformly without replacement from the full
    /// cell space (implemented as a shuffled enumeration of all cells,
    /// consumed two at a time).
    ///
    /// Dimensions are validated by [`GameConfig::validate`] before any
    /// deal; an odd cell count here is a programmer error.
    ///
    /// [`GameConfig::validate`]: crate::core::GameConfig::validate
    #[must_use]
    pub fn deal(width: u16, height: u16, num_types: u16, rng: &mut GameRng) -> Self {
        let area = usize::from(width) * usize::from(height);
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        assert!(area % 2 == 0, "board area must be even, got {width}x{height}");
        assert!(num_types > 0, "need at least one tile type");

        let mut slots: Vec<usize> = (0..area).collect();
        rng.shuffle(&mut slots);

        let mut cells = vec![TileType::EMPTY; area];
        for pair in slots.chunks_exact(2) {
            // Draw over 0..num_types and shift to avoid overflowing the
            // exclusive bound when num_types is u16::MAX.
            let ty = TileType::new(rng.gen_range_u16(0..num_types) + 1);
            cells[pair[0]] = ty;
            cells[pair[1]] = ty;
        }

        Self { width, height, cells }
    }

    /// Build a board from explicit rows of raw type values (0 = empty).
    ///
    /// For tests and puzzle hosts that need a known layout. Panics on
    /// empty or ragged input.
    #[must_use]
    pub fn from_rows(rows: &[Vec<u16>]) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty(), "board must be non-empty");
        let width = rows[0].len();
        assert!(
            rows.iter().all(|r| r.len() == width),
            "all rows must have the same length"
        );

        let cells = rows
            .iter()
            .flat_map(|r| r.iter().map(|&v| TileType::new(v)))
            .collect();

        Self {
            width: width as u16,
            height: rows.len() as u16,
            cells,
        }
    }

    /// Board width (columns).
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Board height (rows).
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total cell count.
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Is the position inside the board?
    #[must_use]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn idx(&self, pos: Pos) -> usize {
        assert!(
            self.in_bounds(pos),
            "position {pos} is outside the {}x{} board",
            self.width,
            self.height
        );
        usize::from(pos.row) * usize::from(self.width) + usize::from(pos.col)
    }

    /// Get the tile at a position (`EMPTY` for a cleared cell).
    ///
    /// Panics when the position is out of range.
    #[must_use]
    pub fn get(&self, pos: Pos) -> TileType {
        self.cells[self.idx(pos)]
    }

    /// Get the tile at a position, or `None` when out of range.
    #[must_use]
    pub fn try_get(&self, pos: Pos) -> Option<TileType> {
        if self.in_bounds(pos) {
            Some(self.cells[usize::from(pos.row) * usize::from(self.width) + usize::from(pos.col)])
        } else {
            None
        }
    }

    /// Is the cell occupied by a tile?
    #[must_use]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        !self.get(pos).is_empty()
    }

    /// True iff both cells are occupied and hold equal types.
    ///
    /// An empty cell on either side yields `false`, not an error.
    #[must_use]
    pub fn is_same_type(&self, a: Pos, b: Pos) -> bool {
        let ta = self.get(a);
        let tb = self.get(b);
        !ta.is_empty() && ta == tb
    }

    /// Clear both cells of a matched pair.
    ///
    /// The session validates occupancy, type equality, and
    /// connectivity before calling; violating that contract here is a
    /// programmer error. Must be paired with
    /// [`MatchIndex::remove`](crate::index::MatchIndex::remove) in the
    /// same logical transaction.
    pub fn remove_pair(&mut self, a: Pos, b: Pos) {
        assert_ne!(a, b, "a pair is two distinct cells");
        debug_assert!(
            self.is_same_type(a, b),
            "remove_pair on non-matching cells {a} and {b}"
        );
        let ia = self.idx(a);
        let ib = self.idx(b);
        self.cells[ia] = TileType::EMPTY;
        self.cells[ib] = TileType::EMPTY;
    }

    /// Overwrite a cell. Used by the shuffle write-back.
    pub(crate) fn set(&mut self, pos: Pos, ty: TileType) {
        let i = self.idx(pos);
        self.cells[i] = ty;
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, TileType)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &ty)| {
            let row = (i / usize::from(self.width)) as u16;
            let col = (i % usize::from(self.width)) as u16;
            (Pos::new(row, col), ty)
        })
    }

    /// Iterate occupied positions in row-major order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.iter().filter(|(_, ty)| !ty.is_empty()).map(|(p, _)| p)
    }

    /// Count of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|ty| !ty.is_empty()).count()
    }

    /// True when every cell is empty (level cleared).
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|ty| ty.is_empty())
    }
}
