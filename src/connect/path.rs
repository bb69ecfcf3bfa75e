//! Transient connection paths.
//!
//! A [`ConnectionPath`] exists only for the duration of one
//! connectivity test. It stores waypoints rather than every cell: the
//! two endpoints plus at most two corners, since a legal path changes
//! direction at most twice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::pos::Pos;

/// An orthogonal path between two matched tiles.
///
/// Waypoints are the endpoints plus the corners, in travel order.
/// Consecutive waypoints always share a row or a column. Every cell
/// strictly between the endpoints was empty on the board at the time
/// the path was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPath {
    /// Endpoints plus corners: 4 fits inline (2 endpoints + 2 corners).
    waypoints: SmallVec<[Pos; 4]>,
}

impl ConnectionPath {
    pub(crate) fn new(waypoints: SmallVec<[Pos; 4]>) -> Self {
        debug_assert!(waypoints.len() >= 2, "a path needs two endpoints");
        debug_assert!(waypoints.len() <= 4, "at most two corners allowed");
        Self { waypoints }
    }

    /// Reverse the travel order (used when the b→a probe succeeded).
    pub(crate) fn reversed(mut self) -> Self {
        self.waypoints.reverse();
        self
    }

    /// The waypoints: source, corners, destination.
    #[must_use]
    pub fn waypoints(&self) -> &[Pos] {
        &self.waypoints
    }

    /// The source tile.
    #[must_use]
    pub fn source(&self) -> Pos {
        self.waypoints[0]
    }

    /// The destination tile.
    #[must_use]
    pub fn dest(&self) -> Pos {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Number of direction changes (0, 1, or 2).
    #[must_use]
    pub fn turns(&self) -> usize {
        self.waypoints.len() - 2
    }

    /// Expand the waypoints into every cell along the path, endpoints
    /// included. Mainly for hosts drawing the link line.
    #[must_use]
    pub fn cells(&self) -> Vec<Pos> {
        let mut out = vec![self.waypoints[0]];
        for pair in self.waypoints.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from.row == to.row {
                let mut col = from.col;
                while col != to.col {
                    col = if to.col > col { col + 1 } else { col - 1 };
                    out.push(Pos::new(from.row, col));
                }
            } else {
                debug_assert_eq!(from.col, to.col, "waypoints must share an axis");
                let mut row = from.row;
                while row != to.row {
                    row = if to.row > row { row + 1 } else { row - 1 };
                    out.push(Pos::new(row, from.col));
                }
            }
        }
        out
    }
}
