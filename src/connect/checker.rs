//! Bounded-turn connectivity search.
//!
//! Two occupied cells of equal type are connectable when an orthogonal
//! path joins them, every cell strictly between the endpoints is empty,
//! and the path changes direction at most twice. This is the
//! genre-defining rule and doubles as the solvability oracle used by
//! the shuffle policy, so it must be exact.
//!
//! ## Algorithm
//!
//! Breadth-first search over cells where a queued state is
//! (position, direction of the arriving step, turns so far). The search
//! seeds one state per axis direction out of the source, so the first
//! step in any direction costs zero turns. A step is legal only onto
//! the final target or an empty unvisited cell; occupied non-target
//! cells block. Turns increment exactly when the outgoing direction
//! differs from the arriving one, and states that would exceed two
//! turns are dropped un-expanded.
//!
//! Visited bookkeeping is per cell. FIFO order means the first arrival
//! at a cell used a minimal-turn path, which is what keeps the
//! per-cell pruning sound under the turn budget. The relation is not
//! symmetric for a single directed probe, so `can_connect` runs a→b
//! and b→a and accepts if either succeeds.
//!
//! The search never leaves the rectangle: no routing through a virtual
//! border outside the grid.
//!
//! Complexity: O(width × height) per directed probe. This is the
//! dominant cost of the whole engine and the reason the
//! [`MatchIndex`](crate::index::MatchIndex) exists.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::pos::{Direction, Pos};

use super::path::ConnectionPath;

/// Maximum direction changes along a legal path.
pub const MAX_TURNS: u8 = 2;

/// Can the two cells be connected within the turn budget?
///
/// Returns `false` immediately when either cell is empty, the types
/// differ, or `a == b` (a pair is two distinct cells). Symmetric:
/// `can_connect(board, a, b) == can_connect(board, b, a)`.
#[must_use]
pub fn can_connect(board: &Board, a: Pos, b: Pos) -> bool {
    find_path(board, a, b).is_some()
}

/// Find a connecting path from `a` to `b`, if one exists.
///
/// The returned path travels source→destination in argument order even
/// when only the reverse probe succeeded.
#[must_use]
pub fn find_path(board: &Board, a: Pos, b: Pos) -> Option<ConnectionPath> {
    if a == b {
        return None;
    }
    let ta = board.get(a);
    let tb = board.get(b);
    if ta.is_empty() || tb.is_empty() || ta != tb {
        return None;
    }

    probe(board, a, b).or_else(|| probe(board, b, a).map(ConnectionPath::reversed))
}

/// One directed BFS probe from `src` to `dst`.
fn probe(board: &Board, src: Pos, dst: Pos) -> Option<ConnectionPath> {
    let width = board.width();
    let height = board.height();
    let idx = |p: Pos| usize::from(p.row) * usize::from(width) + usize::from(p.col);

    let mut visited = vec![false; board.area()];
    // Arrival direction and predecessor, for corner reconstruction.
    let mut parent: Vec<Option<(Pos, Direction)>> = vec![None; board.area()];
    let mut queue: VecDeque<(Pos, Direction, u8)> = VecDeque::new();

    visited[idx(src)] = true;
    for dir in Direction::ALL {
        if let Some(next) = dir.step(src, width, height) {
            if steppable(board, next, dst) && !visited[idx(next)] {
                visited[idx(next)] = true;
                parent[idx(next)] = Some((src, dir));
                queue.push_back((next, dir, 0));
            }
        }
    }

    while let Some((pos, arrived, turns)) = queue.pop_front() {
        if pos == dst {
            return Some(reconstruct(src, dst, &parent, idx));
        }

        for dir in Direction::ALL {
            let Some(next) = dir.step(pos, width, height) else {
                continue;
            };
            if visited[idx(next)] || !steppable(board, next, dst) {
                continue;
            }
            let next_turns = if dir == arrived { turns } else { turns + 1 };
            if next_turns > MAX_TURNS {
                continue;
            }
            visited[idx(next)] = true;
            parent[idx(next)] = Some((pos, dir));
            queue.push_back((next, dir, next_turns));
        }
    }

    None
}

/// A cell can be stepped onto iff it is the final target or empty.
fn steppable(board: &Board, cell: Pos, dst: Pos) -> bool {
    cell == dst || !board.is_occupied(cell)
}

/// Walk the parent chain back from `dst` and keep only the corners.
fn reconstruct(
    src: Pos,
    dst: Pos,
    parent: &[Option<(Pos, Direction)>],
    idx: impl Fn(Pos) -> usize,
) -> ConnectionPath {
    // (cell, arrival direction), destination first.
    let mut steps: SmallVec<[(Pos, Direction); 8]> = SmallVec::new();
    let mut cur = dst;
    while cur != src {
        let (prev, dir) = parent[idx(cur)].expect("broken parent chain");
        steps.push((cur, dir));
        cur = prev;
    }
    steps.reverse();

    let mut waypoints: SmallVec<[Pos; 4]> = SmallVec::new();
    waypoints.push(src);
    for pair in steps.windows(2) {
        let ((_, d_prev), (next, d_next)) = (pair[0], pair[1]);
        if d_prev != d_next {
            // The corner is the cell the new direction departs from.
            let (corner, _) = parent[idx(next)].expect("broken parent chain");
            waypoints.push(corner);
        }
    }
    waypoints.push(dst);

    ConnectionPath::new(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pos::TileType;

    fn board(rows: &[Vec<u16>]) -> Board {
        Board::from_rows(rows)
    }

    #[test]
    fn test_straight_horizontal() {
        let b = board(&[vec![1, 0, 0, 1]]);
        let path = find_path(&b, Pos::new(0, 0), Pos::new(0, 3)).unwrap();
        assert_eq!(path.turns(), 0);
        assert_eq!(path.source(), Pos::new(0, 0));
        assert_eq!(path.dest(), Pos::new(0, 3));
    }

    #[test]
    fn test_straight_vertical() {
        let b = board(&[vec![2], vec![0], vec![2], vec![0]]);
        assert!(can_connect(&b, Pos::new(0, 0), Pos::new(2, 0)));
    }

    #[test]
    fn test_adjacent_pair_connects() {
        let b = board(&[vec![3, 3]]);
        let path = find_path(&b, Pos::new(0, 0), Pos::new(0, 1)).unwrap();
        assert_eq!(path.turns(), 0);
    }

    #[test]
    fn test_one_turn_l_shape() {
        // Diagonal pair with the other diagonal empty.
        let b = board(&[vec![1, 0], vec![0, 1]]);
        let path = find_path(&b, Pos::new(0, 0), Pos::new(1, 1)).unwrap();
        assert_eq!(path.turns(), 1);
    }

    #[test]
    fn test_two_turn_u_shape() {
        // Must route around the blocker at (1, 0): right, down, left.
        let b = board(&[vec![1, 0, 0], vec![2, 0, 0], vec![1, 0, 0]]);
        let path = find_path(&b, Pos::new(0, 0), Pos::new(2, 0)).unwrap();
        assert_eq!(path.turns(), 2);
    }

    #[test]
    fn test_three_turn_corridor_rejected() {
        // The only empty corridor between the two 1-tiles needs three
        // direction changes.
        let b = board(&[
            vec![0, 0, 0],
            vec![1, 2, 0],
            vec![2, 2, 0],
            vec![1, 0, 0],
        ]);
        assert!(!can_connect(&b, Pos::new(1, 0), Pos::new(3, 0)));
    }

    #[test]
    fn test_blocked_straight_corridor() {
        // Interior cell occupied by a different type, no way around.
        let b = board(&[vec![1, 2, 1]]);
        assert!(!can_connect(&b, Pos::new(0, 0), Pos::new(0, 2)));
    }

    #[test]
    fn test_blocker_same_type_still_blocks() {
        let b = board(&[vec![1, 1, 1, 0]]);
        assert!(!can_connect(&b, Pos::new(0, 0), Pos::new(0, 2)));
        // The adjacent pairs do connect.
        assert!(can_connect(&b, Pos::new(0, 0), Pos::new(0, 1)));
        assert!(can_connect(&b, Pos::new(0, 1), Pos::new(0, 2)));
    }

    #[test]
    fn test_rejects_self_pair() {
        let b = board(&[vec![1, 1]]);
        assert!(!can_connect(&b, Pos::new(0, 0), Pos::new(0, 0)));
    }

    #[test]
    fn test_rejects_empty_and_mismatched() {
        let b = board(&[vec![1, 0, 2, 1]]);
        assert!(!can_connect(&b, Pos::new(0, 0), Pos::new(0, 1))); // empty
        assert!(!can_connect(&b, Pos::new(0, 0), Pos::new(0, 2))); // types differ
        assert!(!can_connect(&b, Pos::new(0, 1), Pos::new(0, 1))); // empty self
    }

    #[test]
    fn test_symmetry() {
        let boards = [
            board(&[vec![1, 0, 0, 1]]),
            board(&[vec![1, 0], vec![0, 1]]),
            board(&[vec![1, 0, 0], vec![2, 0, 0], vec![1, 0, 0]]),
            board(&[vec![1, 2, 1]]),
        ];
        for b in &boards {
            let occupied: Vec<Pos> = b.occupied_positions().collect();
            for &a in &occupied {
                for &c in &occupied {
                    assert_eq!(
                        can_connect(b, a, c),
                        can_connect(b, c, a),
                        "asymmetric result between {a} and {c}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_path_interior_is_empty() {
        let b = board(&[
            vec![0, 0, 0, 0],
            vec![1, 2, 0, 0],
            vec![2, 2, 1, 0],
        ]);
        let path = find_path(&b, Pos::new(1, 0), Pos::new(2, 2)).unwrap();
        assert!(path.turns() <= 2);
        let cells = path.cells();
        assert_eq!(*cells.first().unwrap(), Pos::new(1, 0));
        assert_eq!(*cells.last().unwrap(), Pos::new(2, 2));
        for &cell in &cells[1..cells.len() - 1] {
            assert_eq!(b.get(cell), TileType::EMPTY, "interior cell {cell} occupied");
        }
    }

    #[test]
    fn test_no_routing_outside_rectangle() {
        // Corner tiles with the entire interior blocked: a border route
        // one cell outside the grid would connect these, but the search
        // stays in-bounds.
        let b = board(&[vec![1, 2], vec![2, 1]]);
        assert!(!can_connect(&b, Pos::new(0, 0), Pos::new(1, 1)));
        assert!(!can_connect(&b, Pos::new(0, 1), Pos::new(1, 0)));
    }
}
