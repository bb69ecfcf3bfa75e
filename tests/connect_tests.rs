//! Connectivity contract tests.
//!
//! The ≤2-turn rule is the genre-defining constraint and the
//! solvability oracle, so these pin its observable contract: the
//! straight / one-turn / two-turn cases, blocking, symmetry, and the
//! orphan-singleton behavior of the pair oracle.

use proptest::prelude::*;

use tile_link::{can_connect, find_path, Board, MatchIndex, Pos, TileType};

#[test]
fn test_straight_line_connects_with_zero_turns() {
    // Same row, empty interior.
    let b = Board::from_rows(&[vec![0, 0, 0], vec![7, 0, 7], vec![0, 0, 0]]);
    let path = find_path(&b, Pos::new(1, 0), Pos::new(1, 2)).unwrap();
    assert_eq!(path.turns(), 0);

    // Same column.
    let b = Board::from_rows(&[vec![3, 0], vec![0, 0], vec![3, 0]]);
    assert!(can_connect(&b, Pos::new(0, 0), Pos::new(2, 0)));
}

#[test]
fn test_l_corridor_connects_with_one_turn() {
    let b = Board::from_rows(&[
        vec![5, 0, 0],
        vec![0, 0, 0],
        vec![0, 0, 5],
    ]);
    let path = find_path(&b, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
    assert!(path.turns() <= 2);
    assert!(can_connect(&b, Pos::new(2, 2), Pos::new(0, 0)));
}

#[test]
fn test_three_turn_corridor_does_not_connect() {
    // The only empty route between the 1-tiles snakes through three
    // direction changes.
    let b = Board::from_rows(&[
        vec![0, 0, 0],
        vec![1, 2, 0],
        vec![2, 2, 0],
        vec![1, 0, 0],
    ]);
    assert!(!can_connect(&b, Pos::new(1, 0), Pos::new(3, 0)));
}

#[test]
fn test_occupied_interior_blocks_straight_corridor() {
    let b = Board::from_rows(&[vec![1, 2, 1]]);
    assert!(!can_connect(&b, Pos::new(0, 0), Pos::new(0, 2)));
}

#[test]
fn test_api_symmetry_on_random_boards() {
    for seed in 0..10 {
        let mut rng = tile_link::GameRng::new(seed);
        let mut board = Board::deal(6, 5, 4, &mut rng);

        // Punch some holes so paths exist.
        for (i, pos) in board.occupied_positions().collect::<Vec<_>>().into_iter().enumerate() {
            if i % 3 == 0 {
                let other = board
                    .occupied_positions()
                    .find(|&p| p != pos && board.get(p) == board.get(pos));
                if let Some(other) = other {
                    board.remove_pair(pos, other);
                }
            }
        }

        let occupied: Vec<Pos> = board.occupied_positions().collect();
        for &a in occupied.iter().take(12) {
            for &b in occupied.iter().take(12) {
                assert_eq!(
                    can_connect(&board, a, b),
                    can_connect(&board, b, a),
                    "seed {seed}: asymmetry between {a} and {b}"
                );
            }
        }
    }
}

#[test]
fn test_orphan_singleton_returns_false_without_panic() {
    // Exactly one tile of exactly one type.
    let board = Board::from_rows(&[vec![0, 0], vec![0, 4]]);
    let index = MatchIndex::from_board(&board);

    assert_eq!(index.type_count(), 1);
    assert!(!index.has_any_pair(&board));
}

#[test]
fn test_found_paths_are_legal() {
    // Every path the checker produces must have an empty interior,
    // matching endpoints, and at most two turns.
    for seed in 0..10 {
        let mut rng = tile_link::GameRng::new(seed);
        let mut board = Board::deal(6, 5, 3, &mut rng);

        // Clear a third of the pairs to open corridors.
        let mut cleared = 0;
        while cleared < 5 {
            let Some(a) = board.occupied_positions().next() else { break };
            let Some(b) = board
                .occupied_positions()
                .find(|&p| p != a && board.get(p) == board.get(a))
            else {
                break;
            };
            board.remove_pair(a, b);
            cleared += 1;
        }

        let occupied: Vec<Pos> = board.occupied_positions().collect();
        for &a in &occupied {
            for &b in &occupied {
                if let Some(path) = find_path(&board, a, b) {
                    assert!(path.turns() <= 2);
                    assert_eq!(path.source(), a);
                    assert_eq!(path.dest(), b);
                    let cells = path.cells();
                    for &cell in &cells[1..cells.len() - 1] {
                        assert_eq!(board.get(cell), TileType::EMPTY);
                    }
                }
            }
        }
    }
}

proptest! {
    /// Symmetry holds for arbitrary small layouts.
    #[test]
    fn prop_can_connect_is_symmetric(
        cells in proptest::collection::vec(0u16..4, 16),
        ai in 0usize..16,
        bi in 0usize..16,
    ) {
        let rows: Vec<Vec<u16>> = cells.chunks(4).map(<[u16]>::to_vec).collect();
        let board = Board::from_rows(&rows);
        let a = Pos::new((ai / 4) as u16, (ai % 4) as u16);
        let b = Pos::new((bi / 4) as u16, (bi % 4) as u16);

        prop_assert_eq!(can_connect(&board, a, b), can_connect(&board, b, a));
    }

    /// A reported path always stays inside the rectangle and within
    /// the turn budget.
    #[test]
    fn prop_paths_in_bounds_and_bounded(
        cells in proptest::collection::vec(0u16..3, 20),
        ai in 0usize..20,
        bi in 0usize..20,
    ) {
        let rows: Vec<Vec<u16>> = cells.chunks(5).map(<[u16]>::to_vec).collect();
        let board = Board::from_rows(&rows);
        let a = Pos::new((ai / 5) as u16, (ai % 5) as u16);
        let b = Pos::new((bi / 5) as u16, (bi % 5) as u16);

        if let Some(path) = find_path(&board, a, b) {
            prop_assert!(path.turns() <= 2);
            for cell in path.cells() {
                prop_assert!(board.in_bounds(cell));
            }
        }
    }
}
