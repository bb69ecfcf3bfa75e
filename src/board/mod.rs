//! The grid data model: dealing, cell queries, pair removal.

pub mod grid;

pub use grid::Board;
