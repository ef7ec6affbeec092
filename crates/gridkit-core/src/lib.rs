//! **gridkit-core** — coordinate and grid primitives for puzzle solving.
//!
//! This crate provides the foundational types used by `gridkit-paths`:
//! a `(row, col)` [`Point`], fixed direction tables, a string key codec for
//! coordinates, and a rectangular [`Grid`] container.
//!
//! # Coordinate convention
//!
//! Every API uses `(row, col)`. Rows grow downward, columns grow rightward,
//! and a grid is addressed as `grid[row][col]`. Direction vectors are
//! `(d_row, d_col)` deltas expressed as [`Point`]s.

pub mod dirs;
pub mod geom;
pub mod grid;
pub mod key;

pub use dirs::{ALL, CARDINAL, DIAGONAL};
pub use geom::Point;
pub use grid::{Grid, GridError};
pub use key::{KeyError, key_to_tuple, tuple_to_key};
