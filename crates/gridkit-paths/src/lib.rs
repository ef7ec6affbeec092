//! Pathfinding algorithms over [`gridkit_core::Grid`].
//!
//! Every search is a free function that borrows the grid read-only and
//! builds its working set per call:
//!
//! - **BFS** unweighted shortest path ([`bfs`]) and distance map ([`bfs_map`])
//! - **Dijkstra** weighted shortest path ([`dijkstra`]) and multi-source
//!   distance map ([`dijkstra_map`])
//! - **A\*** weighted shortest path with a heuristic ([`astar`])
//! - **Region labelling** of connected cells ([`regions`], [`flood_fill`])
//!
//! Grid semantics are supplied by the caller as closures:
//!
//! | Closure | Signature | Used by |
//! |---|---|---|
//! | `is_valid_move` | `(current, next, &grid) -> bool` | BFS, regions |
//! | `get_cost` | `(current, next, &grid) -> Cost` | Dijkstra, A* |
//! | `heuristic` | `(current, end) -> Cost` | A* |
//!
//! A cost of [`f64::INFINITY`] marks an impassable edge. Negative or NaN
//! costs are rejected with [`PathError::InvalidCost`].
//!
//! Neighbours are expanded in the order of the direction table passed in
//! (see [`gridkit_core::dirs`]); among equally cheap candidates the one
//! discovered first wins, so results are deterministic.

mod astar;
mod bfs;
mod cc;
mod dijkstra;
mod distance;
mod error;
mod node;

pub use astar::{astar, path_cost};
pub use bfs::{bfs, bfs_map};
pub use cc::{Regions, flood_fill, regions};
pub use dijkstra::{DijkstraResult, dijkstra, dijkstra_map};
pub use distance::{Heuristic, chebyshev, euclidean, manhattan, octile};
pub use error::{Endpoint, PathError};
pub use node::{Cost, DistanceMap, PathNode};
