use std::collections::VecDeque;

use gridkit_core::{Grid, Point};
use log::debug;

use crate::error::{Endpoint, PathError, check_in_bounds};
use crate::node::{Cost, DistanceMap, NO_PARENT, rebuild_path};

/// Unweighted shortest path from `start` to `end`.
///
/// Neighbours are generated from `dirs` in order and kept only if in bounds
/// and `is_valid_move(current, next, grid)` holds. Returns the path from
/// `start` to `end` inclusive, or an empty `Vec` if `end` is unreachable.
///
/// # Errors
///
/// [`PathError::OutOfBounds`] if `start` or `end` is outside the grid.
pub fn bfs<T, F>(
    grid: &Grid<T>,
    start: Point,
    end: Point,
    dirs: &[Point],
    mut is_valid_move: F,
) -> Result<Vec<Point>, PathError>
where
    F: FnMut(Point, Point, &Grid<T>) -> bool,
{
    let si = check_in_bounds(grid, Endpoint::Start, start)?;
    let ei = check_in_bounds(grid, Endpoint::End, end)?;

    let mut visited = vec![false; grid.len()];
    let mut parent = vec![NO_PARENT; grid.len()];
    let mut queue = VecDeque::new();

    visited[si] = true;
    queue.push_back(si);
    let mut dequeued = 0usize;

    while let Some(ci) = queue.pop_front() {
        dequeued += 1;
        if ci == ei {
            debug!("bfs: reached {end} from {start} after {dequeued} cells");
            return Ok(rebuild_path(grid, &parent, si, ei));
        }

        let cp = grid.point_of(ci);
        for &d in dirs {
            let np = cp + d;
            let Some(ni) = grid.index_of(np) else {
                continue;
            };
            if visited[ni] || !is_valid_move(cp, np, grid) {
                continue;
            }
            visited[ni] = true;
            parent[ni] = ci;
            queue.push_back(ni);
        }
    }

    debug!("bfs: {end} unreachable from {start} ({dequeued} cells explored)");
    Ok(Vec::new())
}

/// Multi-source breadth-first distance map.
///
/// Every source starts at distance 0; each step costs 1. Duplicate sources
/// are ignored.
///
/// # Errors
///
/// [`PathError::OutOfBounds`] if any source is outside the grid.
pub fn bfs_map<T, F>(
    grid: &Grid<T>,
    sources: &[Point],
    dirs: &[Point],
    mut is_valid_move: F,
) -> Result<DistanceMap, PathError>
where
    F: FnMut(Point, Point, &Grid<T>) -> bool,
{
    let mut map = DistanceMap::new(grid);
    let mut queue = VecDeque::new();

    for &src in sources {
        let si = check_in_bounds(grid, Endpoint::Source, src)?;
        if map.at_index(si).is_finite() {
            continue;
        }
        map.set_index(si, 0.0);
        queue.push_back(si);
    }

    while let Some(ci) = queue.pop_front() {
        let next_dist: Cost = map.at_index(ci) + 1.0;
        let cp = grid.point_of(ci);
        for &d in dirs {
            let np = cp + d;
            let Some(ni) = grid.index_of(np) else {
                continue;
            };
            if map.at_index(ni).is_finite() || !is_valid_move(cp, np, grid) {
                continue;
            }
            map.set_index(ni, next_dist);
            queue.push_back(ni);
        }
    }

    debug!(
        "bfs_map: {} sources reached {} of {} cells",
        sources.len(),
        map.reached(),
        grid.len()
    );
    Ok(map)
}
