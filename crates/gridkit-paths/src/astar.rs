use std::collections::BinaryHeap;

use gridkit_core::{Grid, Point};
use log::debug;

use crate::error::{Endpoint, PathError, check_cost, check_in_bounds};
use crate::node::{Cost, NO_PARENT, NodeRef, rebuild_path};

/// Shortest path from `start` to `end` using A*.
///
/// `heuristic(current, end)` must never overestimate the remaining cost
/// (see [`manhattan`](crate::manhattan) and friends) for the result to be
/// optimal. Returns the path from `start` to `end` inclusive, or an empty
/// `Vec` if `end` is unreachable.
///
/// # Errors
///
/// [`PathError::OutOfBounds`] if `start` or `end` is outside the grid,
/// [`PathError::InvalidCost`] if `get_cost` returns a negative or NaN cost.
pub fn astar<T, F, H>(
    grid: &Grid<T>,
    start: Point,
    end: Point,
    dirs: &[Point],
    mut get_cost: F,
    heuristic: H,
) -> Result<Vec<Point>, PathError>
where
    F: FnMut(Point, Point, &Grid<T>) -> Cost,
    H: Fn(Point, Point) -> Cost,
{
    let start_idx = check_in_bounds(grid, Endpoint::Start, start)?;
    let goal_idx = check_in_bounds(grid, Endpoint::End, end)?;

    if start_idx == goal_idx {
        return Ok(vec![start]);
    }

    let mut g = vec![Cost::INFINITY; grid.len()];
    let mut parent = vec![NO_PARENT; grid.len()];
    let mut closed = vec![false; grid.len()];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    g[start_idx] = 0.0;
    let h = heuristic(start, end);
    open.push(NodeRef {
        idx: start_idx,
        f: h,
        h,
        seq,
    });

    let mut expanded = 0usize;
    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let ci = current.idx;

        // Skip stale entries.
        if closed[ci] {
            continue;
        }
        if ci == goal_idx {
            break 'search true;
        }
        closed[ci] = true;
        expanded += 1;

        let current_g = g[ci];
        let cp = grid.point_of(ci);
        for &d in dirs {
            let np = cp + d;
            let Some(ni) = grid.index_of(np) else {
                continue;
            };
            if closed[ni] {
                continue;
            }
            let tentative_g = current_g + check_cost(cp, np, get_cost(cp, np, grid))?;
            if tentative_g >= g[ni] {
                continue;
            }
            g[ni] = tentative_g;
            parent[ni] = ci;
            let h = heuristic(np, end);
            seq += 1;
            open.push(NodeRef {
                idx: ni,
                f: tentative_g + h,
                h,
                seq,
            });
        }
    };

    if !found {
        debug!("astar: {end} unreachable from {start} ({expanded} cells expanded)");
        return Ok(Vec::new());
    }

    debug!(
        "astar: {start} -> {end} cost {} after expanding {expanded} cells",
        g[goal_idx]
    );
    Ok(rebuild_path(grid, &parent, start_idx, goal_idx))
}

/// Sum of `get_cost` over consecutive steps of `path`.
///
/// Zero for paths with fewer than two points.
pub fn path_cost<T, F>(grid: &Grid<T>, path: &[Point], mut get_cost: F) -> Cost
where
    F: FnMut(Point, Point, &Grid<T>) -> Cost,
{
    path.windows(2).map(|w| get_cost(w[0], w[1], grid)).sum()
}
