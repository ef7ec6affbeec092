use std::collections::BinaryHeap;

use gridkit_core::{Grid, Point};
use log::debug;

use crate::error::{Endpoint, PathError, check_cost, check_in_bounds};
use crate::node::{Cost, DistanceMap, NO_PARENT, NodeRef, rebuild_path};

/// Output of [`dijkstra`].
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraResult {
    /// Best known cost per cell. Cells settled before the search stopped
    /// hold their exact shortest distance; cells discovered but not yet
    /// settled hold an upper bound; all others are `INFINITY`.
    pub distances: DistanceMap,
    /// Path from start to end inclusive. When `end` is unreachable this is
    /// `[start, end]`, so check [`is_reachable`](Self::is_reachable) rather
    /// than the path length.
    pub path: Vec<Point>,
}

impl DijkstraResult {
    /// Shortest distance to `p` (`INFINITY` if not reached).
    #[inline]
    pub fn distance(&self, p: Point) -> Cost {
        self.distances.get(p)
    }

    /// Whether `p` was reached.
    #[inline]
    pub fn is_reachable(&self, p: Point) -> bool {
        self.distances.is_reachable(p)
    }
}

/// Weighted shortest path from `start` to `end`.
///
/// `get_cost(current, next, grid)` prices each step; return `INFINITY` for
/// blocked cells. The search stops as soon as `end` is settled, or when no
/// reachable cell remains.
///
/// # Errors
///
/// [`PathError::OutOfBounds`] if `start` or `end` is outside the grid,
/// [`PathError::InvalidCost`] if `get_cost` returns a negative or NaN cost.
pub fn dijkstra<T, F>(
    grid: &Grid<T>,
    start: Point,
    end: Point,
    dirs: &[Point],
    get_cost: F,
) -> Result<DijkstraResult, PathError>
where
    F: FnMut(Point, Point, &Grid<T>) -> Cost,
{
    let si = check_in_bounds(grid, Endpoint::Start, start)?;
    let ei = check_in_bounds(grid, Endpoint::End, end)?;

    let search = run(grid, &[si], Some(ei), dirs, get_cost)?;
    let path = rebuild_path(grid, &search.parent, si, ei);

    let reached = search.distances.at_index(ei).is_finite();
    debug!(
        "dijkstra: {start} -> {end} {} after settling {} of {} cells",
        if reached { "found" } else { "unreachable" },
        search.settled,
        grid.len()
    );

    Ok(DijkstraResult {
        distances: search.distances,
        path,
    })
}

/// Multi-source Dijkstra distance map over the whole reachable grid.
///
/// # Errors
///
/// [`PathError::OutOfBounds`] if any source is outside the grid,
/// [`PathError::InvalidCost`] for negative or NaN costs.
pub fn dijkstra_map<T, F>(
    grid: &Grid<T>,
    sources: &[Point],
    dirs: &[Point],
    get_cost: F,
) -> Result<DistanceMap, PathError>
where
    F: FnMut(Point, Point, &Grid<T>) -> Cost,
{
    let seeds = sources
        .iter()
        .map(|&p| check_in_bounds(grid, Endpoint::Source, p))
        .collect::<Result<Vec<_>, _>>()?;

    let search = run(grid, &seeds, None, dirs, get_cost)?;
    debug!(
        "dijkstra_map: {} sources settled {} of {} cells",
        sources.len(),
        search.settled,
        grid.len()
    );
    Ok(search.distances)
}

struct Search {
    distances: DistanceMap,
    parent: Vec<usize>,
    settled: usize,
}

fn run<T, F>(
    grid: &Grid<T>,
    seeds: &[usize],
    target: Option<usize>,
    dirs: &[Point],
    mut get_cost: F,
) -> Result<Search, PathError>
where
    F: FnMut(Point, Point, &Grid<T>) -> Cost,
{
    let mut distances = DistanceMap::new(grid);
    let mut parent = vec![NO_PARENT; grid.len()];
    let mut done = vec![false; grid.len()];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    for &si in seeds {
        if distances.at_index(si) == 0.0 {
            continue;
        }
        distances.set_index(si, 0.0);
        open.push(NodeRef {
            idx: si,
            f: 0.0,
            h: 0.0,
            seq,
        });
        seq += 1;
    }

    let mut settled = 0;
    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Stale entry left behind by a later improvement.
        if done[ci] {
            continue;
        }
        done[ci] = true;
        settled += 1;

        if Some(ci) == target {
            break;
        }

        let current_g = distances.at_index(ci);
        let cp = grid.point_of(ci);
        for &d in dirs {
            let np = cp + d;
            let Some(ni) = grid.index_of(np) else {
                continue;
            };
            if done[ni] {
                continue;
            }
            let cost = check_cost(cp, np, get_cost(cp, np, grid))?;
            let tentative = current_g + cost;
            if tentative < distances.at_index(ni) {
                distances.set_index(ni, tentative);
                parent[ni] = ci;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                    h: 0.0,
                    seq,
                });
                seq += 1;
            }
        }
    }

    Ok(Search {
        distances,
        parent,
        settled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::{ALL, CARDINAL};

    fn unit(_: Point, _: Point, _: &Grid<char>) -> Cost {
        1.0
    }

    fn walls(_: Point, next: Point, g: &Grid<char>) -> Cost {
        if g[next] == '#' { Cost::INFINITY } else { 1.0 }
    }

    #[test]
    fn open_3x3_distance_is_four() {
        let g = Grid::filled(3, 3, '.');
        let end = Point::new(2, 2);
        let r = dijkstra(&g, Point::new(0, 0), end, &CARDINAL, unit).unwrap();
        assert_eq!(r.distance(end), 4.0);
        assert_eq!(r.path.len(), 5);
        assert_eq!(r.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(r.path.last(), Some(&end));
    }

    #[test]
    fn wall_in_the_middle_keeps_distance_four() {
        let g = Grid::parse("...\n.#.\n...").unwrap();
        let end = Point::new(2, 2);
        let r = dijkstra(&g, Point::new(0, 0), end, &CARDINAL, walls).unwrap();
        assert_eq!(r.distance(end), 4.0);
        assert!(!r.path.contains(&Point::new(1, 1)));
    }

    #[test]
    fn single_cell_distance_to_self_is_zero() {
        let g = Grid::filled(1, 1, '.');
        let p = Point::new(0, 0);
        let r = dijkstra(&g, p, p, &CARDINAL, unit).unwrap();
        assert_eq!(r.distance(p), 0.0);
        assert_eq!(r.path, vec![p]);
    }

    #[test]
    fn unreachable_end_keeps_start_end_path() {
        let g = Grid::parse("..#.").unwrap();
        let (start, end) = (Point::new(0, 0), Point::new(0, 3));
        let r = dijkstra(&g, start, end, &CARDINAL, walls).unwrap();
        assert!(!r.is_reachable(end));
        assert!(r.distance(end).is_infinite());
        assert_eq!(r.path, vec![start, end]);
        assert_eq!(r.distance(Point::new(0, 1)), 1.0);
    }

    #[test]
    fn weighted_cells_prefer_cheap_detour() {
        // Digits are the cost of entering a cell.
        let g = Grid::parse_with("191\n111", |c| c.to_digit(10)).unwrap();
        let end = Point::new(0, 2);
        let r = dijkstra(&g, Point::new(0, 0), end, &CARDINAL, |_, n, g: &Grid<u32>| {
            Cost::from(g[n])
        })
        .unwrap();
        assert_eq!(r.distance(end), 4.0);
        assert_eq!(
            r.path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(0, 2)
            ]
        );
    }

    #[test]
    fn diagonal_costs() {
        let g = Grid::filled(4, 4, '.');
        let end = Point::new(3, 3);
        let r = dijkstra(&g, Point::new(0, 0), end, &ALL, |a, b, _| {
            if a.row != b.row && a.col != b.col {
                std::f64::consts::SQRT_2
            } else {
                1.0
            }
        })
        .unwrap();
        assert!((r.distance(end) - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert_eq!(r.path.len(), 4);
    }

    #[test]
    fn negative_and_nan_costs_rejected() {
        let g = Grid::filled(2, 2, '.');
        let (s, e) = (Point::new(0, 0), Point::new(1, 1));
        let err = dijkstra(&g, s, e, &CARDINAL, |_, _, _| -1.0).unwrap_err();
        assert!(matches!(err, PathError::InvalidCost { .. }));
        let err = dijkstra(&g, s, e, &CARDINAL, |_, _, _| Cost::NAN).unwrap_err();
        assert!(matches!(err, PathError::InvalidCost { .. }));
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let g = Grid::filled(2, 2, '.');
        assert!(dijkstra(&g, Point::new(0, 0), Point::new(0, 9), &CARDINAL, unit).is_err());
        assert!(dijkstra(&g, Point::new(5, 0), Point::new(0, 0), &CARDINAL, unit).is_err());
    }

    #[test]
    fn map_covers_every_reachable_cell() {
        let g = Grid::parse("...\n##.\n...").unwrap();
        let map = dijkstra_map(&g, &[Point::new(0, 0)], &CARDINAL, walls).unwrap();
        assert_eq!(map.reached(), 7);
        assert_eq!(map.get(Point::new(2, 0)), 6.0);
        assert!(!map.is_reachable(Point::new(1, 0)));
        assert_eq!(map.farthest().map(|n| n.pos), Some(Point::new(2, 0)));
    }

    #[test]
    fn map_with_no_sources_is_empty() {
        let g = Grid::filled(2, 2, '.');
        let map = dijkstra_map(&g, &[], &CARDINAL, unit).unwrap();
        assert_eq!(map.reached(), 0);
    }
}
