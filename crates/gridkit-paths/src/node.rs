use std::cmp::Ordering;

use gridkit_core::{Grid, Point};

/// Edge and path cost. `INFINITY` means impassable or unreached.
pub type Cost = f64;

/// Parent link of a cell with no predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A position with an associated cost, yielded by [`DistanceMap::iter`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: Cost,
}

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Heap entry referring to a flat cell index, ordered for `BinaryHeap` so
/// that the smallest `f` pops first. Ties go to the smaller `h`, then to the
/// entry pushed first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: Cost,
    pub(crate) h: Cost,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// DistanceMap
// ---------------------------------------------------------------------------

/// Per-cell accumulated cost from the search sources.
///
/// Cells never reached hold `INFINITY`; so do points outside the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMap {
    dist: Vec<Cost>,
    width: usize,
    height: usize,
}

impl DistanceMap {
    pub(crate) fn new<T>(grid: &Grid<T>) -> Self {
        Self {
            dist: vec![Cost::INFINITY; grid.len()],
            width: grid.width(),
            height: grid.height(),
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row as usize >= self.height || p.col as usize >= self.width
        {
            return None;
        }
        Some(p.row as usize * self.width + p.col as usize)
    }

    #[inline]
    pub(crate) fn at_index(&self, idx: usize) -> Cost {
        self.dist[idx]
    }

    #[inline]
    pub(crate) fn set_index(&mut self, idx: usize, cost: Cost) {
        self.dist[idx] = cost;
    }

    /// Cost to reach `p`, `INFINITY` if unreached or out of range.
    #[inline]
    pub fn get(&self, p: Point) -> Cost {
        self.idx(p).map_or(Cost::INFINITY, |i| self.dist[i])
    }

    /// Whether `p` was reached with a finite cost.
    #[inline]
    pub fn is_reachable(&self, p: Point) -> bool {
        self.get(p).is_finite()
    }

    /// Reached cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = PathNode> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_finite())
            .map(|(i, &cost)| PathNode {
                pos: Point::new((i / self.width) as i32, (i % self.width) as i32),
                cost,
            })
    }

    /// Number of reached cells.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|c| c.is_finite()).count()
    }

    /// The reached cell with the greatest cost, first in row-major order
    /// on ties.
    pub fn farthest(&self) -> Option<PathNode> {
        self.iter()
            .fold(None, |best: Option<PathNode>, n| match best {
                Some(b) if b.cost >= n.cost => Some(b),
                _ => Some(n),
            })
    }
}

/// Walk parent links from `end` back to `start`.
///
/// If the chain breaks before reaching `start`, the partial chain is kept
/// and `start` is still prepended.
pub(crate) fn rebuild_path<T>(
    grid: &Grid<T>,
    parent: &[usize],
    start: usize,
    end: usize,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = end;
    while ci != start {
        path.push(grid.point_of(ci));
        let pi = parent[ci];
        if pi == NO_PARENT {
            break;
        }
        ci = pi;
    }
    path.push(grid.point_of(start));
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(idx: usize, f: Cost, h: Cost, seq: u64) -> NodeRef {
        NodeRef { idx, f, h, seq }
    }

    #[test]
    fn heap_pops_lowest_f_then_h_then_fifo() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(0, 5.0, 0.0, 0));
        heap.push(entry(1, 3.0, 2.0, 1));
        heap.push(entry(2, 3.0, 1.0, 2));
        heap.push(entry(3, 3.0, 1.0, 3));
        heap.push(entry(4, 1.0, 0.0, 4));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|n| n.idx).collect();
        assert_eq!(order, vec![4, 2, 3, 1, 0]);
    }

    #[test]
    fn distance_map_queries() {
        let grid = Grid::filled(2, 3, ());
        let mut dm = DistanceMap::new(&grid);
        assert_eq!(dm.reached(), 0);
        dm.set_index(0, 0.0);
        dm.set_index(4, 2.0);
        dm.set_index(5, 2.0);
        assert_eq!(dm.get(Point::new(1, 1)), 2.0);
        assert!(dm.get(Point::new(0, 1)).is_infinite());
        assert!(dm.get(Point::new(-1, 0)).is_infinite());
        assert!(!dm.is_reachable(Point::new(2, 0)));
        assert_eq!(dm.reached(), 3);
        assert_eq!(
            dm.farthest(),
            Some(PathNode {
                pos: Point::new(1, 1),
                cost: 2.0
            })
        );
    }

    #[test]
    fn rebuild_complete_and_broken_chains() {
        let grid = Grid::filled(1, 4, ());
        let mut parent = vec![NO_PARENT; 4];
        parent[1] = 0;
        parent[2] = 1;
        assert_eq!(
            rebuild_path(&grid, &parent, 0, 2),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
        );
        // Cell 3 was never linked: start is prepended to the lone end.
        assert_eq!(
            rebuild_path(&grid, &parent, 0, 3),
            vec![Point::new(0, 0), Point::new(0, 3)]
        );
        assert_eq!(rebuild_path(&grid, &parent, 0, 0), vec![Point::new(0, 0)]);
    }
}
