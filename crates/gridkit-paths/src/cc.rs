//! Connected-region labelling.

use gridkit_core::{Grid, Point};
use log::debug;

use crate::error::{Endpoint, PathError, check_in_bounds};

const UNLABELLED: usize = usize::MAX;

/// Region labels for every cell of a grid, produced by [`regions`].
///
/// Labels are dense, `0..count()`, assigned in row-major order of each
/// region's first cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Regions {
    labels: Grid<usize>,
    sizes: Vec<usize>,
}

impl Regions {
    /// Label of the region containing `p`, `None` if out of bounds.
    pub fn label(&self, p: Point) -> Option<usize> {
        self.labels.get(p).copied()
    }

    /// Number of regions.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Cell count of each region, indexed by label.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Cells of region `label` in row-major order.
    pub fn cells(&self, label: usize) -> Vec<Point> {
        self.labels.positions(|&l| l == label)
    }

    /// The label grid itself.
    pub fn labels(&self) -> &Grid<usize> {
        &self.labels
    }
}

/// Label every cell with a connected-region id.
///
/// Two neighbouring cells (along `dirs`) share a region when
/// `same_region(current, next, grid)` holds. Use a symmetric predicate, e.g.
/// "same plant type", otherwise the labelling depends on scan order.
pub fn regions<T, F>(grid: &Grid<T>, dirs: &[Point], mut same_region: F) -> Regions
where
    F: FnMut(Point, Point, &Grid<T>) -> bool,
{
    let mut labels = grid.map(|_, _| UNLABELLED);
    let mut sizes = Vec::new();
    let mut stack = Vec::new();

    for seed in grid.points() {
        if labels[seed] != UNLABELLED {
            continue;
        }
        let label = sizes.len();
        let mut size = 0;

        // Iterative DFS from `seed`.
        labels[seed] = label;
        stack.push(seed);
        while let Some(cp) = stack.pop() {
            size += 1;
            for &d in dirs {
                let np = cp + d;
                if labels.get(np) != Some(&UNLABELLED) || !same_region(cp, np, grid) {
                    continue;
                }
                labels[np] = label;
                stack.push(np);
            }
        }
        sizes.push(size);
    }

    debug!("regions: {} regions over {} cells", sizes.len(), grid.len());
    Regions { labels, sizes }
}

/// Flood-fill from `start` and return every connected cell, `start` first.
///
/// # Errors
///
/// [`PathError::OutOfBounds`] if `start` is outside the grid.
pub fn flood_fill<T, F>(
    grid: &Grid<T>,
    start: Point,
    dirs: &[Point],
    mut is_valid_move: F,
) -> Result<Vec<Point>, PathError>
where
    F: FnMut(Point, Point, &Grid<T>) -> bool,
{
    let si = check_in_bounds(grid, Endpoint::Start, start)?;
    let mut seen = vec![false; grid.len()];
    seen[si] = true;

    let mut result = vec![start];
    let mut stack = vec![start];
    while let Some(cp) = stack.pop() {
        for &d in dirs {
            let np = cp + d;
            let Some(ni) = grid.index_of(np) else {
                continue;
            };
            if seen[ni] || !is_valid_move(cp, np, grid) {
                continue;
            }
            seen[ni] = true;
            result.push(np);
            stack.push(np);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::{ALL, CARDINAL};

    fn same_char(a: Point, b: Point, g: &Grid<char>) -> bool {
        g[a] == g[b]
    }

    const GARDEN: &str = "\
AAAA
BBCD
BBCC
EEEC
";

    #[test]
    fn garden_plots() {
        let g = Grid::parse(GARDEN).unwrap();
        let r = regions(&g, &CARDINAL, same_char);
        assert_eq!(r.count(), 5);
        assert_eq!(r.sizes(), &[4, 4, 4, 1, 3]);
        assert_eq!(r.label(Point::new(0, 0)), Some(0));
        assert_eq!(r.label(Point::new(3, 3)), r.label(Point::new(1, 2)));
        assert_eq!(r.cells(3), vec![Point::new(1, 3)]);
        assert_eq!(r.label(Point::new(9, 9)), None);
    }

    #[test]
    fn diagonal_connectivity_merges_regions() {
        let g = Grid::parse("X.\n.X").unwrap();
        assert_eq!(regions(&g, &CARDINAL, same_char).count(), 4);
        assert_eq!(regions(&g, &ALL, same_char).count(), 2);
    }

    #[test]
    fn sizes_sum_to_grid_len() {
        let g = Grid::parse(GARDEN).unwrap();
        let r = regions(&g, &CARDINAL, same_char);
        assert_eq!(r.sizes().iter().sum::<usize>(), g.len());
        assert_eq!(r.labels().len(), g.len());
    }

    #[test]
    fn flood_fill_stops_at_walls() {
        let g = Grid::parse("..#.\n..#.").unwrap();
        let filled = flood_fill(&g, Point::new(0, 0), &CARDINAL, |_, n, g: &Grid<char>| {
            g[n] != '#'
        })
        .unwrap();
        assert_eq!(filled.len(), 4);
        assert_eq!(filled[0], Point::new(0, 0));
        assert!(!filled.contains(&Point::new(0, 3)));
        assert!(flood_fill(&g, Point::new(2, 0), &CARDINAL, same_char).is_err());
    }
}
