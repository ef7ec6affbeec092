//! The [`Grid`] type — a rectangular 2D grid of cells of any type.
//!
//! Cells are stored row-major in a single `Vec`. A grid is always
//! rectangular: constructors reject ragged input.

use std::fmt;
use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::geom::Point;

/// Errors from building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows of zero width.
    #[error("grid is empty")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character could not be converted into a cell.
    #[error("invalid cell {ch:?} at ({row}, {col})")]
    Cell { row: usize, col: usize, ch: char },
    /// The cell count does not match the stated dimensions.
    #[error("a {height}x{width} grid cannot hold {len} cells")]
    Size {
        width: usize,
        height: usize,
        len: usize,
    },
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular 2D grid addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

/// Unchecked wire form of a [`Grid`], validated before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, GridError> {
        let RawGrid {
            cells,
            width,
            height,
        } = raw;
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::Size {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Create a `height` x `width` grid filled with `value`.
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Self {
            cells: vec![value; width * height],
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows. All rows must have the same length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (row, r) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(r);
            let found = cells.len() - before;
            if row == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse text into a grid, converting each character with `f`.
    ///
    /// Lines are trimmed of trailing whitespace and blank lines are skipped.
    /// `f` returning `None` yields [`GridError::Cell`]. The `row` reported by
    /// [`GridError::Cell`] and [`GridError::Ragged`] is the 0-based line
    /// number in `text`, blank lines included.
    pub fn parse_with(text: &str, f: impl Fn(char) -> Option<T>) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        let mut line_nos = Vec::new();
        for (row, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let cells = line
                .chars()
                .enumerate()
                .map(|(col, ch)| f(ch).ok_or(GridError::Cell { row, col, ch }))
                .collect::<Result<Vec<T>, _>>()?;
            rows.push(cells);
            line_nos.push(row);
        }
        Self::from_rows(rows).map_err(|e| match e {
            GridError::Ragged {
                row,
                expected,
                found,
            } => GridError::Ragged {
                row: line_nos[row],
                expected,
                found,
            },
            other => other,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Never true for a constructed grid
    /// unless built with [`Grid::filled`] and a zero dimension.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `0 <= row < height` and `0 <= col < width`.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.in_bounds(p.row, p.col)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width + p.col as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn point_of(&self, idx: usize) -> Point {
        Point::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index_of(p).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `p`, returning the old value. No-op if `p` is
    /// out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> Option<T> {
        self.get_mut(p).map(|c| std::mem::replace(c, value))
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.height {
            return None;
        }
        Some(&self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Row-major iterator over every point.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (h, w) = (self.height as i32, self.width as i32);
        (0..h).flat_map(move |r| (0..w).map(move |c| Point::new(r, c)))
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (self.point_of(i), c))
    }

    /// First point (row-major) whose cell satisfies `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Point> {
        self.cells
            .iter()
            .position(pred)
            .map(|i| self.point_of(i))
    }

    /// Every point (row-major) whose cell satisfies `pred`.
    pub fn positions(&self, pred: impl Fn(&T) -> bool) -> Vec<Point> {
        self.iter()
            .filter(|(_, c)| pred(*c))
            .map(|(p, _)| p)
            .collect()
    }

    /// In-bounds neighbours of `p` along `dirs`, in `dirs` order.
    pub fn neighbors<'a>(
        &'a self,
        p: Point,
        dirs: &'a [Point],
    ) -> impl Iterator<Item = Point> + 'a {
        dirs.iter().map(move |&d| p + d).filter(move |&n| self.contains(n))
    }

    /// Build a same-shaped grid by mapping every cell.
    pub fn map<U>(&self, f: impl Fn(Point, &T) -> U) -> Grid<U> {
        Grid {
            cells: self.iter().map(|(p, c)| f(p, c)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Render through a per-cell char mapping, one line per row.
    pub fn render(&self, f: impl Fn(Point, &T) -> char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 && i % self.width == 0 {
                out.push('\n');
            }
            out.push(f(self.point_of(i), c));
        }
        out
    }
}

impl Grid<char> {
    /// Parse text into a character grid.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::parse_with(text, Some)
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, &c| c))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    /// Panics if `p` is out of bounds; use [`Grid::get`] otherwise.
    fn index(&self, p: Point) -> &T {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!("point {p} outside {}x{} grid", self.height, self.width),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        match self.index_of(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("point {p} outside {}x{} grid", self.height, self.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dirs::{ALL, CARDINAL};

    const MAZE: &str = "\
#####
#S..#
#.#E#
#####
";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!(g.height(), 4);
        assert_eq!(g.width(), 5);
        assert_eq!(g[Point::new(1, 1)], 'S');
        assert_eq!(g.find(|&c| c == 'E'), Some(Point::new(2, 3)));
    }

    #[test]
    fn display_round_trips_text() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!(g.to_string(), MAZE.trim_end());
    }

    #[test]
    fn in_bounds_edges() {
        let g = Grid::filled(3, 4, '.');
        assert!(g.in_bounds(0, 0));
        assert!(g.in_bounds(2, 3));
        assert!(!g.in_bounds(3, 0));
        assert!(!g.in_bounds(0, 4));
        assert!(!g.in_bounds(-1, 0));
        assert!(!g.in_bounds(0, -1));
        assert!(!g.in_bounds(i32::MIN, i32::MAX));
    }

    #[test]
    fn in_bounds_matches_dimensions_exhaustively() {
        let g = Grid::filled(2, 3, 0u8);
        for r in -2..5 {
            for c in -2..6 {
                let expected = (0..2).contains(&r) && (0..3).contains(&c);
                assert_eq!(g.in_bounds(r, c), expected, "({r}, {c})");
            }
        }
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::parse("abc\nab\n").unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Grid::<char>::parse("\n\n").unwrap_err(), GridError::Empty);
    }

    #[test]
    fn parse_errors_report_text_line_numbers() {
        let err = Grid::parse("abc\n\nab\n").unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 2,
                expected: 3,
                found: 2
            }
        );
        let err = Grid::parse_with("12\n\n\n3x", |c| c.to_digit(10)).unwrap_err();
        assert_eq!(
            err,
            GridError::Cell {
                row: 3,
                col: 1,
                ch: 'x'
            }
        );
        // Blank lines are still skipped on success.
        let g = Grid::parse("ab\n\ncd").unwrap();
        assert_eq!(g.height(), 2);
    }

    #[test]
    fn parse_with_conversion() {
        let g = Grid::parse_with("12\n34", |c| c.to_digit(10)).unwrap();
        assert_eq!(g[Point::new(1, 0)], 3);
        let err = Grid::parse_with("1x", |c| c.to_digit(10)).unwrap_err();
        assert_eq!(
            err,
            GridError::Cell {
                row: 0,
                col: 1,
                ch: 'x'
            }
        );
    }

    #[test]
    fn get_set_and_index() {
        let mut g = Grid::filled(2, 2, 0);
        assert_eq!(g.set(Point::new(1, 1), 7), Some(0));
        assert_eq!(g.get(Point::new(1, 1)), Some(&7));
        assert_eq!(g.set(Point::new(5, 5), 1), None);
        assert_eq!(g.get(Point::new(-1, 0)), None);
        g[Point::new(0, 1)] = 3;
        assert_eq!(g.row(0), Some(&[0, 3][..]));
    }

    #[test]
    fn neighbors_filter_bounds_and_keep_order() {
        let g = Grid::filled(3, 3, ());
        let corner: Vec<_> = g.neighbors(Point::new(0, 0), &CARDINAL).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert_eq!(g.neighbors(Point::new(1, 1), &ALL).count(), 8);
    }

    #[test]
    fn iteration_is_row_major() {
        let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let pts: Vec<_> = g.points().collect();
        assert_eq!(pts[1], Point::new(0, 1));
        assert_eq!(pts[2], Point::new(1, 0));
        let vals: Vec<_> = g.iter().map(|(_, &v)| v).collect();
        assert_eq!(vals, vec![1, 2, 3, 4]);
        assert_eq!(g.positions(|&v| v % 2 == 0), vec![Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn map_and_render() {
        let g = Grid::parse("#.\n.#").unwrap();
        let walls = g.map(|_, &c| c == '#');
        assert!(walls[Point::new(0, 0)]);
        assert_eq!(walls.render(|_, &w| if w { 'X' } else { ' ' }), "X \n X");
    }
}
