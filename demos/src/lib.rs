//! Shared code for the gridkit demo binaries.
//!
//! [`Maze`] wraps a character grid with start/end markers and runs every
//! search on it, collecting the answers into a [`Report`].

use std::collections::HashSet;
use std::f64::consts::SQRT_2;
use std::fmt;

use gridkit_core::{ALL, CARDINAL, Grid, GridError, Point};
use gridkit_paths::{
    Cost, Heuristic, PathError, astar, bfs, chebyshev, dijkstra, euclidean, manhattan, octile,
    path_cost,
};
use log::info;
use thiserror::Error;

/// Character drawn on cells of the A* path.
pub const PATH_MARK: char = 'o';

/// Selectable A* heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HeuristicKind {
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
}

impl HeuristicKind {
    /// The heuristic function.
    pub fn function(self) -> Heuristic {
        match self {
            Self::Manhattan => manhattan,
            Self::Euclidean => euclidean,
            Self::Chebyshev => chebyshev,
            Self::Octile => octile,
        }
    }

    /// The admissible default for the movement model.
    pub fn default_for(diagonal: bool) -> Self {
        if diagonal { Self::Octile } else { Self::Manhattan }
    }
}

/// Marker characters used to read a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub start: char,
    pub end: char,
    pub wall: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: 'S',
            end: 'E',
            wall: '#',
        }
    }
}

/// Errors from loading or solving a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze has no {0:?} marker")]
    MissingMarker(char),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// A parsed maze.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid<char>,
    start: Point,
    end: Point,
    wall: char,
}

impl Maze {
    /// Parse `text`, locating the start and end markers.
    pub fn parse(text: &str, markers: Markers) -> Result<Self, MazeError> {
        let grid = Grid::parse(text)?;
        let start = grid
            .find(|&c| c == markers.start)
            .ok_or(MazeError::MissingMarker(markers.start))?;
        let end = grid
            .find(|&c| c == markers.end)
            .ok_or(MazeError::MissingMarker(markers.end))?;
        Ok(Self {
            grid,
            start,
            end,
            wall: markers.wall,
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Run BFS, Dijkstra and A* from start to end.
    ///
    /// Cardinal steps cost 1; with `diagonal`, diagonal steps cost `√2`.
    pub fn solve(&self, diagonal: bool, heuristic: HeuristicKind) -> Result<Report, MazeError> {
        let dirs: &[Point] = if diagonal { &ALL } else { &CARDINAL };
        let wall = self.wall;
        let step_cost = |a: Point, b: Point, g: &Grid<char>| -> Cost {
            if g[b] == wall {
                Cost::INFINITY
            } else if a.row != b.row && a.col != b.col {
                SQRT_2
            } else {
                1.0
            }
        };

        let bfs_path = bfs(&self.grid, self.start, self.end, dirs, |_, n, g| {
            g[n] != wall
        })?;
        let shortest = dijkstra(&self.grid, self.start, self.end, dirs, step_cost)?;
        let astar_path = astar(
            &self.grid,
            self.start,
            self.end,
            dirs,
            step_cost,
            heuristic.function(),
        )?;

        info!(
            "solved {}x{} maze from {} to {}",
            self.grid.height(),
            self.grid.width(),
            self.start,
            self.end
        );

        let astar_cost =
            (!astar_path.is_empty()).then(|| path_cost(&self.grid, &astar_path, step_cost));
        Ok(Report {
            bfs_steps: bfs_path.len().checked_sub(1),
            dijkstra_distance: shortest.distance(self.end),
            astar_cost,
            drawing: self.draw(&astar_path),
        })
    }

    /// Render the maze with `path` marked by [`PATH_MARK`].
    pub fn draw(&self, path: &[Point]) -> String {
        let on_path: HashSet<Point> = path.iter().copied().collect();
        self.grid.render(|p, &c| {
            if on_path.contains(&p) && p != self.start && p != self.end {
                PATH_MARK
            } else {
                c
            }
        })
    }
}

/// Answers from [`Maze::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Step count of the BFS path, `None` if unreachable.
    pub bfs_steps: Option<usize>,
    /// Dijkstra distance, `INFINITY` if unreachable.
    pub dijkstra_distance: Cost,
    /// Cost of the A* path, `None` if unreachable.
    pub astar_cost: Option<Cost>,
    /// The maze with the A* path drawn in.
    pub drawing: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bfs_steps {
            Some(n) => writeln!(f, "BFS steps:         {n}")?,
            None => writeln!(f, "BFS steps:         unreachable")?,
        }
        if self.dijkstra_distance.is_finite() {
            writeln!(f, "Dijkstra distance: {:.3}", self.dijkstra_distance)?;
        } else {
            writeln!(f, "Dijkstra distance: unreachable")?;
        }
        match self.astar_cost {
            Some(c) => writeln!(f, "A* path cost:      {c:.3}")?,
            None => writeln!(f, "A* path cost:      unreachable")?,
        }
        writeln!(f)?;
        write!(f, "{}", self.drawing)
    }
}
