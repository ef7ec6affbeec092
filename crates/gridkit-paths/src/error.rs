use std::fmt;

use gridkit_core::{Grid, Point};
use thiserror::Error;

use crate::node::Cost;

/// Which caller-supplied point an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
    /// One of the sources of a distance map.
    Source,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
            Self::Source => write!(f, "source"),
        }
    }
}

/// Errors from a search. An unreachable target is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PathError {
    #[error("{which} {pos} is outside the {height}x{width} grid")]
    OutOfBounds {
        which: Endpoint,
        pos: Point,
        height: usize,
        width: usize,
    },
    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidCost { from: Point, to: Point, cost: Cost },
}

pub(crate) fn check_in_bounds<T>(
    grid: &Grid<T>,
    which: Endpoint,
    pos: Point,
) -> Result<usize, PathError> {
    grid.index_of(pos).ok_or(PathError::OutOfBounds {
        which,
        pos,
        height: grid.height(),
        width: grid.width(),
    })
}

/// Costs must be non-negative; `INFINITY` is allowed and means blocked.
pub(crate) fn check_cost(from: Point, to: Point, cost: Cost) -> Result<Cost, PathError> {
    if cost.is_nan() || cost < 0.0 {
        return Err(PathError::InvalidCost { from, to, cost });
    }
    Ok(cost)
}
