use gridkit_core::Point;

use crate::node::Cost;

/// Heuristic signature accepted by [`astar`](crate::astar).
pub type Heuristic = fn(Point, Point) -> Cost;

/// Manhattan (L1) distance. Admissible for cardinal moves of cost >= 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    let (dr, dc) = a.abs_diff(b);
    Cost::from(dr + dc)
}

/// Euclidean (L2) distance. Admissible when moves cost their length.
#[inline]
pub fn euclidean(a: Point, b: Point) -> Cost {
    let (dr, dc) = a.abs_diff(b);
    Cost::from(dr).hypot(Cost::from(dc))
}

/// Chebyshev (L∞) distance. Admissible when diagonals cost the same as
/// cardinal moves.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> Cost {
    let (dr, dc) = a.abs_diff(b);
    Cost::from(dr.max(dc))
}

/// Octile distance. Admissible when diagonals cost `√2` times a cardinal
/// move.
#[inline]
pub fn octile(a: Point, b: Point) -> Cost {
    let (dr, dc) = a.abs_diff(b);
    let (hi, lo) = (Cost::from(dr.max(dc)), Cost::from(dr.min(dc)));
    hi + (std::f64::consts::SQRT_2 - 1.0) * lo
}
