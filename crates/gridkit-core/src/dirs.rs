//! Direction tables as `(d_row, d_col)` deltas.
//!
//! Searches visit neighbours in table order, so the order below decides
//! which of several equally short paths is returned.

use crate::geom::Point;

/// One step up (toward row 0).
pub const UP: Point = Point::new(-1, 0);
/// One step right.
pub const RIGHT: Point = Point::new(0, 1);
/// One step down.
pub const DOWN: Point = Point::new(1, 0);
/// One step left.
pub const LEFT: Point = Point::new(0, -1);

/// The four orthogonal steps: up, right, down, left.
pub const CARDINAL: [Point; 4] = [UP, RIGHT, DOWN, LEFT];

/// The four diagonal steps: up-right, down-right, down-left, up-left.
pub const DIAGONAL: [Point; 4] = [
    Point::new(-1, 1),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, -1),
];

/// All eight steps, clockwise starting from up.
pub const ALL: [Point; 8] = [
    UP,
    Point::new(-1, 1),
    RIGHT,
    Point::new(1, 1),
    DOWN,
    Point::new(1, -1),
    LEFT,
    Point::new(-1, -1),
];

/// Rotate a direction 90° clockwise.
#[inline]
pub const fn turn_right(d: Point) -> Point {
    Point::new(d.col, -d.row)
}

/// Rotate a direction 90° counter-clockwise.
#[inline]
pub const fn turn_left(d: Point) -> Point {
    Point::new(-d.col, d.row)
}
