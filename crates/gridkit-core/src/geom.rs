//! Geometry primitive: [`Point`].
//!
//! A `Point` is both a grid coordinate and a direction vector.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

use crate::key::{self, KeyError};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer coordinate `(row, col)`. Rows grow down, columns grow right.
///
/// Ordering is row-major: first by `row`, then by `col`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Absolute per-axis distance to `other` as `(|d_row|, |d_col|)`.
    #[inline]
    pub fn abs_diff(self, other: Self) -> (i32, i32) {
        ((self.row - other.row).abs(), (self.col - other.col).abs())
    }

    /// Canonical string key, e.g. `"3,7"`.
    pub fn key(self) -> String {
        key::tuple_to_key(&[self.row, self.col])
    }

    /// Decode a key produced by [`Point::key`].
    pub fn from_key(s: &str) -> Result<Self, KeyError> {
        let fields = key::key_to_tuple(s, &[key::decode::<i32>, key::decode::<i32>])?;
        Ok(Self::new(fields[0], fields[1]))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Point {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.row, p.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Point {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.row * rhs, self.col * rhs)
    }
}
