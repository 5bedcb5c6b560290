use std::ops::{Add, Mul, Sub};

use serde_tuple::{Deserialize_tuple, Serialize_tuple};

use crate::Size;

/// A point in device coordinates.
///
/// Equality is exact. Points are either reported by the device or computed once from reported
/// samples, so they never accumulate rounding errors.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize_tuple, Deserialize_tuple)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub type Vector = Point;

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn squared_length(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn squared_distance_to(&self, other: Point) -> f64 {
        (other - *self).squared_length()
    }

    /// Maps the point into the unit square of `size`.
    ///
    /// `size` must be positive, see [`Size::is_positive`].
    pub fn normalized_in(&self, size: Size) -> Self {
        Self::new(self.x / size.width, self.y / size.height)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
