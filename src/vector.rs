use std::ops::{Add, Sub};

use crate::coordinate::{Coordinate, Sqrt};
use crate::point::Point;

/// A free vector. Identical in storage to [`Point`], but carries algebraic
/// operations rather than positional ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vec2<C> {
  pub x: C,
  pub y: C,
}

impl<C: Coordinate> Vec2<C> {
  pub fn new(x: C, y: C) -> Self {
    Vec2 { x, y }
  }

  pub fn zero() -> Self {
    Vec2 {
      x: C::zero(),
      y: C::zero(),
    }
  }

  pub fn dot(self, other: Vec2<C>) -> C {
    self.x * other.x + self.y * other.y
  }

  pub fn magnitude(self) -> C
  where
    C: Sqrt,
  {
    self.dot(self).sqrt()
  }

  /// `(0, 0)` when `self` has zero magnitude, otherwise `self` scaled to
  /// unit length.
  pub fn normalize(self) -> Self
  where
    C: Sqrt,
  {
    let m = self.magnitude();
    if m == C::zero() {
      Vec2::zero()
    } else {
      Vec2::new(self.x / m, self.y / m)
    }
  }

  /// The normalized left-perpendicular of `self`: `normalize(-y, x)`.
  pub fn perpendicular_axis(self) -> Self
  where
    C: Sqrt,
  {
    Vec2::new(-self.y, self.x).normalize()
  }
}

impl<C: Coordinate> From<Point<C>> for Vec2<C> {
  fn from(p: Point<C>) -> Self {
    Vec2::new(p.x, p.y)
  }
}

impl<C: Coordinate> Add for Vec2<C> {
  type Output = Vec2<C>;
  fn add(self, other: Vec2<C>) -> Vec2<C> {
    Vec2::new(self.x + other.x, self.y + other.y)
  }
}

impl<C: Coordinate> Sub for Vec2<C> {
  type Output = Vec2<C>;
  fn sub(self, other: Vec2<C>) -> Vec2<C> {
    Vec2::new(self.x - other.x, self.y - other.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_zero_vector_is_zero() {
    assert_eq!(Vec2::<i32>::zero().normalize(), Vec2::zero());
  }

  #[test]
  fn perpendicular_axis_is_left_turn() {
    let v = Vec2::new(1, 0);
    assert_eq!(v.perpendicular_axis(), Vec2::new(0, 1));
  }

  #[test]
  fn dot_product() {
    assert_eq!(Vec2::new(2, 3).dot(Vec2::new(4, 5)), 23);
  }
}
