//! Polygon-polygon overlap via the Separating Axis Theorem.
//!
//! SAT is exact only for convex polygons. This implementation applies it
//! unconditionally to general simple polygons, per spec: for non-convex
//! inputs the result may overapproximate (false positives). Documented
//! limitation, not a bug-fix target.

use crate::coordinate::{Coordinate, Sqrt};
use crate::polygon::SimplePolygon;
use crate::vector::Vec2;

/// True iff `a` and `b` overlap (or no separating axis could be found).
pub fn intersects<C: Coordinate + Sqrt>(a: &SimplePolygon<C>, b: &SimplePolygon<C>) -> bool {
  for polygon in [a, b] {
    let vertices = polygon.vertices();
    let n = vertices.len();
    for i in 0..n {
      let edge = Vec2::from(vertices[(i + 1) % n]) - Vec2::from(vertices[i]);
      let axis = edge.perpendicular_axis();
      let (a_min, a_max) = project(a, axis);
      let (b_min, b_max) = project(b, axis);
      if a_max < b_min || b_max < a_min {
        return false;
      }
    }
  }
  true
}

fn project<C: Coordinate>(polygon: &SimplePolygon<C>, axis: Vec2<C>) -> (C, C) {
  let mut projections = polygon.vertices().iter().map(|&p| Vec2::from(p).dot(axis));
  let first = projections.next().unwrap_or(C::zero());
  projections.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::point::Point;

  fn square(x: i32, y: i32, side: i32) -> SimplePolygon<i32> {
    SimplePolygon::new(vec![
      Point::new(x, y),
      Point::new(x + side, y),
      Point::new(x + side, y + side),
      Point::new(x, y + side),
    ])
  }

  #[test]
  fn overlapping_squares_intersect() {
    assert!(intersects(&square(0, 0, 10), &square(5, 5, 10)));
  }

  #[test]
  fn disjoint_squares_do_not_intersect() {
    assert!(!intersects(&square(0, 0, 10), &square(100, 100, 10)));
  }

  #[test]
  fn touching_squares_intersect() {
    assert!(intersects(&square(0, 0, 10), &square(10, 0, 10)));
  }

  #[test]
  fn self_intersection_property() {
    let p = square(0, 0, 10);
    assert!(intersects(&p, &p));
  }
}
