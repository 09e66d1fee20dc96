//! Translation, the only affine transform this crate supports (see
//! Non-goals: affine transforms beyond translation are out of scope).

use crate::coordinate::Coordinate;
use crate::point::Point;
use crate::polygon::{Polygon, SimplePolygon};
use crate::rect::{Rect, Square};
use crate::segment::Segment;
use crate::vector::Vec2;

pub trait Translate<C> {
  #[must_use]
  fn translate(self, dx: C, dy: C) -> Self;
}

/// Shifts `shape` by `(dx, dy)`. For polygons this applies to every vertex
/// of every contour.
pub fn translate<C, S: Translate<C>>(shape: S, dx: C, dy: C) -> S {
  shape.translate(dx, dy)
}

impl<C: Coordinate> Translate<C> for Point<C> {
  fn translate(self, dx: C, dy: C) -> Self {
    Point::new(self.x + dx, self.y + dy)
  }
}

impl<C: Coordinate> Translate<C> for Vec2<C> {
  fn translate(self, dx: C, dy: C) -> Self {
    Vec2::new(self.x + dx, self.y + dy)
  }
}

impl<C: Coordinate> Translate<C> for Rect<C> {
  fn translate(self, dx: C, dy: C) -> Self {
    Rect::new(self.pos.translate(dx, dy), self.width, self.height)
  }
}

impl<C: Coordinate> Translate<C> for Square<C> {
  fn translate(self, dx: C, dy: C) -> Self {
    Square::new(self.pos.translate(dx, dy), self.size)
  }
}

impl<C: Coordinate> Translate<C> for Segment<C> {
  fn translate(self, dx: C, dy: C) -> Self {
    Segment::new(self.p.translate(dx, dy), self.q.translate(dx, dy))
  }
}

impl<C: Coordinate> Translate<C> for SimplePolygon<C> {
  fn translate(self, dx: C, dy: C) -> Self {
    SimplePolygon::new(
      self
        .into_vertices()
        .into_iter()
        .map(|p| p.translate(dx, dy))
        .collect(),
    )
  }
}

impl<C: Coordinate> Translate<C> for Polygon<C> {
  fn translate(self, dx: C, dy: C) -> Self {
    let (outer, holes) = self.into_parts();
    Polygon::new(
      outer.translate(dx, dy),
      holes.into_iter().map(|h| h.translate(dx, dy)).collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn translate_then_untranslate_is_identity() {
    let r = Rect::new(Point::new(5, 7), 3, 4);
    let moved = translate(r, 11, -3);
    let back = translate(moved, -11, 3);
    assert_eq!(r, back);
  }

  #[test]
  fn seed_scenario_2_point_in_rect() {
    use crate::rect::contains_point;
    let r = Rect::new(Point::new(0, 0), 100, 100);
    assert!(contains_point(&r, Point::new(50, 50)));
    let moved = translate(Point::new(50, 50), 100, 100);
    assert!(!contains_point(&r, moved));
  }
}
