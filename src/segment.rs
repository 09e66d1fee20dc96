use crate::coordinate::{Coordinate, Sqrt};
use crate::orientation::{orientation, Orientation};
use crate::point::Point;

/// An ordered pair of points. Equality compares the pair in order, so
/// `Segment(p, q) != Segment(q, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<C> {
  pub p: Point<C>,
  pub q: Point<C>,
}

impl<C: Coordinate> Segment<C> {
  pub fn new(p: Point<C>, q: Point<C>) -> Self {
    Segment { p, q }
  }
}

pub fn distance<C: Coordinate + Sqrt>(p: Point<C>, q: Point<C>) -> C {
  let dx = p.x - q.x;
  let dy = p.y - q.y;
  (dx * dx + dy * dy).sqrt()
}

/// True iff `p` lies within the axis-aligned bounding rectangle of `seg`
/// (not necessarily on the line through `seg`).
pub fn on_segment<C: Coordinate>(seg: &Segment<C>, p: Point<C>) -> bool {
  let min_x = seg.p.x.min(seg.q.x);
  let max_x = seg.p.x.max(seg.q.x);
  let min_y = seg.p.y.min(seg.q.y);
  let max_y = seg.p.y.max(seg.q.y);
  min_x <= p.x && p.x <= max_x && min_y <= p.y && p.y <= max_y
}

/// True iff the two segments intersect, including touching at an endpoint.
pub fn intersects_segments<C: Coordinate>(a: &Segment<C>, b: &Segment<C>) -> bool {
  let (p1, q1) = (a.p, a.q);
  let (p2, q2) = (b.p, b.q);

  let o1 = orientation(p1, q1, p2);
  let o2 = orientation(p1, q1, q2);
  let o3 = orientation(p2, q2, p1);
  let o4 = orientation(p2, q2, q1);

  if o1 != o2 && o3 != o4 {
    return true;
  }

  if o1 == Orientation::CoLinear && on_segment(a, p2) {
    return true;
  }
  if o2 == Orientation::CoLinear && on_segment(a, q2) {
    return true;
  }
  if o3 == Orientation::CoLinear && on_segment(b, p1) {
    return true;
  }
  if o4 == Orientation::CoLinear && on_segment(b, q1) {
    return true;
  }

  false
}
