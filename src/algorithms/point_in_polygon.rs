//! Point-in-polygon via horizontal-ray / even-odd-rule crossing counting.

use crate::coordinate::Coordinate;
use crate::orientation::{orientation, Orientation};
use crate::point::Point;
use crate::polygon::{bounding_box, Polygon, SimplePolygon};
use crate::rect::top_right;
use crate::segment::{intersects_segments, on_segment, Segment};

/// True iff `q` lies inside or on the boundary of `polygon`.
pub fn contains<C: Coordinate>(polygon: &SimplePolygon<C>, q: Point<C>) -> bool {
  let vertices = polygon.vertices();
  let n = vertices.len();
  if n < 3 {
    return false;
  }

  let x_inf = top_right(&bounding_box(polygon)).x + C::one();
  let ray = Segment::new(q, Point::new(x_inf, q.y));

  let mut crossings = 0usize;
  for i in 0..n {
    let edge = Segment::new(vertices[i], vertices[(i + 1) % n]);
    if !intersects_segments(&edge, &ray) {
      continue;
    }
    if orientation(edge.p, q, edge.q) == Orientation::CoLinear {
      return on_segment(&edge, q);
    }
    if on_segment(&ray, edge.q) {
      let third = vertices[(i + 2) % n];
      if orientation(q, edge.q, edge.p) == orientation(third, edge.q, q) {
        crossings += 1;
      }
    } else {
      crossings += 1;
    }
  }
  crossings % 2 == 1
}

/// True iff `q` lies inside `polygon`'s outer boundary and outside every
/// hole. An empty polygon returns `false`.
pub fn contains_with_holes<C: Coordinate>(polygon: &Polygon<C>, q: Point<C>) -> bool {
  if polygon.empty() {
    return false;
  }
  let outer = polygon.boundary().expect("checked non-empty above");
  contains(outer, q) && !polygon.holes().iter().any(|hole| contains(hole, q))
}
