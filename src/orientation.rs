use crate::coordinate::Coordinate;
use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
  CoLinear,
  ClockWise,
  CounterClockWise,
}

/// Sign of the cross product `(qy - py)(rx - qx) - (qx - px)(ry - qy)`.
pub fn orientation<C: Coordinate>(p: Point<C>, q: Point<C>, r: Point<C>) -> Orientation {
  let cross = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
  if cross == C::zero() {
    Orientation::CoLinear
  } else if cross > C::zero() {
    Orientation::ClockWise
  } else {
    Orientation::CounterClockWise
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn colinear_points() {
    let p = Point::new(0, 0);
    let q = Point::new(1, 1);
    let r = Point::new(2, 2);
    assert_eq!(orientation(p, q, r), Orientation::CoLinear);
  }

  #[test]
  fn clockwise_and_counter_clockwise_are_distinguished() {
    let p = Point::new(0, 0);
    let q = Point::new(1, 0);
    let r_cw = Point::new(1, -1);
    let r_ccw = Point::new(1, 1);
    assert_eq!(orientation(p, q, r_cw), Orientation::ClockWise);
    assert_eq!(orientation(p, q, r_ccw), Orientation::CounterClockWise);
  }
}
