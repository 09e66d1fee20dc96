use crate::coordinate::Coordinate;
use crate::point::Point;
use crate::rect::Rect;
use crate::Error;

/// An ordered sequence of vertices forming a closed piecewise-linear curve.
/// Vertices are assumed to be listed in traversal order and the curve
/// non-self-intersecting (the library does not verify either; that's the
/// caller's responsibility). A polygon with fewer than 3 vertices is treated
/// as empty by [`contains`](crate::algorithms::point_in_polygon::contains).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplePolygon<C> {
  vertices: Vec<Point<C>>,
}

impl<C: Coordinate> SimplePolygon<C> {
  pub fn new(vertices: Vec<Point<C>>) -> Self {
    SimplePolygon { vertices }
  }

  /// True iff the vertex list is empty.
  pub fn empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// The boundary curve, or `Error::Empty` if this polygon has no vertices.
  pub fn boundary(&self) -> Result<&[Point<C>], Error> {
    if self.empty() {
      Err(Error::Empty)
    } else {
      Ok(&self.vertices)
    }
  }

  pub fn vertices(&self) -> &[Point<C>] {
    &self.vertices
  }

  pub fn into_vertices(self) -> Vec<Point<C>> {
    self.vertices
  }

  pub fn edges(&self) -> impl Iterator<Item = (Point<C>, Point<C>)> + '_ {
    let n = self.vertices.len();
    (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
  }
}

/// A simple polygon `outer` plus an ordered sequence of simple-polygon
/// `holes`, stored as one contiguous sequence where index 0 is the outer
/// boundary; this matches the boundary-plus-holes lifecycle and makes the
/// bounding-box shortcut (the outer's bbox is the whole polygon's bbox)
/// cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon<C> {
  contours: Vec<SimplePolygon<C>>,
}

impl<C: Coordinate> Polygon<C> {
  pub fn new(outer: SimplePolygon<C>, holes: Vec<SimplePolygon<C>>) -> Self {
    let mut contours = Vec::with_capacity(1 + holes.len());
    contours.push(outer);
    contours.extend(holes);
    Polygon { contours }
  }

  /// True iff there is no outer boundary.
  pub fn empty(&self) -> bool {
    self.contours.first().map_or(true, SimplePolygon::empty)
  }

  /// The outer boundary, or `Error::Empty` if this polygon has none.
  pub fn boundary(&self) -> Result<&SimplePolygon<C>, Error> {
    self.contours.first().filter(|o| !o.empty()).ok_or(Error::Empty)
  }

  pub fn holes(&self) -> &[SimplePolygon<C>] {
    self.contours.get(1..).unwrap_or(&[])
  }

  pub fn into_parts(self) -> (SimplePolygon<C>, Vec<SimplePolygon<C>>) {
    let mut contours = self.contours;
    let outer = if contours.is_empty() {
      SimplePolygon::new(vec![])
    } else {
      contours.remove(0)
    };
    (outer, contours)
  }
}

/// The smallest axis-aligned box spanning `polygon`'s vertices, computed as
/// the rect from the lexicographically minimum vertex to the
/// lexicographically maximum vertex (linear time).
///
/// This matches the true axis-aligned bounding rectangle only when the
/// lexicographic extremes happen to coincide with the polygon's actual axis
/// extremes, a known, documented limitation (see DESIGN.md), not a bug fix
/// target.
pub fn bounding_box<C: Coordinate>(polygon: &SimplePolygon<C>) -> Rect<C> {
  let vertices = polygon.vertices();
  let min_pt = vertices.iter().copied().min().unwrap_or(Point::new(C::zero(), C::zero()));
  let max_pt = vertices.iter().copied().max().unwrap_or(Point::new(C::zero(), C::zero()));
  Rect::from_corners(min_pt, max_pt)
}
