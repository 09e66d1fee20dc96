use rgeometry_index::{bounding_box, contains_with_holes, intersects_boxes, Point, Polygon, Quadtree, Rect, SimplePolygon};

#[test]
fn quadtree_round_trip_through_the_public_api() {
  let mut tree: Quadtree<i32, Rect<i32>> = Quadtree::new();
  let a = Rect::new(Point::new(50, 13), 100, 100);
  let b = Rect::new(Point::new(0, 0), 123, 123);

  assert!(tree.insert(a));
  assert!(tree.insert(b));
  assert!(intersects_boxes(&a, &b));
  assert_eq!(tree.size(), 2);

  let window = Rect::new(Point::new(60, 60), 5, 5);
  let mut found = tree.query_vec(&window);
  found.sort();
  let mut expected = vec![a, b];
  expected.sort();
  assert_eq!(found, expected);
}

#[test]
fn polygon_with_holes_through_the_public_api() {
  let outer = SimplePolygon::new(vec![
    Point::new(0, 0),
    Point::new(10, 0),
    Point::new(10, 10),
    Point::new(0, 10),
  ]);
  let hole = SimplePolygon::new(vec![
    Point::new(3, 3),
    Point::new(7, 3),
    Point::new(7, 7),
    Point::new(3, 7),
  ]);
  let polygon = Polygon::new(outer, vec![hole]);

  assert!(contains_with_holes(&polygon, Point::new(1, 1)));
  assert!(!contains_with_holes(&polygon, Point::new(5, 5)));

  let bbox = bounding_box(polygon.boundary().unwrap());
  assert_eq!(bbox, Rect::new(Point::new(0, 0), 10, 10));
}
