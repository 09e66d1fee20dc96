pub mod point_in_polygon;
pub mod sat;
