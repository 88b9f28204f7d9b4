//! Point projection on shapes.

mod point_triangle;
