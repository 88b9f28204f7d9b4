//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};
use crate::shape::Segment;
use crate::utils;

/// A triangle shape.
///
/// The orientation of the triangle follows its winding: with `a`, `b`, `c` in counter-clockwise
/// order when seen from outside, [`Triangle::normal`] points outward. The winding is never
/// checked.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle: [A, B, C].
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// The normal of this triangle scaled by twice its area: `(b - a) × (c - a)`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle.
    ///
    /// Returns the zero vector if the triangle is degenerate (zero area).
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        utils::normalize_or_zero(self.scaled_normal())
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// Computes the center of this triangle, i.e., the average of its vertices.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Tests if the point `p` lies inside of this triangle, using barycentric coordinates.
    ///
    /// The test is done with respect to the triangle's own basis `(c - a, b - a)`: a point
    /// outside of the triangle's plane is classified by its projection onto that basis. Points
    /// on an edge or a vertex are inside.
    ///
    /// No guard exists against degenerate triangles: for a zero-area triangle the coordinates
    /// are computed with an infinite or NaN reciprocal and the result is unspecified.
    pub fn contains_point(&self, p: &Point<Real>) -> bool {
        let v0 = self.c - self.a;
        let v1 = self.b - self.a;
        let v2 = *p - self.a;

        let dot00 = v0.dot(&v0);
        let dot01 = v0.dot(&v1);
        let dot02 = v0.dot(&v2);
        let dot11 = v1.dot(&v1);
        let dot12 = v1.dot(&v2);

        let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
        let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
        let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }
}
