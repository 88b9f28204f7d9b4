//! Infinite plane used by the capsule-triangle narrow phase.
use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;

/// An infinite plane `{ p | normal · p + constant = 0 }`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's normal. Unit length unless the plane was built from a degenerate triangle.
    pub normal: Vector<Real>,
    /// The signed offset of the plane along its normal.
    pub constant: Real,
}

impl Plane {
    /// Builds a new plane from its normal and constant.
    #[inline]
    pub fn new(normal: Vector<Real>, constant: Real) -> Plane {
        Plane { normal, constant }
    }

    /// The plane with normal `normal` passing through `point`.
    #[inline]
    pub fn from_normal_and_point(normal: Vector<Real>, point: &Point<Real>) -> Plane {
        Plane::new(normal, -normal.dot(&point.coords))
    }

    /// The supporting plane of `triangle`, oriented by its winding.
    ///
    /// A degenerate triangle yields a plane with a zero normal, for which every signed distance
    /// is zero.
    #[inline]
    pub fn from_triangle(triangle: &Triangle) -> Plane {
        Plane::from_normal_and_point(triangle.normal(), &triangle.a)
    }

    /// The signed distance from `point` to this plane, positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.constant
    }

    /// Flips the orientation of this plane in-place.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.constant = -self.constant;
    }

    /// The same plane with the opposite orientation.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}
