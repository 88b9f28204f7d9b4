use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::Capsule;

impl Capsule {
    /// The axis-aligned bounding box of this capsule.
    ///
    /// This is the box of the capsule's segment enlarged by its radius on every axis. A NaN
    /// radius yields a NaN box that intersects nothing.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let a = self.segment.a;
        let b = self.segment.b;
        let radius = Vector::<Real>::repeat(self.radius);
        Aabb::new(a.inf(&b) - radius, a.sup(&b) + radius)
    }
}
