use super::{Bvh, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};

impl Bvh {
    /// Iterates through the indices of all the triangles stored in a leaf with an AABB
    /// intersecting the given `aabb`.
    ///
    /// This is a conservative broad-phase: a yielded triangle may not intersect `aabb` itself,
    /// but every triangle that does is yielded exactly once.
    pub fn intersect_aabb<'a>(&'a self, aabb: &'a Aabb) -> impl Iterator<Item = u32> + 'a {
        self.leaves(|node: &BvhNode| node.aabb().intersects(aabb))
            .flat_map(move |leaf| self.node_triangles(leaf).iter().copied())
    }
}
