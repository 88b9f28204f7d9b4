use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};

/// Computes the AABB of a set of points.
///
/// Returns the empty AABB (see [`Aabb::new_invalid`]) if `pts` yields no point.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut result = Aabb::new_invalid();

    for pt in pts {
        result.take_point(pt);
    }

    result
}

/// Computes the union of the AABBs of `aabbs` selected by `indices`.
///
/// Returns the empty AABB if `indices` is empty.
pub fn indexed_aabbs_union(aabbs: &[Aabb], indices: &[u32]) -> Aabb {
    let mut result = Aabb::new_invalid();

    for id in indices {
        result.merge(&aabbs[*id as usize]);
    }

    result
}
