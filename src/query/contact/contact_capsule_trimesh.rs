use crate::bounding_volume::BoundingVolume;
use crate::math::{Real, Vector};
use crate::partitioning::TraversalAction;
use crate::query::{contact_capsule_triangle, MeshContact};
use crate::shape::{Capsule, TriMesh};

/// Deepest contact between a capsule and a triangle mesh.
///
/// The mesh BVH is traversed with the AABB of the capsule, and every triangle of every reached
/// leaf is tested with [`contact_capsule_triangle`]. The contact with the greatest depth is
/// returned; among contacts of equal depth, the first one found is kept.
///
/// Returns `None` if the mesh is empty or if no triangle touches the capsule.
pub fn contact_capsule_trimesh(
    capsule: &Capsule,
    mesh: &TriMesh,
    velocity: Option<&Vector<Real>>,
) -> Option<MeshContact> {
    let bvh = mesh.bvh();
    let capsule_aabb = capsule.local_aabb();
    let mut deepest: Option<MeshContact> = None;

    bvh.traverse(|node| {
        if !node.aabb().intersects(&capsule_aabb) {
            return TraversalAction::Prune;
        }

        for id in bvh.node_triangles(node) {
            let Some(contact) = contact_capsule_triangle(capsule, &mesh.triangle(*id), velocity)
            else {
                continue;
            };

            if deepest.map_or(true, |best| contact.depth > best.contact.depth) {
                deepest = Some(MeshContact {
                    triangle: *id,
                    contact,
                });
            }
        }

        TraversalAction::Continue
    });

    deepest
}

impl TriMesh {
    /// Deepest contact between a capsule and this mesh.
    ///
    /// The optional `velocity` of the capsule only orients the normals of face contacts, see
    /// [`contact_capsule_triangle`]. The returned [`MeshContact::triangle`] is the face index of
    /// the touched triangle.
    ///
    /// The capsule radius is expected to be positive. This never panics: a NaN radius reports
    /// no contact.
    ///
    /// This is the same as [`contact_capsule_trimesh`].
    #[inline]
    pub fn intersect_capsule(
        &self,
        capsule: &Capsule,
        velocity: Option<&Vector<Real>>,
    ) -> Option<MeshContact> {
        contact_capsule_trimesh(capsule, self, velocity)
    }
}
