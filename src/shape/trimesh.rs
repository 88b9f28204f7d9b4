use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::{Bvh, BvhBuildOptions};
use crate::shape::Triangle;

/// Indicated an inconsistency in the buffers given to [`TriMesh::try_new`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// The index buffer length is not a multiple of 3.
    #[error("the index buffer length {0} is not a multiple of 3.")]
    IndexBufferLength(usize),
    /// The vertex buffer length is not a multiple of 3.
    #[error("the vertex buffer length {0} is not a multiple of 3.")]
    VertexBufferLength(usize),
    /// A triangle references a vertex that doesn't exist.
    #[error("the triangle {triangle} references the vertex {index} but the mesh only has {vertex_count} vertices.")]
    IndexOutOfBounds {
        /// The triangle containing the invalid index.
        triangle: u32,
        /// The invalid vertex index.
        index: u32,
        /// The number of vertices of the vertex buffer.
        vertex_count: usize,
    },
}

/// Converts flat position and index buffers into a triangle list.
///
/// `positions` holds 3 coordinates per vertex and `indices` holds 3 vertex indices per triangle.
/// One triangle is produced per index triple, in input order, so the `i`-th triangle of the
/// result is the `i`-th face of the mesh.
///
/// The buffers are not validated: a trailing incomplete index triple is ignored and an index
/// out of range of `positions` panics. Use [`TriMesh::try_new`] to validate untrusted data.
pub fn triangles_from_buffers(positions: &[Real], indices: &[u32]) -> Vec<Triangle> {
    let vertex = |i: u32| {
        let i = i as usize * 3;
        Point::new(positions[i], positions[i + 1], positions[i + 2])
    };

    indices
        .chunks_exact(3)
        .map(|idx| Triangle::new(vertex(idx[0]), vertex(idx[1]), vertex(idx[2])))
        .collect()
}

/// A triangle mesh with a static BVH built over its triangles.
///
/// The mesh is built once and never modified afterward. The index of a triangle in
/// [`TriMesh::triangles`] is its face index in the original index buffer, and that's the index
/// reported by collision queries.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    triangles: Vec<Triangle>,
    bvh: Bvh,
}

impl TriMesh {
    /// Builds a triangle mesh and its BVH from flat position and index buffers.
    ///
    /// The buffers are trusted, see [`triangles_from_buffers`].
    pub fn new(positions: &[Real], indices: &[u32], options: BvhBuildOptions) -> Self {
        Self::from_triangles(triangles_from_buffers(positions, indices), options)
    }

    /// Builds a triangle mesh and its BVH after checking the consistency of the buffers.
    pub fn try_new(
        positions: &[Real],
        indices: &[u32],
        options: BvhBuildOptions,
    ) -> Result<Self, TriMeshBuilderError> {
        if positions.len() % 3 != 0 {
            return Err(TriMeshBuilderError::VertexBufferLength(positions.len()));
        }

        if indices.len() % 3 != 0 {
            return Err(TriMeshBuilderError::IndexBufferLength(indices.len()));
        }

        let vertex_count = positions.len() / 3;

        for (i, index) in indices.iter().enumerate() {
            if *index as usize >= vertex_count {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: (i / 3) as u32,
                    index: *index,
                    vertex_count,
                });
            }
        }

        Ok(Self::new(positions, indices, options))
    }

    /// Builds a triangle mesh and its BVH from a list of triangles.
    pub fn from_triangles(triangles: Vec<Triangle>, options: BvhBuildOptions) -> Self {
        let bvh = Bvh::from_triangles(&triangles, options);
        Self { triangles, bvh }
    }

    /// The triangles of this mesh, in face order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        self.triangles[i as usize]
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Does this mesh contain no triangle at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The BVH built over the triangles of this mesh.
    #[inline]
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// The AABB of this mesh, or the empty AABB if it has no triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.bvh.root_aabb()
    }
}
