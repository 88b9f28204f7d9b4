use capsweep3d::partitioning::{BvhBuildOptions, BvhStats};
use capsweep3d::shape::{triangles_from_buffers, TriMesh, TriMeshBuilderError};
use na::Point3;

/// A flat fan of `n` triangles around the origin, sharing their first vertex.
fn fan(n: u32) -> (Vec<f32>, Vec<u32>) {
    let mut positions = vec![0.0, 0.0, 0.0];
    let mut indices = vec![];

    for i in 0..=n {
        let angle = i as f32 * 0.1;
        positions.extend_from_slice(&[angle.cos() * 10.0, angle.sin() * 10.0, 0.0]);
    }

    for i in 1..=n {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    (positions, indices)
}

#[test]
fn try_new_rejects_inconsistent_buffers() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let options = BvhBuildOptions::default();

    assert_eq!(
        TriMesh::try_new(&positions[..8], &[0, 1, 2], options).err(),
        Some(TriMeshBuilderError::VertexBufferLength(8))
    );
    assert_eq!(
        TriMesh::try_new(&positions, &[0, 1, 2, 0], options).err(),
        Some(TriMeshBuilderError::IndexBufferLength(4))
    );
    assert_eq!(
        TriMesh::try_new(&positions, &[0, 1, 2, 0, 1, 3], options).err(),
        Some(TriMeshBuilderError::IndexOutOfBounds {
            triangle: 1,
            index: 3,
            vertex_count: 3,
        })
    );

    let mesh = TriMesh::try_new(&positions, &[0, 1, 2, 2, 1, 0], options).unwrap();
    assert_eq!(mesh.num_triangles(), 2);
}

#[test]
fn buffers_and_triangle_list_build_the_same_mesh() {
    let (positions, indices) = fan(40);
    let options = BvhBuildOptions::with_max_triangles_per_leaf(3);

    let from_buffers = TriMesh::new(&positions, &indices, options);
    let from_list = TriMesh::from_triangles(triangles_from_buffers(&positions, &indices), options);

    assert_eq!(from_buffers.triangles(), from_list.triangles());
    assert_eq!(
        from_buffers.bvh().leaf_triangles(),
        from_list.bvh().leaf_triangles()
    );
    assert_eq!(from_buffers.bvh().stats(), from_list.bvh().stats());
}

#[test]
fn face_indices_are_preserved() {
    let (positions, indices) = fan(40);
    let mesh = TriMesh::new(&positions, &indices, BvhBuildOptions::default());

    for (i, face) in indices.chunks_exact(3).enumerate() {
        let triangle = mesh.triangle(i as u32);
        let vertex = |id: u32| {
            let id = id as usize * 3;
            Point3::new(positions[id], positions[id + 1], positions[id + 2])
        };

        assert_eq!(triangle.a, vertex(face[0]));
        assert_eq!(triangle.b, vertex(face[1]));
        assert_eq!(triangle.c, vertex(face[2]));
    }
}

#[test]
fn mesh_bvh_is_well_formed() {
    let (positions, indices) = fan(60);
    let mesh = TriMesh::new(
        &positions,
        &indices,
        BvhBuildOptions::with_max_triangles_per_leaf(2),
    );
    mesh.bvh().assert_well_formed(mesh.triangles());

    let stats = mesh.bvh().stats();
    assert_eq!(stats.triangle_count, 60);
    assert_eq!(stats.leaf_count, mesh.bvh().leaf_count());
    assert_eq!(stats.node_count, 2 * stats.leaf_count - 1);
    assert!(stats.max_depth >= 2);

    let aabb = mesh.local_aabb();
    for triangle in mesh.triangles() {
        for vertex in triangle.vertices() {
            assert!(aabb.contains_local_point(&vertex));
        }
    }
}

#[test]
fn empty_buffers_build_an_empty_mesh() {
    let mesh = TriMesh::try_new(&[], &[], BvhBuildOptions::default()).unwrap();
    assert!(mesh.is_empty());
    assert!(mesh.bvh().is_empty());
    assert_eq!(mesh.bvh().stats(), BvhStats::default());
}
