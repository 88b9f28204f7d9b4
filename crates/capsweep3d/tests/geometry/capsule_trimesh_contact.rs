use capsweep3d::partitioning::BvhBuildOptions;
use capsweep3d::query::{self, MeshContact};
use capsweep3d::shape::{Capsule, TriMesh, Triangle};
use na::{Point3, Vector3};

fn single_triangle() -> TriMesh {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    TriMesh::new(&positions, &[0, 1, 2], BvhBuildOptions::default())
}

/// A bumpy grid of `n * n` quads, two triangles each, over `[0, n]²`.
fn terrain(n: u32) -> TriMesh {
    let mut positions = vec![];
    let mut indices = vec![];

    for j in 0..=n {
        for i in 0..=n {
            let (x, y) = (i as f32, j as f32);
            positions.extend_from_slice(&[x, y, 0.3 * (x * 0.7).sin() * (y * 0.5).cos()]);
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v = j * (n + 1) + i;
            indices.extend_from_slice(&[v, v + 1, v + n + 2, v, v + n + 2, v + n + 1]);
        }
    }

    TriMesh::new(
        &positions,
        &indices,
        BvhBuildOptions::with_max_triangles_per_leaf(4),
    )
}

fn brute_force_deepest(mesh: &TriMesh, capsule: &Capsule) -> Option<MeshContact> {
    let mut deepest: Option<MeshContact> = None;

    for (id, triangle) in mesh.triangles().iter().enumerate() {
        if let Some(contact) = query::contact_capsule_triangle(capsule, triangle, None) {
            if deepest.map_or(true, |best| contact.depth > best.contact.depth) {
                deepest = Some(MeshContact {
                    triangle: id as u32,
                    contact,
                });
            }
        }
    }

    deepest
}

#[test]
fn capsule_through_triangle_centroid() {
    let mesh = single_triangle();
    let centroid = mesh.triangle(0).center();
    let capsule = Capsule::new(
        centroid - Vector3::z(),
        centroid + Vector3::z(),
        0.1,
    );

    let hit = mesh.intersect_capsule(&capsule, None).unwrap();
    assert_eq!(hit.triangle, 0);
    assert_eq!(hit.contact.normal, mesh.triangle(0).normal());
    assert!(hit.contact.depth > 0.0);

    let hit = mesh
        .intersect_capsule(&capsule, Some(&Vector3::new(0.0, 0.0, 2.0)))
        .unwrap();
    assert_eq!(hit.contact.normal, -mesh.triangle(0).normal());
    assert!(hit.contact.depth > 0.0);
}

#[test]
fn capsule_above_triangle() {
    let mesh = single_triangle();
    let capsule = Capsule::new(Point3::new(0.3, 0.3, 0.5), Point3::new(0.3, 0.3, 2.0), 0.1);
    assert!(mesh.intersect_capsule(&capsule, None).is_none());
    assert!(mesh
        .intersect_capsule(&capsule, Some(&-Vector3::z()))
        .is_none());
}

#[test]
fn standing_capsule_rests_on_floor() {
    // A character standing slightly sunk into a flat floor made of two triangles.
    let positions = [
        -5.0, -5.0, 0.0, 5.0, -5.0, 0.0, 5.0, 5.0, 0.0, -5.0, 5.0, 0.0,
    ];
    let mesh = TriMesh::new(&positions, &[0, 1, 2, 0, 2, 3], BvhBuildOptions::default());
    let capsule = Capsule::new(Point3::new(1.0, -2.0, 0.4), Point3::new(1.0, -2.0, 1.4), 0.5);

    let hit = mesh
        .intersect_capsule(&capsule, Some(&Vector3::new(0.0, 0.0, -1.0)))
        .unwrap();
    assert_eq!(hit.triangle, 0);
    assert_eq!(hit.contact.normal, Vector3::z());
    assert_relative_eq!(hit.contact.depth, 0.1, epsilon = 1.0e-6);

    let resolved = capsule.translated(&(hit.contact.normal * (hit.contact.depth + 1.0e-3)));
    assert!(mesh.intersect_capsule(&resolved, None).is_none());
}

#[test]
fn mesh_query_matches_brute_force() {
    let mesh = terrain(12);
    let mut rng = oorandom::Rand32::new(1234);
    let mut hits = 0;

    for _ in 0..500 {
        let x = rng.rand_float() * 12.0;
        let y = rng.rand_float() * 12.0;
        let z = rng.rand_float() * 2.0 - 1.0;
        let dir = Vector3::new(
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
        );
        let radius = 0.05 + rng.rand_float() * 0.4;
        let a = Point3::new(x, y, z);
        let capsule = Capsule::new(a, a + dir * 2.0, radius);

        let expected = brute_force_deepest(&mesh, &capsule);
        let found = mesh.intersect_capsule(&capsule, None);

        match (expected, found) {
            (None, None) => {}
            (Some(expected), Some(found)) => {
                hits += 1;
                assert_eq!(expected.contact.depth, found.contact.depth);
                let tri: Triangle = mesh.triangle(found.triangle);
                assert_eq!(
                    query::contact_capsule_triangle(&capsule, &tri, None),
                    Some(found.contact)
                );
            }
            (expected, found) => panic!("expected {:?}, found {:?}", expected, found),
        }
    }

    assert!(hits > 0);
}
