use crate::math::{Real, Vector};
use crate::query::closest_points::closest_points_segment_segment;
use crate::query::Contact;
use crate::shape::{Capsule, Plane, Triangle};
use crate::utils;

/// Contact between a capsule and a triangle.
///
/// The capsule is tested against, in this order:
/// 1. the triangle’s plane: if the capsule axis crosses the plane (shifted by the radius) inside
///    of the triangle, the contact is on the face, with the plane normal and a depth equal to the
///    deepest endpoint penetration,
/// 2. each edge `ab`, `bc`, `ca`: the first edge closer than `radius` to the capsule axis gives the
///    contact, see [`closest_points_segment_segment`],
/// 3. each vertex `a`, `b`, `c` against the capsule start then end: the first one closer than
///    `radius` gives the contact.
///
/// If `velocity` is given and the triangle normal points along it, the triangle plane is flipped
/// so that a face contact normal always opposes the motion.
///
/// Returns `None` if the capsule is entirely on one side of the triangle plane, farther than its
/// radius, or if none of the tests above report a contact.
pub fn contact_capsule_triangle(
    capsule: &Capsule,
    triangle: &Triangle,
    velocity: Option<&Vector<Real>>,
) -> Option<Contact> {
    let radius = capsule.radius;
    let mut plane = Plane::from_triangle(triangle);

    if let Some(velocity) = velocity {
        if plane.normal.dot(velocity) > 0.0 {
            plane.flip();
        }
    }

    let d1 = plane.signed_distance(&capsule.segment.a) - radius;
    let d2 = plane.signed_distance(&capsule.segment.b) - radius;

    if (d1 > 0.0 && d2 > 0.0) || (d1 < -radius && d2 < -radius) {
        return None;
    }

    // Where the axis crosses the plane. NaN if both endpoints are exactly at `radius` from the
    // plane, which fails the containment test below.
    let t = d1.abs() / (d1.abs() + d2.abs());
    let crossing = capsule.segment.point_at(t);

    if triangle.contains_point(&crossing) {
        return Some(Contact::new(crossing, plane.normal, d1.min(d2).abs()));
    }

    let radius_squared = radius * radius;

    for edge in triangle.edges() {
        let (axis_pt, edge_pt) = closest_points_segment_segment(&capsule.segment, &edge);
        let dist_squared = na::distance_squared(&axis_pt, &edge_pt);

        if dist_squared < radius_squared {
            let normal = utils::normalize_or_zero(axis_pt - edge_pt);
            return Some(Contact::new(edge_pt, normal, radius - dist_squared.sqrt()));
        }
    }

    for vertex in triangle.vertices() {
        for endpoint in [capsule.start(), capsule.end()] {
            let dist_squared = na::distance_squared(&vertex, &endpoint);

            if dist_squared < radius_squared {
                let normal = utils::normalize_or_zero(endpoint - vertex);
                return Some(Contact::new(vertex, normal, radius - dist_squared.sqrt()));
            }
        }
    }

    None
}
