//! Non-persistent geometric queries.
//!
//! The main query of this crate is [`TriMesh::intersect_capsule`](crate::shape::TriMesh::intersect_capsule),
//! also available as [`contact_capsule_trimesh`]. It relies on:
//!
//! * [`contact_capsule_triangle`] for the narrow phase against a single triangle.
//! * [`closest_points_segment_segment`] for the distance between the capsule axis and the
//!   triangle edges.
//!
//! Point projection on a triangle is provided by
//! [`Triangle::project_local_point`](crate::shape::Triangle::project_local_point).

pub use self::closest_points::{
    closest_points_segment_segment, closest_points_segment_segment_exact,
    closest_points_segment_segment_exact_with_params, closest_points_segment_segment_with_params,
};
pub use self::contact::{contact_capsule_triangle, contact_capsule_trimesh, Contact, MeshContact};

pub mod closest_points;
pub mod contact;
mod point;
