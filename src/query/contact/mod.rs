//! Contacts between a capsule and triangles.

pub use self::contact::{Contact, MeshContact};
pub use self::contact_capsule_triangle::contact_capsule_triangle;
pub use self::contact_capsule_trimesh::contact_capsule_trimesh;

mod contact;
mod contact_capsule_triangle;
mod contact_capsule_trimesh;
