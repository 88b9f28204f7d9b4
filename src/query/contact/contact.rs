use crate::math::{Point, Real, Vector};

/// Geometric description of a contact between a capsule and a triangle.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// Position of the contact, on the triangle.
    pub point: Point<Real>,

    /// Contact normal.
    ///
    /// For a contact on the triangle face, this is the triangle normal, flipped against the
    /// velocity of the capsule if one was given. For edge and vertex contacts, it points from the
    /// triangle toward the capsule axis. This is a unit vector except in degenerate
    /// configurations (a capsule axis touching the triangle boundary exactly, or a zero-area
    /// triangle), where it may be zero.
    pub normal: Vector<Real>,

    /// Penetration depth of the capsule into the triangle, non-negative.
    ///
    /// Translating the capsule by `normal * depth` resolves the contact.
    pub depth: Real,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(point: Point<Real>, normal: Vector<Real>, depth: Real) -> Self {
        Contact {
            point,
            normal,
            depth,
        }
    }
}

/// A contact between a capsule and one triangle of a mesh.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshContact {
    /// Index of the triangle in the mesh, i.e., its face index in the mesh index buffer.
    pub triangle: u32,
    /// The contact with that triangle.
    pub contact: Contact,
}
