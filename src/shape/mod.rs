//! Shapes supported by capsweep3d.

pub use self::capsule::Capsule;
pub use self::plane::Plane;
pub use self::segment::Segment;
pub use self::triangle::Triangle;
pub use self::trimesh::{triangles_from_buffers, TriMesh, TriMeshBuilderError};

mod capsule;
mod plane;
mod segment;
mod triangle;
mod trimesh;
