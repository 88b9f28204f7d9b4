/*!
capsweep3d
==========

**capsweep3d** builds a static bounding-volume hierarchy over a triangle mesh
and resolves swept-capsule collisions against it. It is the collision core of
a 3D character controller: feed it raw vertex/index buffers once, then ask it,
as many times as needed, where a moving capsule touches the mesh.

```rust
# #[cfg(feature = "f32")] {
use capsweep3d::math::{Point, Vector};
use capsweep3d::partitioning::BvhBuildOptions;
use capsweep3d::shape::{Capsule, TriMesh};

let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
let indices = [0, 1, 2];
let mesh = TriMesh::new(&positions, &indices, BvhBuildOptions::default());

let capsule = Capsule::new(Point::new(0.3, 0.3, -1.0), Point::new(0.3, 0.3, 1.0), 0.1);
let hit = mesh.intersect_capsule(&capsule, Some(&Vector::z())).unwrap();
assert_eq!(hit.triangle, 0);
assert!(hit.contact.depth > 0.0);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
