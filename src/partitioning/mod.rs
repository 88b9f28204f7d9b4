//! Spatial partitioning tools.

pub use self::bvh::{
    Bvh, BvhBuildOptions, BvhNode, BvhNodeKind, BvhStats, Leaves, TraversalAction,
};

/// A static bounding-volume hierarchy over triangles.
pub mod bvh;
