pub use bvh_traverse::{Leaves, TraversalAction};
pub use bvh_tree::{Bvh, BvhBuildOptions, BvhNode, BvhNodeKind, BvhStats};

mod bvh_queries;
mod bvh_sah_build;
mod bvh_traverse;
mod bvh_tree;
mod bvh_validation;
