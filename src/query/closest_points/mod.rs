//! Closest points between segments.

pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_exact,
    closest_points_segment_segment_exact_with_params, closest_points_segment_segment_with_params,
    PARALLEL_SEGMENTS_EPSILON,
};

mod closest_points_segment_segment;
