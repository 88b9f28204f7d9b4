use capsweep3d::query;
use capsweep3d::shape::Segment;
use na::Point3;

// The capsule narrow phase resolves edges with sequential clamping. It finds the true closest
// points whenever the first parameter doesn't need to move once the second one is clamped.
#[test]
fn sequential_clamping_is_exact_for_crossing_segments() {
    let axis = Segment::new(Point3::new(0.2, 0.3, -1.0), Point3::new(0.2, 0.3, 1.0));
    let edge = Segment::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.5, 0.0));

    let (p1, p2) = query::closest_points_segment_segment(&axis, &edge);
    let (q1, q2) = query::closest_points_segment_segment_exact(&axis, &edge);
    assert_relative_eq!(p1, q1, epsilon = 1.0e-6);
    assert_relative_eq!(p2, q2, epsilon = 1.0e-6);
}

// Known limitation: once the first parameter is clamped it is never revisited, so the distance
// can be overestimated when the second parameter ends up clamped too.
#[test]
fn sequential_clamping_overestimates_offset_segments() {
    let axis = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0));
    let edge = Segment::new(Point3::new(1.0, 1.0, 0.0), Point3::new(0.0, 2.0, 0.0));

    let (p1, p2) = query::closest_points_segment_segment(&axis, &edge);
    let (q1, q2) = query::closest_points_segment_segment_exact(&axis, &edge);

    assert_eq!(p2, q2);
    assert_relative_eq!(p1, Point3::new(2.0, 0.0, 0.0));
    assert_relative_eq!(q1, Point3::new(1.0, 0.0, 0.0));
    assert!(na::distance(&p1, &p2) > na::distance(&q1, &q2));
}

#[test]
fn nearly_parallel_segments_fall_back_to_first_endpoint() {
    let axis = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let edge = Segment::new(Point3::new(-0.5, 0.2, 0.0), Point3::new(2.0, 0.2, 0.0));

    let (s, t) = query::closest_points_segment_segment_with_params(&axis, &edge);
    assert_eq!(s, 0.0);
    assert_relative_eq!(t, 0.2, epsilon = 1.0e-6);
}
