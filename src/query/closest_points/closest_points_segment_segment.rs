use crate::math::{Point, Real};
use crate::shape::Segment;

/// Below this value, the determinant of the normal equations is considered zero and the
/// segments parallel.
pub const PARALLEL_SEGMENTS_EPSILON: Real = 1.0e-8;

/// Closest points between two segments, resolved with sequential clamping.
///
/// Returns the point on `seg1` then the point on `seg2`. See
/// [`closest_points_segment_segment_with_params`] for the algorithm and its limitations.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    let (s, t) = closest_points_segment_segment_with_params(seg1, seg2);
    (seg1.point_at(s), seg2.point_at(t))
}

/// Parameters `(s, t)` of the closest points between two segments, resolved with sequential
/// clamping.
///
/// The 2x2 normal equations of the supporting lines are solved for `s`, which is then clamped to
/// `[0, 1]`. The parameter `t` is then derived from the clamped `s` and clamped in turn. The
/// first parameter is never revisited, so the result is not always the true closest pair of
/// points: when the optimum has `t` clamped while the unclamped `s` was already inside `[0, 1]`,
/// the point on `seg1` is off. See [`closest_points_segment_segment_exact`] for the fully
/// general solution.
///
/// If the determinant of the system is smaller than [`PARALLEL_SEGMENTS_EPSILON`], the segments
/// are considered parallel and `s = 0`.
pub fn closest_points_segment_segment_with_params(
    seg1: &Segment,
    seg2: &Segment,
) -> (Real, Real) {
    let u = seg1.scaled_direction();
    let v = seg2.scaled_direction();
    let w = seg1.a - seg2.a;

    let a = u.norm_squared();
    let b = u.dot(&v);
    let c = v.norm_squared();
    let d = u.dot(&w);
    let e = v.dot(&w);

    let det = a * c - b * b;
    let s = if det < PARALLEL_SEGMENTS_EPSILON {
        0.0
    } else {
        ((b * e - c * d) / det).clamp(0.0, 1.0)
    };

    // A degenerate `seg2` yields an infinite `t` here, clamped to 1.
    let t = b * s + e;
    let t = if t > 0.0 { (t / c).min(1.0).max(0.0) } else { 0.0 };

    (s, t)
}

/// Closest points between two segments, with both parameters clamped jointly.
///
/// This always returns a pair of points achieving the distance between the segments. Returns the
/// point on `seg1` then the point on `seg2`.
pub fn closest_points_segment_segment_exact(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    let (s, t) = closest_points_segment_segment_exact_with_params(seg1, seg2);
    (seg1.point_at(s), seg2.point_at(t))
}

/// Parameters `(s, t)` of the closest points between two segments, with both parameters clamped
/// jointly.
pub fn closest_points_segment_segment_exact_with_params(
    seg1: &Segment,
    seg2: &Segment,
) -> (Real, Real) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let eps = crate::math::DEFAULT_EPSILON;
    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (s, t)
}

#[cfg(test)]
mod test {
    use super::*;

    fn seg(a: [Real; 3], b: [Real; 3]) -> Segment {
        Segment::new(Point::from(a), Point::from(b))
    }

    #[test]
    fn crossing_segments() {
        let s1 = seg([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let s2 = seg([0.0, -1.0, 1.0], [0.0, 1.0, 1.0]);

        let (s, t) = closest_points_segment_segment_with_params(&s1, &s2);
        assert_relative_eq!(s, 0.5);
        assert_relative_eq!(t, 0.5);

        let (p1, p2) = closest_points_segment_segment(&s1, &s2);
        assert_relative_eq!(p1, Point::origin());
        assert_relative_eq!(p2, Point::new(0.0, 0.0, 1.0));
        assert_eq!(closest_points_segment_segment_exact(&s1, &s2), (p1, p2));
    }

    #[test]
    fn parallel_segments_use_first_endpoint() {
        let s1 = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let s2 = seg([0.5, 1.0, 0.0], [3.0, 1.0, 0.0]);

        let (s, t) = closest_points_segment_segment_with_params(&s1, &s2);
        assert_eq!(s, 0.0);
        // `seg1.a` is before `seg2`, so `t` is clamped to the start.
        assert_eq!(t, 0.0);
    }

    #[test]
    fn degenerate_second_segment() {
        let s1 = seg([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let point = seg([0.25, 2.0, 0.0], [0.25, 2.0, 0.0]);

        let (p1, p2) = closest_points_segment_segment(&s1, &point);
        assert_eq!(p2, point.a);
        // The system is singular, so `s` falls back to 0 instead of the projection at 0.625.
        assert_eq!(p1, Point::new(-1.0, 0.0, 0.0));

        let (p1, p2) = closest_points_segment_segment_exact(&s1, &point);
        assert_eq!(p2, point.a);
        assert_relative_eq!(p1, Point::new(0.25, 0.0, 0.0));
    }

    #[test]
    fn sequential_clamping_differs_from_exact_solution() {
        // The supporting lines cross at s = 0.5, t = -1, outside of `seg2`. The sequential
        // version keeps s = 0.5 and clamps t, the exact one re-projects `seg2.a` on `seg1`.
        let s1 = seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
        let s2 = seg([1.0, 1.0, 0.0], [0.0, 2.0, 0.0]);

        let (s, t) = closest_points_segment_segment_with_params(&s1, &s2);
        assert_relative_eq!(s, 0.5);
        assert_eq!(t, 0.0);

        let (s_exact, t_exact) = closest_points_segment_segment_exact_with_params(&s1, &s2);
        assert_relative_eq!(s_exact, 0.25);
        assert_eq!(t_exact, 0.0);

        let (p1, p2) = closest_points_segment_segment(&s1, &s2);
        let (q1, q2) = closest_points_segment_segment_exact(&s1, &s2);
        assert!(na::distance(&q1, &q2) < na::distance(&p1, &p2));
        assert_relative_eq!(na::distance(&q1, &q2), 1.0);
        assert_relative_eq!(na::distance(&p1, &p2), Real::sqrt(2.0));
    }
}
