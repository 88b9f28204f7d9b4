use crate::math::{Point, Real};
use crate::shape::Triangle;

impl Triangle {
    /// Projects a point on this triangle.
    ///
    /// Returns the point of the triangle closest to `pt`. The triangle is treated as a solid
    /// surface: a point above its interior projects on its face, not on its boundary.
    pub fn project_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return a;
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return b;
        }

        let vc = ab_ap * ac_bp - ab_bp * ac_ap;
        if vc <= 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
            // Voronoï region of `ab`.
            let v = ab_ap / (ab_ap - ab_bp);
            return a + ab * v;
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return c;
        }

        let vb = ab_cp * ac_ap - ab_ap * ac_cp;
        if vb <= 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
            // Voronoï region of `ac`.
            let w = ac_ap / (ac_ap - ac_cp);
            return a + ac * w;
        }

        let va = ab_bp * ac_cp - ab_cp * ac_bp;
        if va <= 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
            // Voronoï region of `bc`.
            let w = (ac_bp - ab_bp) / (ac_bp - ab_bp + ab_cp - ac_cp);
            return b + (c - b) * w;
        }

        // Face interior.
        let denom = 1.0 / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        a + ab * v + ac * w
    }

    /// The distance between `pt` and this triangle.
    #[inline]
    pub fn distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        na::distance(pt, &self.project_local_point(pt))
    }
}

#[cfg(test)]
mod test {
    use crate::math::Point;
    use crate::shape::Triangle;

    fn triangle() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn project_on_vertices() {
        let t = triangle();
        assert_eq!(t.project_local_point(&Point::new(-1.0, -1.0, 1.0)), t.a);
        assert_eq!(t.project_local_point(&Point::new(3.0, -0.5, 0.0)), t.b);
        assert_eq!(t.project_local_point(&Point::new(-0.5, 3.0, -2.0)), t.c);
    }

    #[test]
    fn project_on_edges() {
        let t = triangle();
        assert_relative_eq!(
            t.project_local_point(&Point::new(1.0, -1.0, 0.5)),
            Point::new(1.0, 0.0, 0.0)
        );
        assert_relative_eq!(
            t.project_local_point(&Point::new(-1.0, 1.5, 0.0)),
            Point::new(0.0, 1.5, 0.0)
        );
        assert_relative_eq!(
            t.project_local_point(&Point::new(2.0, 2.0, 0.0)),
            Point::new(1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn project_on_face() {
        let t = triangle();
        let pt = Point::new(0.5, 0.5, 3.0);
        assert_relative_eq!(t.project_local_point(&pt), Point::new(0.5, 0.5, 0.0));
        assert_relative_eq!(t.distance_to_local_point(&pt), 3.0);
    }
}
