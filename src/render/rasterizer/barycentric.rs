//! Barycentric coordinate computation for attribute interpolation.
//!
//! Given a triangle ABC and a point P, the barycentric weights express P as
//! a weighted combination of the three vertices:
//!
//! ```text
//!          A
//!         /|\
//!        / | \
//!       /  |  \
//!      /  (p)  \
//!     /  /   \  \
//!    / /       \ \
//!   B-------------C
//! ```
//!
//! Each weight is the ratio of a sub-triangle's signed area to the area of
//! the full triangle, and the three always sum to 1. Any per-vertex
//! attribute can then be interpolated at P as
//! `alpha * attr_a + beta * attr_b + gamma * attr_c`.

use crate::math::vec2::Vec2;

/// Interpolation weights for a point relative to a triangle.
///
/// `alpha + beta + gamma == 1` by construction: gamma is derived as
/// `1 - alpha - beta` rather than measured independently. For points outside
/// the triangle, individual weights fall outside [0, 1]; the rasterizer only
/// queries points on scanned spans, so that case is not rejected here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarycentricWeights {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

/// Compute the barycentric weights of point `p` against triangle `(a, b, c)`.
///
/// Pure function, no side effects. The full triangle area is the 2D cross
/// product of AB and AC; alpha is the area of sub-triangle BCP over it, beta
/// the area of ACP over it.
///
/// A degenerate (collinear) triangle has zero area and the division produces
/// infinite or NaN weights. Callers must not invoke this on degenerate
/// triangles; the scan-conversion loops never do, because a zero-height
/// triangle produces no fill rows at all.
#[inline]
pub fn barycentric_weights(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> BarycentricWeights {
    // Vectors between the vertices and to the query point
    let ab = b - a;
    let bc = c - b;
    let ac = c - a;
    let ap = p - a;
    let bp = p - b;

    // Twice the signed area of the full triangle ABC
    let area_abc = ab.cross(ac);

    // Area of sub-triangle BCP over the full area
    let alpha = bc.cross(bp) / area_abc;

    // Area of sub-triangle ACP over the full area
    let beta = (ap.x * ac.y - ac.x * ap.y) / area_abc;

    // Weights always sum to 1
    let gamma = 1.0 - alpha - beta;

    BarycentricWeights { alpha, beta, gamma }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> (Vec2, Vec2, Vec2) {
        (
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        )
    }

    #[test]
    fn vertex_a_gets_full_alpha() {
        let (a, b, c) = triangle();
        let w = barycentric_weights(a, b, c, a);
        assert_relative_eq!(w.alpha, 1.0, epsilon = 1e-6);
        assert_relative_eq!(w.beta, 0.0, epsilon = 1e-6);
        assert_relative_eq!(w.gamma, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn vertex_b_gets_full_beta() {
        let (a, b, c) = triangle();
        let w = barycentric_weights(a, b, c, b);
        assert_relative_eq!(w.beta, 1.0, epsilon = 1e-6);
        assert_relative_eq!(w.alpha, 0.0, epsilon = 1e-6);
        assert_relative_eq!(w.gamma, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn vertex_c_gets_full_gamma() {
        let (a, b, c) = triangle();
        let w = barycentric_weights(a, b, c, c);
        assert_relative_eq!(w.gamma, 1.0, epsilon = 1e-6);
        assert_relative_eq!(w.alpha, 0.0, epsilon = 1e-6);
        assert_relative_eq!(w.beta, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn centroid_weights_are_equal() {
        let (a, b, c) = triangle();
        let centroid = Vec2::new(10.0 / 3.0, 10.0 / 3.0);
        let w = barycentric_weights(a, b, c, centroid);
        assert_relative_eq!(w.alpha, 1.0 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(w.beta, 1.0 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(w.gamma, 1.0 / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn interior_weights_partition_unity_and_stay_in_range() {
        let (a, b, c) = triangle();
        for y in 0..10 {
            for x in 0..(10 - y) {
                let p = Vec2::new(x as f32, y as f32);
                let w = barycentric_weights(a, b, c, p);
                assert_relative_eq!(w.alpha + w.beta + w.gamma, 1.0, epsilon = 1e-5);
                assert!((0.0..=1.0).contains(&w.alpha));
                assert!((0.0..=1.0).contains(&w.beta));
                assert!((0.0..=1.0).contains(&w.gamma));
            }
        }
    }

    #[test]
    fn winding_order_does_not_break_partition_of_unity() {
        // Clockwise variant of the same triangle (negative area)
        let (a, b, c) = triangle();
        let p = Vec2::new(2.0, 3.0);
        let w_ccw = barycentric_weights(a, b, c, p);
        let w_cw = barycentric_weights(a, c, b, p);
        assert_relative_eq!(w_cw.alpha + w_cw.beta + w_cw.gamma, 1.0, epsilon = 1e-5);
        // Same point, same alpha for vertex a regardless of winding
        assert_relative_eq!(w_cw.alpha, w_ccw.alpha, epsilon = 1e-5);
    }
}
