//! This module describes the gamut of a light, the set of chromaticities it can physically produce,
//! as a triangle on the xy plane spanned by its red, green, and blue primaries. It answers two
//! questions: is a chromaticity inside the triangle, and if not, what's the closest one that is?
//!
//! The closest point is searched on the triangle's boundary: each edge is a line segment, and the
//! point on each segment nearest the target is found by clamped projection. The three candidates
//! are then compared in a fixed order (red-green, blue-red, green-blue), keeping the first one on
//! ties, so the answer never depends on anything but the inputs.
//!
//! A triangle whose vertices are collinear has no inside. The call-time functions don't check for
//! this: [`in_gamut`] simply answers `false` for every point, because the zero area turns the
//! affine coordinates into NaN or infinity. Use [`GamutTriangle::validate`] (which
//! [`GamutRegistry`](crate::registry::GamutRegistry) does when loading gamuts) to reject such
//! triangles up front.

use geo::{Closest, ClosestPoint, Line, Point};

use crate::chromaticity::Chromaticity;
use crate::error::{Error, Result};

// Rounding can leave a point projected onto an edge a few ulps outside the triangle. Fitted points
// are nudged inward by at most this much until the containment test agrees they're inside.
const MAX_NUDGE: f64 = 1e-9;

/// A triangular gamut on the CIE xy plane. The vertices must not be collinear.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamutTriangle {
    /// The chromaticity of the red primary.
    pub red: Chromaticity,
    /// The chromaticity of the green primary.
    pub green: Chromaticity,
    /// The chromaticity of the blue primary.
    pub blue: Chromaticity,
}

/// Hue gamut A, used by the first LivingColors and LightStrip products.
pub const GAMUT_A: GamutTriangle = GamutTriangle::new(
    Chromaticity::new(0.704, 0.296),
    Chromaticity::new(0.2151, 0.7106),
    Chromaticity::new(0.138, 0.08),
);

/// Hue gamut B, used by the first generations of color bulbs.
pub const GAMUT_B: GamutTriangle = GamutTriangle::new(
    Chromaticity::new(0.675, 0.322),
    Chromaticity::new(0.409, 0.518),
    Chromaticity::new(0.167, 0.04),
);

/// Hue gamut C, used by current color bulbs and light strips.
pub const GAMUT_C: GamutTriangle = GamutTriangle::new(
    Chromaticity::new(0.692, 0.308),
    Chromaticity::new(0.17, 0.7),
    Chromaticity::new(0.153, 0.048),
);

/// One of the three edges of a [`GamutTriangle`], named by the primaries at its endpoints. The
/// order of the variants is the order edges are searched in when fitting a point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GamutEdge {
    /// The edge from red to green.
    RedGreen,
    /// The edge from blue to red.
    BlueRed,
    /// The edge from green to blue.
    GreenBlue,
}

impl GamutEdge {
    /// Every edge, in search order.
    pub const ALL: [GamutEdge; 3] = [GamutEdge::RedGreen, GamutEdge::BlueRed, GamutEdge::GreenBlue];

    /// The (start, end) vertices of this edge in the given triangle.
    pub fn endpoints(self, triangle: &GamutTriangle) -> (Chromaticity, Chromaticity) {
        match self {
            GamutEdge::RedGreen => (triangle.red, triangle.green),
            GamutEdge::BlueRed => (triangle.blue, triangle.red),
            GamutEdge::GreenBlue => (triangle.green, triangle.blue),
        }
    }
}

// clamped projection of p onto the segment a-b: the ends come back exactly when the projection
// falls outside the segment, and a zero-length segment is just its start
fn closest_point_on_segment(a: Chromaticity, b: Chromaticity, p: Chromaticity) -> Chromaticity {
    if a == b {
        return a;
    }
    let segment = Line::new(Point::from(a), Point::from(b));
    match segment.closest_point(&Point::from(p)) {
        Closest::Intersection(q) | Closest::SinglePoint(q) => q.into(),
        Closest::Indeterminate => a,
    }
}

impl GamutTriangle {
    /// Makes a gamut from its three primaries.
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> GamutTriangle {
        GamutTriangle { red, green, blue }
    }

    /// The signed area of the triangle: positive if red, green, blue run counterclockwise, and 0 if
    /// the triangle is degenerate.
    pub fn signed_area(&self) -> f64 {
        (self.green - self.red).cross(&(self.blue - self.red)) / 2.0
    }

    /// Returns `true` if the vertices are collinear, which leaves the triangle without an inside.
    pub fn is_degenerate(&self) -> bool {
        self.signed_area() == 0.0
    }

    /// The centroid (average of the three vertices), which is always strictly inside a
    /// non-degenerate triangle.
    pub fn centroid(&self) -> Chromaticity {
        (self.red + self.green + self.blue) * (1.0 / 3.0)
    }

    /// Checks that this triangle can be used for gamut mapping: every vertex finite and the
    /// vertices not collinear. `name` is only used to label the error.
    ///
    /// # Errors
    /// [`Error::NonFiniteGamut`] if a coordinate is NaN or infinite, and [`Error::DegenerateGamut`]
    /// if the triangle has zero area.
    pub fn validate(&self, name: &str) -> Result<()> {
        if !(self.red.is_finite() && self.green.is_finite() && self.blue.is_finite()) {
            Err(Error::NonFiniteGamut {
                name: name.to_string(),
            })
        } else if self.is_degenerate() {
            Err(Error::DegenerateGamut {
                name: name.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Returns `true` if the chromaticity is inside the triangle or on its boundary. The point is
    /// written as red + s·(green − red) + t·(blue − red), and it's inside exactly when s ≥ 0, t ≥ 0,
    /// and s + t ≤ 1. Always `false` for a degenerate triangle.
    /// # Example
    /// ```
    /// # use xygamut::chromaticity::Chromaticity;
    /// # use xygamut::gamut::GAMUT_C;
    /// assert!(GAMUT_C.contains(Chromaticity::new(0.31271, 0.32902)));
    /// assert!(!GAMUT_C.contains(Chromaticity::new(0.9, 0.9)));
    /// ```
    pub fn contains(&self, point: Chromaticity) -> bool {
        let v1 = self.green - self.red;
        let v2 = self.blue - self.red;
        let q = point - self.red;

        let denom = v1.cross(&v2);
        let s = q.cross(&v2) / denom;
        let t = v1.cross(&q) / denom;

        s >= 0.0 && t >= 0.0 && s + t <= 1.0
    }

    /// Finds the point on the triangle's boundary closest to `point`, and the edge it lies on. Ties
    /// between edges go to the edge that comes first in [`GamutEdge::ALL`].
    pub fn closest_edge_point(&self, point: Chromaticity) -> (GamutEdge, Chromaticity) {
        let mut closest_edge = GamutEdge::RedGreen;
        let (start, end) = closest_edge.endpoints(self);
        let mut closest = closest_point_on_segment(start, end, point);
        let mut lowest = point.distance(&closest);

        for &edge in &GamutEdge::ALL[1..] {
            let (start, end) = edge.endpoints(self);
            let candidate = closest_point_on_segment(start, end, point);
            let dist = point.distance(&candidate);
            if dist < lowest {
                lowest = dist;
                closest = candidate;
                closest_edge = edge;
            }
        }
        (closest_edge, closest)
    }

    /// Returns the closest chromaticity to `point` that is inside the triangle. Points already
    /// inside are returned unchanged; anything else lands on the boundary (to within rounding, on
    /// the inside of it). Fitting twice is the same as fitting once.
    /// # Example
    /// ```
    /// # use xygamut::chromaticity::Chromaticity;
    /// # use xygamut::gamut::GAMUT_C;
    /// let fitted = GAMUT_C.fit(Chromaticity::new(0.8, 0.1));
    /// assert!(GAMUT_C.contains(fitted));
    /// assert_eq!(GAMUT_C.fit(fitted), fitted);
    /// ```
    pub fn fit(&self, point: Chromaticity) -> Chromaticity {
        if self.contains(point) {
            return point;
        }
        let (edge, closest) = self.closest_edge_point(point);
        let fitted = self.settle(closest);
        debug!(
            "fitted ({}, {}) onto {:?} edge at ({}, {})",
            point.x, point.y, edge, fitted.x, fitted.y
        );
        fitted
    }

    // walks a boundary point towards the centroid in doubling steps until it tests as inside
    fn settle(&self, boundary_point: Chromaticity) -> Chromaticity {
        if self.contains(boundary_point) {
            return boundary_point;
        }
        let inward = self.centroid() - boundary_point;
        let mut step = f64::EPSILON;
        while step <= MAX_NUDGE {
            let nudged = boundary_point + inward * step;
            if self.contains(nudged) {
                return nudged;
            }
            step *= 2.0;
        }
        boundary_point
    }
}

/// Returns `true` if the chromaticity lies inside the gamut triangle or on its edge. See
/// [`GamutTriangle::contains`].
pub fn in_gamut(point: Chromaticity, triangle: &GamutTriangle) -> bool {
    triangle.contains(point)
}

/// Returns the nearest chromaticity to `point` that the gamut contains, or `point` itself if it's
/// already inside. See [`GamutTriangle::fit`].
/// # Example
/// ```
/// # use xygamut::chromaticity::Chromaticity;
/// # use xygamut::gamut::GAMUT_C;
/// let white = Chromaticity::new(0.31271, 0.32902);
/// assert_eq!(xygamut::fit_in_gamut(white, &GAMUT_C), white);
/// let fitted = xygamut::fit_in_gamut(Chromaticity::new(1.0, 1.0), &GAMUT_C);
/// assert!(xygamut::in_gamut(fitted, &GAMUT_C));
/// ```
pub fn fit_in_gamut(point: Chromaticity, triangle: &GamutTriangle) -> Chromaticity {
    triangle.fit(point)
}

/// Returns the point on the gamut's boundary closest to `point`, along with the edge it's on. See
/// [`GamutTriangle::closest_edge_point`].
pub fn closest_edge_point(point: Chromaticity, triangle: &GamutTriangle) -> (GamutEdge, Chromaticity) {
    triangle.closest_edge_point(point)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::white_point::D65;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(seed: u64, n: usize) -> Vec<Chromaticity> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Chromaticity::new(rng.gen_range(-0.5..1.5), rng.gen_range(-0.5..1.5)))
            .collect()
    }

    #[test]
    fn test_white_point_in_gamut_c() {
        assert!(in_gamut(D65.chromaticity(), &GAMUT_C));
        assert!(in_gamut(D65.chromaticity(), &GAMUT_A));
        // gamut B's green is too weak to reach daylight white
        assert!(!in_gamut(D65.chromaticity(), &GAMUT_B));
    }

    #[test]
    fn test_far_point_out_of_gamut() {
        assert!(!in_gamut(Chromaticity::new(0.9, 0.9), &GAMUT_C));
        assert!(!in_gamut(Chromaticity::new(0.0, 0.0), &GAMUT_C));
        assert!(!in_gamut(Chromaticity::new(-0.1, 0.5), &GAMUT_C));
    }

    #[test]
    fn test_vertices_are_in_gamut() {
        for gamut in &[GAMUT_A, GAMUT_B, GAMUT_C] {
            assert!(gamut.contains(gamut.red));
            assert!(gamut.contains(gamut.green));
            assert!(gamut.contains(gamut.blue));
            assert!(gamut.contains(gamut.centroid()));
        }
    }

    #[test]
    fn test_far_corner_fits_onto_red_green() {
        // projection of (1, 1) onto red-green lands inside the segment at t ~ 0.2593, closer than
        // the red vertex (the nearest blue-red point) or the green vertex (nearest green-blue point)
        let point = Chromaticity::new(1.0, 1.0);
        let (edge, closest) = closest_edge_point(point, &GAMUT_C);
        assert_eq!(edge, GamutEdge::RedGreen);
        assert!((closest.x - 0.5566603151956597).abs() <= 1e-12);
        assert!((closest.y - 0.40963439931666934).abs() <= 1e-12);

        let fitted = fit_in_gamut(point, &GAMUT_C);
        assert!((fitted.x - 0.5566603151956597).abs() <= 1e-9);
        assert!((fitted.y - 0.40963439931666934).abs() <= 1e-9);
        assert!(in_gamut(fitted, &GAMUT_C));
    }

    #[test]
    fn test_fits_onto_green_blue() {
        let (edge, closest) = closest_edge_point(Chromaticity::new(0.1, 0.5), &GAMUT_C);
        assert_eq!(edge, GamutEdge::GreenBlue);
        assert!((closest.x - 0.16474126278523624).abs() <= 1e-12);
        assert!((closest.y - 0.4983119609396487).abs() <= 1e-12);
    }

    #[test]
    fn test_vertex_ties_go_to_first_edge() {
        // beyond red: both red-green and blue-red clamp to the red vertex itself
        let (edge, closest) = closest_edge_point(Chromaticity::new(0.9, 0.3), &GAMUT_C);
        assert_eq!(edge, GamutEdge::RedGreen);
        assert_eq!(closest, GAMUT_C.red);
        // beyond blue: blue-red and green-blue both clamp to blue, and blue-red is searched first
        let (edge, closest) = closest_edge_point(Chromaticity::new(0.0, 0.0), &GAMUT_C);
        assert_eq!(edge, GamutEdge::BlueRed);
        assert_eq!(closest, GAMUT_C.blue);
        assert_eq!(fit_in_gamut(Chromaticity::new(0.0, 0.0), &GAMUT_C), GAMUT_C.blue);
    }

    #[test]
    fn test_in_gamut_points_unchanged() {
        for point in random_points(7, 2000) {
            if in_gamut(point, &GAMUT_C) {
                assert_eq!(fit_in_gamut(point, &GAMUT_C), point);
            }
        }
        let white = D65.chromaticity();
        assert_eq!(fit_in_gamut(white, &GAMUT_C), white);
    }

    #[test]
    fn test_fitted_points_in_gamut_and_stable() {
        for gamut in &[GAMUT_A, GAMUT_B, GAMUT_C] {
            for point in random_points(42, 2000) {
                let fitted = fit_in_gamut(point, gamut);
                assert!(in_gamut(fitted, gamut), "{:?} fitted to {:?}", point, fitted);
                assert_eq!(fit_in_gamut(fitted, gamut), fitted);
            }
        }
    }

    #[test]
    fn test_fitted_points_on_boundary() {
        for point in random_points(1234, 500) {
            if !in_gamut(point, &GAMUT_C) {
                let fitted = fit_in_gamut(point, &GAMUT_C);
                let (_, boundary) = closest_edge_point(point, &GAMUT_C);
                assert!(fitted.distance(&boundary) <= 1e-9);
                // nothing on the boundary beats the chosen point
                for &edge in &GamutEdge::ALL {
                    let (start, end) = edge.endpoints(&GAMUT_C);
                    let other = closest_point_on_segment(start, end, point);
                    assert!(point.distance(&boundary) <= point.distance(&other));
                }
            }
        }
    }

    #[test]
    fn test_segment_projection_clamps() {
        let a = Chromaticity::new(0.0, 0.0);
        let b = Chromaticity::new(1.0, 0.0);
        assert_eq!(
            closest_point_on_segment(a, b, Chromaticity::new(-1.0, 1.0)),
            a
        );
        assert_eq!(closest_point_on_segment(a, b, Chromaticity::new(2.0, 1.0)), b);
        assert_eq!(
            closest_point_on_segment(a, b, Chromaticity::new(0.5, 1.0)),
            Chromaticity::new(0.5, 0.0)
        );
        // zero-length segment
        assert_eq!(closest_point_on_segment(a, a, Chromaticity::new(0.5, 1.0)), a);
    }

    #[test]
    fn test_signed_area_and_validation() {
        assert!((GAMUT_C.signed_area() - 0.173504).abs() <= 1e-9);
        assert!(GAMUT_C.validate("C").is_ok());

        let collinear = GamutTriangle::new(
            Chromaticity::new(0.1, 0.1),
            Chromaticity::new(0.2, 0.2),
            Chromaticity::new(0.3, 0.3),
        );
        assert!(collinear.is_degenerate());
        match collinear.validate("line") {
            Err(Error::DegenerateGamut { name }) => assert_eq!(name, "line"),
            other => panic!("expected a degenerate gamut error, got {:?}", other),
        }

        let broken = GamutTriangle::new(
            Chromaticity::new(f64::NAN, 0.1),
            Chromaticity::new(0.2, 0.2),
            Chromaticity::new(0.3, 0.1),
        );
        match broken.validate("nan") {
            Err(Error::NonFiniteGamut { name }) => assert_eq!(name, "nan"),
            other => panic!("expected a non-finite gamut error, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_triangle_contains_nothing() {
        let collinear = GamutTriangle::new(
            Chromaticity::new(0.1, 0.1),
            Chromaticity::new(0.2, 0.2),
            Chromaticity::new(0.3, 0.3),
        );
        assert!(!collinear.contains(Chromaticity::new(0.2, 0.2)));
        assert!(!collinear.contains(Chromaticity::new(0.5, 0.1)));
        // fitting still lands on the segment rather than producing NaN
        let fitted = collinear.fit(Chromaticity::new(0.2, 0.0));
        assert!(fitted.is_finite());
    }
}
