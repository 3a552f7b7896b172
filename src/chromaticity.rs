//! This module contains a struct, [`Chromaticity`], that models a point on the CIE 1931 xy plane and
//! supports the limited 2D vector math that gamut mapping needs: addition, subtraction, scaling,
//! dot and cross products, and distances. Every operation is done in `f64`: a gamut boundary is
//! only a few thousandths wide in places, so losing precision in the middle of a nearest-point
//! search would pick the wrong edge.

use std::ops::{Add, Mul, Sub};

use geo::Point;
use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can multiply a [`Chromaticity`] to scale it.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point (or, for the geometry in [`gamut`](crate::gamut), a difference of two points) in CIE xy
/// chromaticity space. Nominally both coordinates are between 0 and 1, but nothing clamps them:
/// out-of-range values are exactly what gamut fitting exists to fix.
///
/// # Example
/// ```
/// # use xygamut::chromaticity::Chromaticity;
/// let red = Chromaticity::new(0.692, 0.308);
/// let green = Chromaticity::new(0.17, 0.7);
/// let edge = green - red;
/// assert!((edge.x + 0.522).abs() <= 1e-12);
/// let half = red + edge * 0.5;
/// assert!((half.y - 0.504).abs() <= 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    /// The x chromaticity coordinate, X / (X + Y + Z).
    pub x: f64,
    /// The y chromaticity coordinate, Y / (X + Y + Z).
    pub y: f64,
}

impl Add for Chromaticity {
    type Output = Chromaticity;
    fn add(self, rhs: Chromaticity) -> Chromaticity {
        Chromaticity {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Chromaticity {
    type Output = Chromaticity;
    fn sub(self, rhs: Chromaticity) -> Chromaticity {
        Chromaticity {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

// scalar multiplication only goes one way: `point * 2.` works, `2. * point` doesn't
impl<U: Scalar> Mul<U> for Chromaticity {
    type Output = Chromaticity;
    fn mul(self, rhs: U) -> Chromaticity {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Chromaticity {
            x: self.x * r,
            y: self.y * r,
        }
    }
}

impl Chromaticity {
    /// Makes a new chromaticity point from its two coordinates.
    pub const fn new(x: f64, y: f64) -> Chromaticity {
        Chromaticity { x, y }
    }

    /// The dot product, treating both points as vectors from the origin.
    pub fn dot(&self, other: &Chromaticity) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of the two vectors: positive if `other` is
    /// counterclockwise from `self`. Across two edges of a triangle this is twice its signed area.
    /// # Example
    /// ```
    /// # use xygamut::chromaticity::Chromaticity;
    /// let a = Chromaticity::new(1., 0.);
    /// let b = Chromaticity::new(0., 2.);
    /// assert_eq!(a.cross(&b), 2.);
    /// assert_eq!(b.cross(&a), -2.);
    /// ```
    pub fn cross(&self, other: &Chromaticity) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The Euclidean distance between two chromaticities. Not a measure of how different two colors
    /// look (xy is far from perceptually uniform), but it is the distance gamut fitting minimizes.
    pub fn distance(&self, other: &Chromaticity) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns `true` if both coordinates are finite (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Checks whether two chromaticities are equal up to floating-point noise.
    pub fn approx_equal(&self, other: &Chromaticity) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = 1e-10)
            && approx_eq!(f64, self.y, other.y, epsilon = 1e-10)
    }
}

impl From<(f64, f64)> for Chromaticity {
    fn from(xy: (f64, f64)) -> Chromaticity {
        Chromaticity { x: xy.0, y: xy.1 }
    }
}

impl From<Chromaticity> for (f64, f64) {
    fn from(c: Chromaticity) -> (f64, f64) {
        (c.x, c.y)
    }
}

impl From<Chromaticity> for Point<f64> {
    fn from(c: Chromaticity) -> Point<f64> {
        Point::new(c.x, c.y)
    }
}

impl From<Point<f64>> for Chromaticity {
    fn from(p: Point<f64>) -> Chromaticity {
        Chromaticity { x: p.x(), y: p.y() }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_vector_ops() {
        let p1 = Chromaticity::new(0.25, 0.5);
        let p2 = Chromaticity::new(0.125, 0.25);
        assert_eq!(p1 + p2, Chromaticity::new(0.375, 0.75));
        assert_eq!(p1 - p2, Chromaticity::new(0.125, 0.25));
        assert_eq!(p2 * 2u8, p1);
        assert_eq!(p1 * 0.5, p2);
        assert_eq!(p1.dot(&p2), 0.15625);
        assert_eq!(p1.cross(&p2), 0.0);
    }

    #[test]
    fn test_distance() {
        let p1 = Chromaticity::new(0., 0.);
        let p2 = Chromaticity::new(0.3, 0.4);
        assert!((p1.distance(&p2) - 0.5).abs() <= 1e-12);
        assert_eq!(p2.distance(&p1), p1.distance(&p2));
    }

    #[test]
    fn test_geo_point_conversion() {
        let c = Chromaticity::new(0.31271, 0.32902);
        let p: Point<f64> = c.into();
        assert_eq!(p.x(), 0.31271);
        assert_eq!(Chromaticity::from(p), c);
        let t: (f64, f64) = c.into();
        assert_eq!(Chromaticity::from(t), c);
    }

    #[test]
    fn test_finite() {
        assert!(Chromaticity::new(0.2, 0.3).is_finite());
        assert!(!Chromaticity::new(f64::NAN, 0.3).is_finite());
        assert!(!Chromaticity::new(0.2, f64::INFINITY).is_finite());
    }
}
