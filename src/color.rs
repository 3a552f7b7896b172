//! This file defines the [`Color`] trait and the [`XYZColor`] type that every other color
//! representation converts through. Unlike a general-purpose color library, xygamut only ever works
//! under a single reference white (D65, see [`white_point`](crate::white_point)), so an `XYZColor`
//! carries no illuminant of its own.

/// A point in the CIE 1931 XYZ color space, under the D65 reference white with Y normalized so that
/// white has Y = 1. Components are non-negative for every physically possible color, but that isn't
/// enforced: imaginary colors pass straight through the arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly the red-orange response.
    pub x: f64,
    /// The Y axis of the CIE 1931 XYZ space: luminance.
    pub y: f64,
    /// The Z axis of the CIE 1931 XYZ space, roughly the blue response.
    pub z: f64,
}

impl XYZColor {
    /// Makes a new color from its tristimulus values.
    pub const fn new(x: f64, y: f64, z: f64) -> XYZColor {
        XYZColor { x, y, z }
    }

    /// Returns `true` if the two colors are equal up to floating-point error. This is deliberately
    /// tight: it's for checking that conversions round-trip, not that two colors look the same.
    pub fn approx_equal(&self, other: &XYZColor) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = 1e-10)
            && approx_eq!(f64, self.y, other.y, epsilon = 1e-10)
            && approx_eq!(f64, self.z, other.z, epsilon = 1e-10)
    }
}

/// A trait that includes any color representation that can be converted to and from the CIE 1931
/// XYZ color space. Conversions between any two implementors go through XYZ.
///
/// # Example
/// ```
/// # use xygamut::prelude::*;
/// # use xygamut::colors::LChColor;
/// let white = XYZColor::new(0.95047, 1.0, 1.08883);
/// let lch: LChColor = white.convert();
/// assert!((lch.l - 100.).abs() <= 1e-9);
/// assert!(lch.c <= 1e-9);
/// ```
pub trait Color: Sized {
    /// Converts from an XYZ color to this representation.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts this color to XYZ.
    fn to_xyz(&self) -> XYZColor;
    /// Converts this color to any other representation, by way of XYZ.
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

impl From<[f64; 3]> for XYZColor {
    fn from(xyz: [f64; 3]) -> XYZColor {
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

impl From<XYZColor> for [f64; 3] {
    fn from(xyz: XYZColor) -> [f64; 3] {
        [xyz.x, xyz.y, xyz.z]
    }
}
