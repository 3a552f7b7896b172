//! This module implements CIE xyY: a chromaticity on the xy plane plus the luminance Y that the
//! projection onto that plane throws away. It's the form lights want a color in, as a position in
//! their gamut and a brightness.

use crate::chromaticity::Chromaticity;
use crate::color::{Color, XYZColor};
use crate::colors::rgbcolor::LinearRGBColor;
use crate::white_point::D65;

/// A color in CIE xyY.
/// # Example
/// ```
/// # use xygamut::prelude::*;
/// # use xygamut::colors::XyYColor;
/// let white = xygamut::rgb_to_xy(1., 1., 1.);
/// assert!((white.x - 0.31271).abs() <= 1e-3);
/// assert!((white.y - 0.32902).abs() <= 1e-3);
/// assert!((white.luminance - 1.).abs() <= 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyYColor {
    /// The x chromaticity coordinate.
    pub x: f64,
    /// The y chromaticity coordinate.
    pub y: f64,
    /// The luminance Y, identical to the Y of the XYZ color this came from. 1 is the reference
    /// white.
    pub luminance: f64,
}

impl XyYColor {
    /// The chromaticity part of the color, without luminance.
    pub fn chromaticity(&self) -> Chromaticity {
        Chromaticity::new(self.x, self.y)
    }

    /// Replaces the chromaticity, keeping luminance.
    pub fn with_chromaticity(&self, xy: Chromaticity) -> XyYColor {
        XyYColor {
            x: xy.x,
            y: xy.y,
            luminance: self.luminance,
        }
    }
}

impl Color for XyYColor {
    fn from_xyz(xyz: XYZColor) -> XyYColor {
        let xy = xyz_to_xy(xyz.x, xyz.y, xyz.z);
        XyYColor {
            x: xy.x,
            y: xy.y,
            luminance: xyz.y,
        }
    }
    /// Goes back to XYZ by scaling the chromaticity up to the stored luminance. A chromaticity with
    /// y = 0 can't carry any luminance, so it maps to black.
    fn to_xyz(&self) -> XYZColor {
        if self.y == 0.0 {
            XYZColor::new(0., 0., 0.)
        } else {
            let scale = self.luminance / self.y;
            XYZColor {
                x: self.x * scale,
                y: self.luminance,
                z: (1.0 - self.x - self.y) * scale,
            }
        }
    }
}

/// Projects an XYZ tristimulus value onto the xy chromaticity plane. A color with X + Y + Z = 0 has
/// no chromaticity at all, so the D65 white point is returned in its place rather than dividing by
/// zero. Nothing else is clamped: out-of-range XYZ gives out-of-range xy.
/// # Example
/// ```
/// let black = xygamut::xyz_to_xy(0., 0., 0.);
/// assert_eq!((black.x, black.y), (0.31271, 0.32902));
/// ```
pub fn xyz_to_xy(x: f64, y: f64, z: f64) -> Chromaticity {
    let sum = x + y + z;
    if sum == 0.0 {
        D65.chromaticity()
    } else {
        Chromaticity::new(x / sum, y / sum)
    }
}

/// Converts linear RGB (sRGB primaries, D65 white, no gamma) to xyY: the chromaticity along with
/// the luminance Y, since a light needs both.
pub fn rgb_to_xy(r: f64, g: f64, b: f64) -> XyYColor {
    XyYColor::from_xyz(LinearRGBColor { r, g, b }.to_xyz())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::white_point::{D65_X, D65_Y};

    #[test]
    fn test_zero_sum_falls_back_to_white() {
        let xy = xyz_to_xy(0., 0., 0.);
        assert_eq!(xy.x, D65_X);
        assert_eq!(xy.y, D65_Y);
        // negative components that cancel out are treated the same way
        let xy = xyz_to_xy(0.5, -0.25, -0.25);
        assert_eq!(xy, Chromaticity::new(D65_X, D65_Y));
    }

    #[test]
    fn test_xyz_to_xy() {
        let xy = xyz_to_xy(0.25, 0.5, 0.25);
        assert_eq!(xy, Chromaticity::new(0.25, 0.5));
        // no clamping
        let xy = xyz_to_xy(2.0, -0.5, -0.5);
        assert_eq!(xy, Chromaticity::new(2.0, -0.5));
    }

    #[test]
    fn test_rgb_white() {
        let white = rgb_to_xy(1., 1., 1.);
        assert!((white.x - D65_X).abs() <= 1e-3);
        assert!((white.y - D65_Y).abs() <= 1e-3);
        assert!((white.luminance - 1.0).abs() <= 1e-6);
    }

    #[test]
    fn test_rgb_primaries() {
        // sRGB primaries as listed in IEC 61966-2-1
        let red = rgb_to_xy(1., 0., 0.);
        assert!((red.x - 0.64).abs() <= 1e-4);
        assert!((red.y - 0.33).abs() <= 1e-4);
        let green = rgb_to_xy(0., 1., 0.);
        assert!((green.x - 0.30).abs() <= 1e-4);
        assert!((green.y - 0.60).abs() <= 1e-4);
        let blue = rgb_to_xy(0., 0., 1.);
        assert!((blue.x - 0.15).abs() <= 1e-4);
        assert!((blue.y - 0.06).abs() <= 1e-4);
    }

    #[test]
    fn test_rgb_black_is_white_point() {
        let black = rgb_to_xy(0., 0., 0.);
        assert_eq!(black.chromaticity(), Chromaticity::new(D65_X, D65_Y));
        assert_eq!(black.luminance, 0.0);
    }

    #[test]
    fn test_xyy_round_trip() {
        let xyz = XYZColor::new(0.3, 0.2, 0.1);
        let xyy: XyYColor = xyz.convert();
        assert!(xyy.to_xyz().approx_equal(&xyz));
        let degenerate = XyYColor {
            x: 0.5,
            y: 0.0,
            luminance: 0.3,
        };
        assert_eq!(degenerate.to_xyz(), XYZColor::new(0., 0., 0.));
    }
}
