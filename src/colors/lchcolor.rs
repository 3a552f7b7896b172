//! This file implements CIE LCh, the cylindrical form of CIELAB: lightness, chroma (distance from
//! the neutral axis), and hue (angle around it). CIELAB itself only shows up as the intermediate a
//! and b axes, so it doesn't get a type of its own here.
//!
//! The forward and inverse transforms share one piecewise nonlinearity. The forward half compares
//! its input against (6/29)³ and the inverse half compares against 6/29: these are the same
//! breakpoint seen from either side, and changing one without the other breaks the round trip.

use std::f64::consts::PI;

use crate::color::{Color, XYZColor};
use crate::white_point::{D65_XN, D65_YN, D65_ZN};

const DELTA: f64 = 6.0 / 29.0;

// the CIELAB nonlinearity: a cube root, with a linear segment near zero so the slope stays finite
fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// A color in CIE LCh, relative to the D65 white point.
/// # Example
///
/// ```
/// # use xygamut::prelude::*;
/// # use xygamut::colors::LChColor;
/// // hue-rotate a color halfway around the wheel, keeping lightness and chroma
/// let orange = xygamut::xyz_to_lch(0.4, 0.3, 0.05);
/// let mut opposite = orange;
/// opposite.h += std::f64::consts::PI;
/// let xyz = opposite.to_xyz();
/// assert!((xyz.y - 0.3).abs() <= 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LChColor {
    /// Lightness, 0 for black and 100 for the reference white.
    pub l: f64,
    /// Chroma: the Euclidean distance from the neutral axis in the a/b plane. Never negative when
    /// produced by a conversion.
    pub c: f64,
    /// Hue angle in radians, in (-π, π], measured from the +a (red-magenta) axis towards +b
    /// (yellow).
    pub h: f64,
}

impl LChColor {
    /// Returns the hue wrapped into (-π, π], the range conversions produce. Useful after doing
    /// arithmetic on `h`.
    /// # Example
    /// ```
    /// # use xygamut::colors::LChColor;
    /// let lch = LChColor { l: 50., c: 20., h: 3.0 * std::f64::consts::PI / 2.0 };
    /// assert!((lch.normalized_hue() + std::f64::consts::PI / 2.0).abs() <= 1e-12);
    /// ```
    pub fn normalized_hue(&self) -> f64 {
        let wrapped = (self.h + PI).rem_euclid(2.0 * PI) - PI;
        // rem_euclid lands on -π for odd multiples of π: the range is closed at the other end
        if wrapped <= -PI {
            PI
        } else {
            wrapped
        }
    }
}

impl Color for LChColor {
    fn from_xyz(xyz: XYZColor) -> LChColor {
        xyz_to_lch(xyz.x, xyz.y, xyz.z)
    }
    fn to_xyz(&self) -> XYZColor {
        lch_to_xyz(self.l, self.c, self.h)
    }
}

/// Converts a D65 XYZ tristimulus value to LCh, by way of the CIELAB a and b axes.
pub fn xyz_to_lch(x: f64, y: f64, z: f64) -> LChColor {
    let fx = lab_f(x / D65_XN);
    let fy = lab_f(y / D65_YN);
    let fz = lab_f(z / D65_ZN);

    let l = 116.0 * fy - 16.0;
    // opponent axes: a is green-red, b is blue-yellow
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    LChColor {
        l,
        c: a.hypot(b),
        h: b.atan2(a),
    }
}

/// Converts LCh back to a D65 XYZ tristimulus value. This is the inverse of [`xyz_to_lch`] up to
/// floating-point error.
pub fn lch_to_xyz(l: f64, c: f64, h: f64) -> XYZColor {
    let (sin, cos) = h.sin_cos();
    let a = c * cos;
    let b = c * sin;

    let fy = (l + 16.0) / 116.0;
    XYZColor {
        x: D65_XN * lab_f_inv(fy + a / 500.0),
        y: D65_YN * lab_f_inv(fy),
        z: D65_ZN * lab_f_inv(fy - b / 200.0),
    }
}
