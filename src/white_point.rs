//! This module provides the reference white that every conversion in xygamut is anchored to: CIE
//! standard illuminant D65, a model of average daylight. The tristimulus values are normalized so
//! that the luminance Y of the white is 1, not 100 as in most printed tables, so that luminance can
//! be handed to a light as its brightness directly. The chromaticity is the usual 2° observer
//! value, (0.31271, 0.32902).

use crate::chromaticity::Chromaticity;

/// A reference white, both as a tristimulus value (used to normalize XYZ before the CIELAB
/// nonlinearity) and as a chromaticity (used when a color has no chromaticity of its own, like
/// black).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitePoint {
    /// X of the white, relative to Y = 1.
    pub xn: f64,
    /// Y of the white. Always 1 for the whites defined here.
    pub yn: f64,
    /// Z of the white, relative to Y = 1.
    pub zn: f64,
    /// The x chromaticity of the white.
    pub x: f64,
    /// The y chromaticity of the white.
    pub y: f64,
}

/// X of the D65 white point.
pub const D65_XN: f64 = 0.95047;
/// Y of the D65 white point.
pub const D65_YN: f64 = 1.0;
/// Z of the D65 white point.
pub const D65_ZN: f64 = 1.08883;
/// x chromaticity of the D65 white point.
pub const D65_X: f64 = 0.31271;
/// y chromaticity of the D65 white point.
pub const D65_Y: f64 = 0.32902;

/// CIE standard illuminant D65.
pub const D65: WhitePoint = WhitePoint {
    xn: D65_XN,
    yn: D65_YN,
    zn: D65_ZN,
    x: D65_X,
    y: D65_Y,
};

impl WhitePoint {
    /// Gets the XYZ coordinates of the white point as an array `[X, Y, Z]`.
    pub fn tristimulus(&self) -> [f64; 3] {
        [self.xn, self.yn, self.zn]
    }

    /// Gets the chromaticity of the white point.
    pub fn chromaticity(&self) -> Chromaticity {
        Chromaticity::new(self.x, self.y)
    }
}
