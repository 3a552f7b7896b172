//! This module describes the Bound trait, which lets anything that carries a chromaticity be tested
//! against a light's gamut and pulled into it. Only the chromaticity changes: whatever else the
//! value holds, like the luminance of an [`XyYColor`], is kept as it is.

use crate::chromaticity::Chromaticity;
use crate::colors::XyYColor;
use crate::gamut::GamutTriangle;

/// Describes a value with a position on the xy chromaticity plane that can be moved into a
/// [`GamutTriangle`].
/// # Example
/// Bring a saturated green into gamut B, keeping its brightness.
///
/// ```
/// # use xygamut::prelude::*;
/// # use xygamut::gamut::GAMUT_B;
/// let green = xygamut::rgb_to_xy(0., 1., 0.);
/// assert!(!green.in_gamut(&GAMUT_B));
/// let fitted = green.clamp(&GAMUT_B);
/// assert!(fitted.in_gamut(&GAMUT_B));
/// assert_eq!(fitted.luminance, green.luminance);
/// // already in bounds: nothing moves
/// assert_eq!(fitted.clamp(&GAMUT_B), fitted);
/// ```
pub trait Bound: Copy {
    /// The chromaticity of the value.
    fn xy(&self) -> Chromaticity;
    /// A copy of the value with its chromaticity replaced.
    fn with_xy(&self, xy: Chromaticity) -> Self;
    /// Returns `true` if the value's chromaticity is inside the gamut.
    fn in_gamut(&self, gamut: &GamutTriangle) -> bool {
        gamut.contains(self.xy())
    }
    /// Returns a copy of the value with its chromaticity moved to the closest one inside the gamut.
    /// If it's already inside, this is just a copy.
    fn clamp(&self, gamut: &GamutTriangle) -> Self {
        self.with_xy(gamut.fit(self.xy()))
    }
}

impl Bound for Chromaticity {
    fn xy(&self) -> Chromaticity {
        *self
    }
    fn with_xy(&self, xy: Chromaticity) -> Chromaticity {
        xy
    }
}

impl Bound for XyYColor {
    fn xy(&self) -> Chromaticity {
        self.chromaticity()
    }
    fn with_xy(&self, xy: Chromaticity) -> XyYColor {
        self.with_chromaticity(xy)
    }
}
