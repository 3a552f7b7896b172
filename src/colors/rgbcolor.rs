//! This module implements the two RGB forms a caller is likely to have on hand: linear RGB, where
//! the components are proportional to light output and the conversion to XYZ is a single matrix
//! multiplication, and ordinary gamma-encoded sRGB, the kind written as `#FF8800`. Both use the sRGB
//! (Rec. 709) primaries and the D65 white point.

use std::str::FromStr;

use regex::Regex;

use crate::color::{Color, XYZColor};
use crate::colors::xyycolor::XyYColor;
use crate::consts::{LINEAR_RGB_TO_XYZ, XYZ_TO_LINEAR_RGB};
use crate::error::Error;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$")
        .expect("hex color pattern is valid");
}

/// A color in linear RGB with sRGB primaries. (1, 1, 1) is the D65 reference white with luminance
/// 1; components outside 0 to 1 describe colors outside the sRGB gamut and are converted as-is.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRGBColor {
    /// The red component.
    pub r: f64,
    /// The green component.
    pub g: f64,
    /// The blue component.
    pub b: f64,
}

impl Color for LinearRGBColor {
    fn from_xyz(xyz: XYZColor) -> LinearRGBColor {
        let rgb = &*XYZ_TO_LINEAR_RGB * vector![xyz.x, xyz.y, xyz.z];
        LinearRGBColor {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
    fn to_xyz(&self) -> XYZColor {
        let xyz = &*LINEAR_RGB_TO_XYZ * vector![self.r, self.g, self.b];
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

// the sRGB transfer function, IEC 61966-2-1: linear near black, then a 2.4 power curve
fn decode_gamma(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn encode_gamma(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in gamma-encoded sRGB, the usual "RGB" of screens and hex codes. Components are between 0
/// and 1. Parse one from a hex string with [`str::parse`]: both `#RRGGBB` and the shorthand `#RGB`
/// work, and the leading `#` is optional.
///
/// # Example
/// ```
/// # use xygamut::colors::SRGBColor;
/// let orange: SRGBColor = "#FF8800".parse().unwrap();
/// assert_eq!(orange.r, 1.0);
/// assert_eq!(orange.to_string(), "#FF8800");
/// let short: SRGBColor = "f80".parse().unwrap();
/// assert_eq!(short, orange);
/// assert!("#GG0000".parse::<SRGBColor>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SRGBColor {
    /// The red component, from 0 to 1.
    pub r: f64,
    /// The green component, from 0 to 1.
    pub g: f64,
    /// The blue component, from 0 to 1.
    pub b: f64,
}

impl SRGBColor {
    /// Makes a color out of 8-bit components, as in a hex code.
    pub fn from_u8(r: u8, g: u8, b: u8) -> SRGBColor {
        SRGBColor {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Removes the gamma encoding.
    pub fn to_linear(&self) -> LinearRGBColor {
        LinearRGBColor {
            r: decode_gamma(self.r),
            g: decode_gamma(self.g),
            b: decode_gamma(self.b),
        }
    }

    /// Applies the gamma encoding to a linear color.
    pub fn from_linear(linear: LinearRGBColor) -> SRGBColor {
        SRGBColor {
            r: encode_gamma(linear.r),
            g: encode_gamma(linear.g),
            b: encode_gamma(linear.b),
        }
    }

    /// The components as 8-bit integers, rounded and clamped to 0-255.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        let to_u8 = |c: f64| (c.max(0.0).min(1.0) * 255.0).round() as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

impl Color for SRGBColor {
    fn from_xyz(xyz: XYZColor) -> SRGBColor {
        SRGBColor::from_linear(LinearRGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_linear().to_xyz()
    }
}

impl FromStr for SRGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<SRGBColor, Error> {
        let captures = HEX_COLOR
            .captures(s.trim())
            .ok_or_else(|| Error::InvalidHex(s.to_string()))?;
        let digits = &captures[1];
        // expand the shorthand so every form parses as six digits
        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| vec![c, c]).collect()
        } else {
            digits.to_string()
        };
        let channel = |i: usize| {
            u8::from_str_radix(&full[i..i + 2], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };
        Ok(SRGBColor::from_u8(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for SRGBColor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (r, g, b) = self.int_rgb_tup();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Converts gamma-encoded sRGB to xyY, decoding the transfer curve first and then going through the
/// same matrix as [`rgb_to_xy`](crate::rgb_to_xy).
/// # Example
/// ```
/// # use xygamut::colors::SRGBColor;
/// let gray: SRGBColor = "#808080".parse().unwrap();
/// let xyy = xygamut::srgb_to_xy(gray);
/// assert!((xyy.x - 0.31271).abs() <= 1e-3);
/// assert!((xyy.luminance - 0.2158605).abs() <= 1e-6);
/// ```
pub fn srgb_to_xy(color: SRGBColor) -> XyYColor {
    color.convert()
}
