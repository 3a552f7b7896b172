//! This file provides the constant matrices used for RGB color space conversion, along with a
//! function for computing inverses. The inverse is computed from the forward matrix instead of being
//! copied from a table, because tabulated inverses are rounded independently of the forward matrix:
//! converting to XYZ and back would then slowly drift, even though nothing should change.

use rulinalg::matrix::Matrix;

/// Not safe for general use. The only reason this is here is to calculate the inverse of constant
/// matrices. This panics on singular matrices!
pub fn inv(m: &Matrix<f64>) -> Matrix<f64> {
    match m.clone().inverse() {
        Ok(inverse) => inverse,
        Err(e) => panic!("Constant matrix not invertible: {}", e),
    }
}

lazy_static! {
    /// Linear sRGB (Rec. 709 primaries, D65 white) to CIE XYZ, per IEC 61966-2-1. Each row sums to
    /// the D65 white point, so (1, 1, 1) maps to reference white with Y = 1.
    pub static ref LINEAR_RGB_TO_XYZ: Matrix<f64> = matrix![
        0.4124564, 0.3575761, 0.1804375;
        0.2126729, 0.7151522, 0.0721750;
        0.0193339, 0.1191920, 0.9503041
    ];
    /// CIE XYZ to linear sRGB.
    pub static ref XYZ_TO_LINEAR_RGB: Matrix<f64> = inv(&LINEAR_RGB_TO_XYZ);
}
