//! This module simply brings the most common xygamut functionality under a single namespace, to
//! prevent excessive imports. As of now, this prelude includes every trait in xygamut, the
//! [`XYZColor`] everything converts through, [`Chromaticity`], and [`GamutTriangle`], and nothing
//! else. The individual color types in the [`colors`](crate::colors) module are not included.

pub use crate::bound::Bound;
pub use crate::chromaticity::Chromaticity;
pub use crate::color::{Color, XYZColor};
pub use crate::gamut::GamutTriangle;
