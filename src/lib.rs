//! xygamut turns device-agnostic color descriptions (linear or gamma-encoded RGB, CIE XYZ, CIE
//! LCh) into the CIE xy chromaticity that a color-capable light actually accepts, and pulls any
//! chromaticity that the light can't reproduce back onto the nearest point it can. Everything here
//! is plain arithmetic over `f64`: there is no I/O in the math itself, no shared mutable state, and
//! every function is safe to call from any thread.
//!
//! The pieces fit together like this: a color enters through one of the types in [`colors`] (or as
//! raw XYZ), becomes a [`Chromaticity`](chromaticity::Chromaticity) plus a luminance, and then
//! optionally passes through [`gamut`] to be fitted into the triangle of chromaticities a particular
//! device class supports. Which triangle that is gets decided by a [`GamutRegistry`], not by the
//! math.
//!
//! [`GamutRegistry`]: registry::GamutRegistry

#![doc(html_root_url = "https://docs.rs/xygamut/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare 0.4124564 with 0.412_456_4
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate geo;
#[macro_use]
extern crate rulinalg;
extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate float_cmp;
#[macro_use]
extern crate log;
extern crate regex;
extern crate thiserror;

pub mod bound;
pub mod chromaticity;
pub mod color;
pub mod colors;
mod consts;
pub mod device;
pub mod error;
pub mod gamut;
pub mod prelude;
pub mod registry;
pub mod white_point;

pub use crate::colors::lchcolor::{lch_to_xyz, xyz_to_lch};
pub use crate::colors::rgbcolor::srgb_to_xy;
pub use crate::colors::xyycolor::{rgb_to_xy, xyz_to_xy};
pub use crate::error::{Error, Result};
pub use crate::gamut::{closest_edge_point, fit_in_gamut, in_gamut};
