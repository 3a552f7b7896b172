//! This module contains the color representations that implement [`Color`], along with the free
//! conversion functions that lights need. For convenience, each type is imported into this
//! module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod lchcolor;
pub mod rgbcolor;
pub mod xyycolor;

// for convenience, use this namespace for the color objects
pub use self::lchcolor::LChColor;
pub use self::rgbcolor::{LinearRGBColor, SRGBColor};
pub use self::xyycolor::XyYColor;
