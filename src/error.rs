//! Error type for the parts of xygamut that touch the outside world: parsing colors and loading gamut
//! tables. The color math itself is total and never fails.

use thiserror::Error;

/// Result type for xygamut operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing colors or configuring gamuts
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A string wasn't a `#RRGGBB` or `#RGB` hex color
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A gamut's three vertices are collinear (or coincide), so it has no inside
    #[error("gamut {name:?} is degenerate: its vertices are collinear")]
    DegenerateGamut {
        /// Name of the offending gamut
        name: String,
    },

    /// A gamut vertex has a NaN or infinite coordinate
    #[error("gamut {name:?} has a non-finite vertex")]
    NonFiniteGamut {
        /// Name of the offending gamut
        name: String,
    },

    /// A model was assigned to a gamut name the registry doesn't know
    #[error("unknown gamut: {0:?}")]
    UnknownGamut(String),

    /// A gamut table couldn't be parsed
    #[error("gamut table error: {0}")]
    Csv(#[from] csv::Error),

    /// A gamut table couldn't be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
