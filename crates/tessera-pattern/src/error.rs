//! Error type for pattern generation.
//!
//! Every failure is detected while resolving options, before anything is
//! drawn. A returned [`Pattern`](crate::Pattern) is always complete.

use thiserror::Error;

/// Errors returned by [`generate`](crate::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested generator name is not one of the sixteen.
    #[error("the generator `{0}` does not exist")]
    UnknownGenerator(String),

    /// A color option was not a valid `#rgb` / `#rrggbb` string.
    #[error(transparent)]
    InvalidColor(#[from] tessera_color::ParseColorError),

    /// An explicit hash was not exactly 40 hexadecimal digits.
    #[error("invalid hash `{0}` (expected 40 hexadecimal digits)")]
    InvalidDigest(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
