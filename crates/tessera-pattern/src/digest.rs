//! The hexadecimal digest every pattern parameter is read from.
//!
//! A digest is 40 lowercase hex digits: the SHA-1 of the input string, or
//! an explicit override supplied by the caller. Generators never see the
//! input itself; they read single nibbles or short runs of digits at fixed
//! offsets and remap them into sizes, opacities, and colors.
//!
//! ```text
//! 5442e2b64fa09764b9f593867e59a97292c84059
//! │              └┬┘│  │
//! nibble(0)       │ │  └ hex_value(20, 1)  generator choice
//!                 │ └─── hex_value(17, 1)  saturation offset
//!                 └───── hex_value(14, 3)  hue offset
//! ```

use std::fmt;

use sha1::{Digest as _, Sha1};

use crate::error::{Error, Result};
use crate::scale::remap;

/// Number of hex digits in a digest.
pub const DIGEST_LEN: usize = 40;

/// A validated 40-digit lowercase hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// SHA-1 of `input`, hex encoded.
    #[must_use]
    pub fn of(input: &str) -> Self {
        Self(hex::encode(Sha1::digest(input.as_bytes())))
    }

    /// Accept an explicit digest: exactly 40 hex digits in either case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigest`] for any other length or a non-hex
    /// character.
    pub fn parse(s: &str) -> Result<Self> {
        match hex::decode(s) {
            Ok(bytes) if bytes.len() * 2 == DIGEST_LEN => Ok(Self(hex::encode(bytes))),
            _ => Err(Error::InvalidDigest(s.to_owned())),
        }
    }

    /// The digest text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `len` digits starting at `index` as one base-16 integer.
    ///
    /// Digits past the end of the digest read as nothing, so an
    /// out-of-range window yields the value of its in-range prefix.
    #[must_use]
    pub fn hex_value(&self, index: usize, len: usize) -> u32 {
        self.0
            .bytes()
            .skip(index)
            .take(len)
            .fold(0, |acc, c| acc << 4 | u32::from(hex_digit(c)))
    }

    /// The single digit at `index`, 0–15.
    #[inline]
    #[must_use]
    pub fn nibble(&self, index: usize) -> u32 {
        self.hex_value(index, 1)
    }

    /// The digit at `index` remapped from 0–15 onto `min..=max`.
    #[inline]
    #[must_use]
    pub fn scaled(&self, index: usize, min: f64, max: f64) -> f64 {
        remap(f64::from(self.nibble(index)), 0.0, 15.0, min, max)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value of one lowercase hex digit. The digest is validated on
/// construction, so anything else cannot occur.
#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => 0,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
