//! Generation options.
//!
//! Options can be built in code or read from a config file. Keys use
//! kebab-case:
//!
//! ```toml
//! base-color = "#933c3c"   # hue source for the background
//! color = "#ff7f00"        # exact background, skips the hue shift
//! generator = "hexagons"   # one of the sixteen names
//! hash = "5442e2b6..."     # 40 hex digits, replaces the SHA-1 of the input
//! ```
//!
//! Colors are checked when the options are built; the generator name and
//! the hash are checked by [`generate`](crate::generate).

use serde::Deserialize;
use tessera_color::Rgb;

use crate::error::Result;
use crate::palette::DEFAULT_BASE_COLOR;

/// Settings for one [`generate`](crate::generate) call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Options {
    /// Color whose hue and saturation the background is derived from.
    pub base_color: Rgb,
    /// Exact background color; when set, `base_color` is ignored.
    pub color: Option<Rgb>,
    /// Generator name; chosen from the digest when unset.
    pub generator: Option<String>,
    /// Explicit digest to use instead of hashing the input.
    pub hash: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR,
            color: None,
            generator: None,
            hash: None,
        }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base color from `#rgb` / `#rrggbb` text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`](crate::Error::InvalidColor) if `hex`
    /// is not a color.
    pub fn with_base_color(mut self, hex: &str) -> Result<Self> {
        self.base_color = hex.parse()?;
        Ok(self)
    }

    /// Set the exact background color from `#rgb` / `#rrggbb` text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`](crate::Error::InvalidColor) if `hex`
    /// is not a color.
    pub fn with_color(mut self, hex: &str) -> Result<Self> {
        self.color = Some(hex.parse()?);
        Ok(self)
    }

    #[must_use]
    pub fn with_generator(mut self, name: impl Into<String>) -> Self {
        self.generator = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
