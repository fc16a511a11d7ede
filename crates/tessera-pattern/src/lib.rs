//! # tessera-pattern — hash-driven tiling patterns
//!
//! Turns any string into a seamless SVG tile. The string is hashed, and
//! the 40 hex digits of the hash pick one of sixteen generators and drive
//! every size, tone, and opacity it draws with. The same input always
//! produces the same image.
//!
//! # Architecture
//!
//! ```text
//! input string (or Options::hash)
//!     │
//!     ▼
//! digest.rs:     SHA-1 → 40 hex digits, read as nibbles
//!     │
//!     ├──────────────────────────┐
//!     ▼                          ▼
//! palette.rs:  background     generator/:  pick one of sixteen,
//!   hue/saturation shift         read sizes via scale.rs,
//!   of the base color            build shapes via shape.rs
//!     │                          │
//!     └────────────┬─────────────┘
//!                  ▼
//! pattern.rs:    Canvas → SVG text, base64, data URI
//! ```
//!
//! # Example
//!
//! ```
//! use tessera_pattern::{Generator, Options, generate};
//!
//! let options = Options::new().with_generator("hexagons");
//! let pattern = generate(Some("tessera"), &options).unwrap();
//! assert_eq!(pattern.generator(), Generator::Hexagons);
//! assert!(pattern.to_data_uri().starts_with("data:image/svg+xml;base64,"));
//! ```

// Output is compared as text; a fused multiply-add changes the last digit.
#![allow(clippy::suboptimal_flops)]
// Generator parameters are small integers (grid indices, nibbles).
#![allow(clippy::cast_possible_truncation)]
// Generators mirror the geometry they draw: x/y, dx/dy, tx/ty.
#![allow(clippy::similar_names)]
// One match arm per tile cell.
#![allow(clippy::too_many_lines)]

pub mod digest;
pub mod error;
pub mod generator;
pub mod options;
pub mod palette;
pub mod pattern;
pub mod scale;
pub mod shape;

pub use digest::Digest;
pub use error::{Error, Result};
pub use generator::Generator;
pub use options::Options;
pub use pattern::{Pattern, generate};
