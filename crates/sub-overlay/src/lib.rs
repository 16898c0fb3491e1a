//! Player-side subtitle overlay primitives
//!
//! `sub-overlay` holds the data model a player's subtitle pipeline passes
//! between its decoders, rendering bridges, and compositor: RGBA colors and
//! style options as the user configures them, and the growable bitmap list
//! a rendering bridge fills once per video frame.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bitmap;
pub mod color;
pub mod style;

pub use bitmap::{BitmapFormat, BitmapList, SubBitmap};
pub use color::{Color, ParseColorError};
pub use style::{AlignH, AlignV, OsdStyle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
