//! Bridge between a media player's subtitle pipeline and an SSA/ASS
//! rendering engine
//!
//! The engine behind [`RenderEngine`] owns parsing and rasterization; this
//! crate covers everything between it and the player: translating the
//! player's style options into engine style records, discovering fonts,
//! forwarding engine diagnostics into the player log, collecting rendered
//! fragments into the player's [`BitmapList`] once per frame, and retiring
//! subtitle events that can no longer be shown.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod errors;
pub mod events;
pub mod fonts;
pub mod frame;
pub mod logging;
pub mod style;

pub use config::BridgeConfig;
pub use engine::{Fragment, RenderEngine, RenderedFrame, TimedEvent};
pub use errors::ConfigError;
pub use events::prune_expired;
pub use fonts::FontSetup;
pub use frame::accumulate_frame;
pub use logging::{engine_log_level, forward_engine_message};
pub use style::{apply_osd_style, engine_color, BorderStyle, StyleRecord};

/// Re-export of the player-side overlay types this bridge works with.
pub use sub_overlay::{AlignH, AlignV, BitmapFormat, BitmapList, Color, OsdStyle, SubBitmap};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
