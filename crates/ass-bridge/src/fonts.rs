//! Font discovery for engine setup

use std::path::PathBuf;

use log::{debug, warn};
use sub_overlay::OsdStyle;

use crate::config::BridgeConfig;

/// Font files and directories handed to an engine before the first frame.
///
/// Every piece is optional; engines fall back to their own defaults for
/// whatever is absent.
#[derive(Debug, Clone, Default)]
pub struct FontSetup {
    /// Default font file (`subfont.ttf` in the config directory).
    pub default_font: Option<PathBuf>,
    /// Fontconfig-style configuration file (`fonts.conf`).
    pub config_file: Option<PathBuf>,
    /// Directory of extra font files (`fonts/`).
    pub fonts_dir: Option<PathBuf>,
    /// Family to select when an event names no usable font.
    pub fallback_family: Option<String>,
    /// Whether fonts embedded in subtitle tracks may be extracted and used.
    pub use_embedded: bool,
}

impl FontSetup {
    /// Probe the player configuration for fonts.
    ///
    /// Missing pieces stay `None`; nothing here fails.
    #[must_use]
    pub fn discover(config: &BridgeConfig, style: &OsdStyle) -> Self {
        debug!("setting up fonts");
        let setup = Self {
            default_font: config.config_path("subfont.ttf").filter(|p| p.is_file()),
            config_file: config.config_path("fonts.conf").filter(|p| p.is_file()),
            fonts_dir: config.config_path("fonts").filter(|p| p.is_dir()),
            fallback_family: (!style.font.is_empty()).then(|| style.font.clone()),
            use_embedded: config.use_embedded_fonts,
        };
        debug!("fonts ready: {setup:?}");
        setup
    }

    /// Build a font database for engines that take one directly: the system
    /// fonts plus everything this setup names.
    ///
    /// Unreadable files are logged and skipped, never fatal.
    #[must_use]
    pub fn build_database(&self) -> fontdb::Database {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = &self.fonts_dir {
            db.load_fonts_dir(dir);
        }
        if let Some(font) = &self.default_font {
            if let Err(err) = db.load_font_file(font) {
                warn!("failed to load font {}: {err}", font.display());
            }
        }
        if let Some(family) = &self.fallback_family {
            db.set_sans_serif_family(family.clone());
        }
        db
    }
}
