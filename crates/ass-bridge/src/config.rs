//! Player-side configuration for the bridge

use std::path::PathBuf;

use sub_overlay::OsdStyle;

/// Configuration the player hands the bridge at startup.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BridgeConfig {
    /// Player configuration directory probed for fonts.
    pub config_dir: Option<PathBuf>,
    /// Whether fonts embedded in subtitle tracks may be used.
    pub use_embedded_fonts: bool,
    /// Subtitle style options.
    pub style: OsdStyle,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            config_dir: None,
            use_embedded_fonts: true,
            style: OsdStyle::default(),
        }
    }
}

impl BridgeConfig {
    /// Path of `name` under the config directory, if one is set.
    #[must_use]
    pub fn config_path(&self, name: &str) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join(name))
    }

    /// Load a JSON config file.
    #[cfg(feature = "serde")]
    pub fn load(path: &std::path::Path) -> Result<Self, crate::errors::ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
