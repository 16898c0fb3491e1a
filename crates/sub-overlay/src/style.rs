//! Player subtitle style options

use crate::color::Color;

/// Horizontal subtitle alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AlignH {
    /// Flush against the left margin.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush against the right margin.
    Right,
}

impl AlignH {
    /// Signed offset used by alignment arithmetic: -1, 0, or 1.
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Center => 0,
            Self::Right => 1,
        }
    }
}

/// Vertical subtitle alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AlignV {
    /// Along the top margin.
    Top,
    /// Vertically centered.
    Center,
    /// Along the bottom margin.
    #[default]
    Bottom,
}

impl AlignV {
    /// Signed offset used by alignment arithmetic: -1, 0, or 1.
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Self::Top => -1,
            Self::Center => 0,
            Self::Bottom => 1,
        }
    }
}

/// Subtitle style options as the player exposes them to the user.
///
/// Pixel-denominated values are tuned for a 720-line display; rendering
/// bridges rescale them to the actual track resolution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OsdStyle {
    /// Font family.
    pub font: String,
    /// Font size in scaled pixels.
    pub font_size: f64,
    /// Primary text color.
    pub color: Color,
    /// Outline color.
    pub border_color: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Background box color; fully transparent disables the box.
    pub back_color: Color,
    /// Outline width.
    pub border_size: f64,
    /// Shadow offset.
    pub shadow_offset: f64,
    /// Extra spacing between characters.
    pub spacing: f64,
    /// Horizontal screen margin in pixels.
    pub margin_x: i32,
    /// Vertical screen margin in pixels.
    pub margin_y: i32,
    /// Horizontal alignment.
    pub align_x: AlignH,
    /// Vertical alignment.
    pub align_y: AlignV,
    /// Gaussian blur applied to the outline.
    pub blur: f64,
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
}

impl Default for OsdStyle {
    fn default() -> Self {
        Self {
            font: "sans-serif".to_owned(),
            font_size: 55.0,
            color: Color::rgb(255, 255, 255),
            border_color: Color::rgb(0, 0, 0),
            shadow_color: Color::rgba(240, 240, 240, 128),
            back_color: Color::TRANSPARENT,
            border_size: 3.0,
            shadow_offset: 0.0,
            spacing: 0.0,
            margin_x: 25,
            margin_y: 22,
            align_x: AlignH::Center,
            align_y: AlignV::Bottom,
            blur: 0.0,
            bold: false,
            italic: false,
        }
    }
}
