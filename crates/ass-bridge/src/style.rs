//! Translating player style options into engine style records

use sub_overlay::{AlignH, AlignV, Color, OsdStyle};

/// Vertical resolution the player's style values are tuned for.
const STYLE_RES_Y: f64 = 720.0;

/// Border rendering mode of an engine style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Outline plus drop shadow.
    #[default]
    Outline,
    /// Opaque background box behind each line.
    OpaqueBox,
}

impl BorderStyle {
    /// Numeric code SSA engines store for this mode.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Outline => 1,
            Self::OpaqueBox => 4,
        }
    }
}

/// Style record as SSA/ASS engines store it.
///
/// Colors are packed with [`engine_color`], sizes are in track pixels, and
/// `alignment` uses the legacy code (1-3 horizontal, +4 top band, +8 middle
/// band).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRecord {
    /// Font family name.
    pub font_name: String,
    /// Font size in track pixels.
    pub font_size: f64,
    /// Fill color.
    pub primary_color: u32,
    /// Collision/karaoke alternate color.
    pub secondary_color: u32,
    /// Outline color.
    pub outline_color: u32,
    /// Shadow color, or the box color under [`BorderStyle::OpaqueBox`].
    pub back_color: u32,
    /// Border rendering mode.
    pub border_style: BorderStyle,
    /// Outline width in track pixels.
    pub outline: f64,
    /// Shadow offset in track pixels.
    pub shadow: f64,
    /// Extra character spacing in track pixels.
    pub spacing: f64,
    /// Left margin in track pixels.
    pub margin_l: i32,
    /// Right margin in track pixels.
    pub margin_r: i32,
    /// Vertical margin in track pixels.
    pub margin_v: i32,
    /// Horizontal glyph scale factor.
    pub scale_x: f64,
    /// Vertical glyph scale factor.
    pub scale_y: f64,
    /// Legacy alignment code.
    pub alignment: i32,
    /// Gaussian blur applied to the outline.
    pub blur: f64,
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
}

impl Default for StyleRecord {
    fn default() -> Self {
        Self {
            font_name: String::new(),
            font_size: 0.0,
            primary_color: 0,
            secondary_color: 0,
            outline_color: 0,
            back_color: 0,
            border_style: BorderStyle::Outline,
            outline: 0.0,
            shadow: 0.0,
            spacing: 0.0,
            margin_l: 0,
            margin_r: 0,
            margin_v: 0,
            scale_x: 1.0,
            scale_y: 1.0,
            alignment: 2,
            blur: 0.0,
            bold: false,
            italic: false,
        }
    }
}

/// Pack a player color into the engine's color word: RGB in the high bytes,
/// inverted alpha in the low byte.
#[must_use]
pub const fn engine_color(c: Color) -> u32 {
    ((c.r as u32) << 24) | ((c.g as u32) << 16) | ((c.b as u32) << 8) | (0xFF - c.a) as u32
}

/// Fill `style` from the player's options for a track rendered at `res_y`
/// lines.
///
/// `res_y` should be the track's play resolution height; it rescales every
/// pixel-denominated option from the 720-line values the player stores.
/// The font name is replaced only when the options name one and it differs
/// from what the record already holds.
pub fn apply_osd_style(style: &mut StyleRecord, res_y: f64, opts: &OsdStyle) {
    if !opts.font.is_empty() && style.font_name != opts.font {
        style.font_name.clone_from(&opts.font);
    }

    let scale = res_y / STYLE_RES_Y;

    style.font_size = opts.font_size * scale;
    style.primary_color = engine_color(opts.color);
    style.secondary_color = style.primary_color;
    style.outline_color = engine_color(opts.border_color);
    if opts.back_color.a != 0 {
        style.back_color = engine_color(opts.back_color);
        style.border_style = BorderStyle::OpaqueBox;
    } else {
        style.back_color = engine_color(opts.shadow_color);
        style.border_style = BorderStyle::Outline;
    }
    style.outline = opts.border_size * scale;
    style.shadow = opts.shadow_offset * scale;
    style.spacing = opts.spacing * scale;
    style.margin_l = (f64::from(opts.margin_x) * scale) as i32;
    style.margin_r = style.margin_l;
    style.margin_v = (f64::from(opts.margin_y) * scale) as i32;
    style.scale_x = 1.0;
    style.scale_y = 1.0;
    style.alignment = legacy_alignment(opts.align_x, opts.align_y);
    style.blur = opts.blur;
    style.bold = opts.bold;
    style.italic = opts.italic;
}

/// Legacy alignment code: 1-3 pick the horizontal position along the
/// bottom, +4 moves the line to the top band, +8 to the middle band.
fn legacy_alignment(x: AlignH, y: AlignV) -> i32 {
    1 + (x.offset() + 1) + ((y.offset() + 2) % 3) * 4
}
