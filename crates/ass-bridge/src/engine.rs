//! Capability surface an SSA/ASS engine exposes to the bridge

use std::sync::Arc;

use crate::fonts::FontSetup;

/// One alpha bitmap produced by the engine for a single frame.
///
/// The pixel buffer belongs to the engine; holders alias it by reference
/// count instead of copying pixels. `color` uses the packed encoding of
/// [`engine_color`](crate::style::engine_color).
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Width in pixels; zero-area fragments carry no content.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
    /// Bytes per bitmap row.
    pub stride: usize,
    /// 8-bit alpha pixels, `h` rows of `stride` bytes.
    pub bitmap: Arc<[u8]>,
    /// Packed fill color for the whole fragment.
    pub color: u32,
    /// Horizontal placement on the video frame.
    pub dst_x: i32,
    /// Vertical placement on the video frame.
    pub dst_y: i32,
}

/// Fragments rendered for one timestamp.
///
/// Borrowing the engine keeps the slice valid exactly until the next
/// [`RenderEngine::render_frame`] call, which reclaims it.
#[derive(Debug)]
pub struct RenderedFrame<'a> {
    /// Fragments in engine paint order; empty when nothing is on screen.
    pub fragments: &'a [Fragment],
    /// Whether the output differs from the previous `render_frame` call.
    pub changed: bool,
}

/// Frame-rendering capability of a subtitle engine.
pub trait RenderEngine {
    /// Engine-owned subtitle track.
    type Track;

    /// Render `track` at presentation time `pts`, in seconds.
    ///
    /// Infallible from the bridge's point of view: an engine with nothing
    /// to draw returns an empty fragment slice.
    fn render_frame(&mut self, track: &mut Self::Track, pts: f64) -> RenderedFrame<'_>;

    /// Hand the discovered font set to the engine.
    fn configure_fonts(&mut self, fonts: &FontSetup);
}

/// Timing window of a subtitle event, in the engine's fixed time unit
/// (milliseconds for SSA engines).
pub trait TimedEvent {
    /// Presentation start time.
    fn start(&self) -> i64;

    /// Time the event stays on screen after `start`.
    fn duration(&self) -> i64;

    /// First timestamp at which the event is no longer shown.
    fn end(&self) -> i64 {
        self.start() + self.duration()
    }
}
