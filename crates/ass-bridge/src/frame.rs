//! Per-frame fragment collection into the player's bitmap list

use std::sync::Arc;

use sub_overlay::{BitmapFormat, BitmapList, SubBitmap};

use crate::engine::RenderEngine;

/// Render one frame and append the engine's output to `list`.
///
/// Appends are cumulative: parts from earlier calls stay in place, so a
/// caller collecting exactly one frame clears the list first. Zero-area
/// fragments contribute nothing and consume no slot. The engine's change
/// flag bumps the list's change counter by exactly one.
///
/// `list` must be unclaimed or already claimed for [`BitmapFormat::Mono`];
/// anything else is a caller bug caught by a debug assertion.
pub fn accumulate_frame<E: RenderEngine>(
    engine: &mut E,
    track: &mut E::Track,
    pts: f64,
    list: &mut BitmapList,
) {
    let frame = engine.render_frame(track, pts);
    if frame.changed {
        list.bump_change_id();
    }
    list.set_format(BitmapFormat::Mono);

    for frag in frame.fragments {
        if frag.w == 0 || frag.h == 0 {
            continue;
        }
        list.push(SubBitmap {
            bitmap: Arc::clone(&frag.bitmap),
            stride: frag.stride,
            x: frag.dst_x,
            y: frag.dst_y,
            w: frag.w,
            h: frag.h,
            dw: frag.w,
            dh: frag.h,
            color: frag.color,
        });
    }
}
