//! Property-based tests for the bridge
//!
//! Uses proptest to verify the accumulation and pruning invariants across
//! a wide range of fragment lists and event arrays.

use std::sync::Arc;

use ass_bridge::{
    accumulate_frame, prune_expired, BitmapList, FontSetup, Fragment, RenderEngine,
    RenderedFrame, SubBitmap, TimedEvent,
};
use proptest::prelude::*;

struct OneShotEngine {
    fragments: Vec<Fragment>,
}

impl RenderEngine for OneShotEngine {
    type Track = ();

    fn render_frame(&mut self, _track: &mut (), _pts: f64) -> RenderedFrame<'_> {
        RenderedFrame {
            fragments: &self.fragments,
            changed: true,
        }
    }

    fn configure_fonts(&mut self, _fonts: &FontSetup) {}
}

#[derive(Debug)]
struct Window {
    start: i64,
    duration: i64,
}

impl TimedEvent for Window {
    fn start(&self) -> i64 {
        self.start
    }

    fn duration(&self) -> i64 {
        self.duration
    }
}

/// Generate fragments with zero-area pieces mixed in.
fn arb_fragment() -> impl Strategy<Value = Fragment> {
    (0..5i32, 0..5i32, any::<u32>(), -200..200i32, -200..200i32).prop_map(
        |(w, h, color, dst_x, dst_y)| Fragment {
            w,
            h,
            stride: w as usize,
            bitmap: Arc::from(vec![0u8; (w * h) as usize]),
            color,
            dst_x,
            dst_y,
        },
    )
}

/// Generate an event array ordered by start time, as track parsers build it.
fn arb_windows() -> impl Strategy<Value = Vec<Window>> {
    prop::collection::vec((0..2000i64, 0..500i64), 0..32).prop_map(|mut pairs| {
        pairs.sort_unstable_by_key(|&(start, _)| start);
        pairs
            .into_iter()
            .map(|(start, duration)| Window { start, duration })
            .collect()
    })
}

fn part(index: u32) -> SubBitmap {
    SubBitmap {
        bitmap: Arc::from(Vec::new()),
        stride: 0,
        x: 0,
        y: 0,
        w: 1,
        h: 1,
        dw: 1,
        dh: 1,
        color: index,
    }
}

proptest! {
    #[test]
    fn accumulated_parts_are_the_nonzero_fragments_in_order(
        fragments in prop::collection::vec(arb_fragment(), 0..64),
    ) {
        let expected: Vec<u32> = fragments
            .iter()
            .filter(|frag| frag.w != 0 && frag.h != 0)
            .map(|frag| frag.color)
            .collect();

        let mut engine = OneShotEngine { fragments };
        let mut list = BitmapList::new();
        accumulate_frame(&mut engine, &mut (), 0.0, &mut list);

        let colors: Vec<u32> = list.parts().iter().map(|p| p.color).collect();
        prop_assert_eq!(colors, expected);
        prop_assert!(list.len() <= list.capacity());
    }

    #[test]
    fn capacity_always_a_doubling_of_the_floor(count in 0usize..200) {
        let mut list = BitmapList::new();
        for index in 0..count {
            list.push(part(index as u32));
            let capacity = list.capacity();
            prop_assert!(list.len() <= capacity);
            prop_assert!(
                capacity == 0 || (capacity >= 32 && capacity.is_power_of_two()),
                "capacity {} breaks the growth law",
                capacity,
            );
        }
        prop_assert_eq!(list.len(), count);
    }

    #[test]
    fn pruning_removes_exactly_the_expired_prefix(
        windows in arb_windows(),
        watermark in 0..3000i64,
    ) {
        let expected_removed = windows
            .iter()
            .take_while(|w| w.start + w.duration < watermark)
            .count();
        let survivors: Vec<(i64, i64)> = windows[expected_removed..]
            .iter()
            .map(|w| (w.start, w.duration))
            .collect();

        let mut events = windows;
        let removed = prune_expired(&mut events, watermark);

        prop_assert_eq!(removed, expected_removed);
        let kept: Vec<(i64, i64)> = events.iter().map(|w| (w.start, w.duration)).collect();
        prop_assert_eq!(kept, survivors);
        if let Some(head) = events.first() {
            prop_assert!(head.end() >= watermark);
        }
    }

    #[test]
    fn pruning_twice_is_idempotent(windows in arb_windows(), watermark in 0..3000i64) {
        let mut events = windows;
        prune_expired(&mut events, watermark);
        let after_first: Vec<(i64, i64)> =
            events.iter().map(|w| (w.start, w.duration)).collect();

        prop_assert_eq!(prune_expired(&mut events, watermark), 0);
        let after_second: Vec<(i64, i64)> =
            events.iter().map(|w| (w.start, w.duration)).collect();
        prop_assert_eq!(after_second, after_first);
    }
}
