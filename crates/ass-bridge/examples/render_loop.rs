//! Minimal render loop against a stub engine
//!
//! Shows the call order a player uses: discover fonts, configure the
//! engine, then per frame clear + accumulate, pruning the track on seeks.
//!
//! Run with `RUST_LOG=debug cargo run --example render_loop`.

use std::sync::Arc;

use ass_bridge::{
    accumulate_frame, apply_osd_style, prune_expired, BitmapList, BridgeConfig, FontSetup,
    Fragment, RenderEngine, RenderedFrame, StyleRecord, TimedEvent,
};

/// Stand-in for a real SSA engine: one fragment per active event.
struct StubEngine {
    fragments: Vec<Fragment>,
    last_pts: f64,
}

struct StubEvent {
    start: i64,
    duration: i64,
}

impl TimedEvent for StubEvent {
    fn start(&self) -> i64 {
        self.start
    }

    fn duration(&self) -> i64 {
        self.duration
    }
}

impl RenderEngine for StubEngine {
    type Track = Vec<StubEvent>;

    fn render_frame(&mut self, track: &mut Self::Track, pts: f64) -> RenderedFrame<'_> {
        let pts_ms = (pts * 1000.0) as i64;
        self.fragments.clear();
        for (index, event) in track.iter().enumerate() {
            if event.start() <= pts_ms && pts_ms < event.end() {
                self.fragments.push(Fragment {
                    w: 320,
                    h: 48,
                    stride: 320,
                    bitmap: Arc::from(vec![0u8; 320 * 48]),
                    color: 0xFFFF_FF00,
                    dst_x: 480,
                    dst_y: 600 + 52 * index as i32,
                });
            }
        }
        let changed = pts != self.last_pts;
        self.last_pts = pts;
        RenderedFrame {
            fragments: &self.fragments,
            changed,
        }
    }

    fn configure_fonts(&mut self, fonts: &FontSetup) {
        println!(
            "engine fonts: fallback={:?} embedded={}",
            fonts.fallback_family, fonts.use_embedded
        );
    }
}

fn main() {
    env_logger::init();

    let config = BridgeConfig::default();
    let mut engine = StubEngine {
        fragments: Vec::new(),
        last_pts: f64::NAN,
    };
    engine.configure_fonts(&FontSetup::discover(&config, &config.style));

    let mut style = StyleRecord::default();
    apply_osd_style(&mut style, 1080.0, &config.style);
    println!(
        "default style: {} {:.1}px align {}",
        style.font_name, style.font_size, style.alignment
    );

    let mut track = vec![
        StubEvent {
            start: 0,
            duration: 2500,
        },
        StubEvent {
            start: 2000,
            duration: 3000,
        },
    ];

    let mut list = BitmapList::new();
    for frame in 0..5 {
        let pts = frame as f64 * 1.0;
        list.clear();
        accumulate_frame(&mut engine, &mut track, pts, &mut list);
        println!(
            "pts {pts:.2}s: {} part(s), change id {}",
            list.len(),
            list.change_id()
        );
    }

    // A seek past both events retires them.
    let retired = prune_expired(&mut track, 10_000);
    println!("seek: retired {retired} event(s), {} left", track.len());
}
