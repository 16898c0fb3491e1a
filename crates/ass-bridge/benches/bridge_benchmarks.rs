//! Benchmarks for per-frame accumulation and event pruning
//!
//! Fragment counts cover a single dialogue line (a handful of fragments)
//! up to a busy typeset sign; pruning runs over a thousand-event track at
//! varying seek depths.

use std::sync::Arc;

use ass_bridge::{
    accumulate_frame, prune_expired, BitmapList, FontSetup, Fragment, RenderEngine,
    RenderedFrame, TimedEvent,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

struct ReplayEngine {
    fragments: Vec<Fragment>,
}

impl RenderEngine for ReplayEngine {
    type Track = ();

    fn render_frame(&mut self, _track: &mut (), _pts: f64) -> RenderedFrame<'_> {
        RenderedFrame {
            fragments: &self.fragments,
            changed: true,
        }
    }

    fn configure_fonts(&mut self, _fonts: &FontSetup) {}
}

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

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate_frame");
    for count in [4usize, 32, 128] {
        let fragments = (0..count)
            .map(|i| Fragment {
                w: 16,
                h: 16,
                stride: 16,
                bitmap: Arc::from(vec![0u8; 16 * 16]),
                color: i as u32,
                dst_x: (i as i32) * 16,
                dst_y: 600,
            })
            .collect();
        let mut engine = ReplayEngine { fragments };
        let mut list = BitmapList::new();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                list.clear();
                accumulate_frame(&mut engine, &mut (), 0.0, &mut list);
                list.len()
            });
        });
    }
    group.finish();
}

fn bench_prune(c: &mut Criterion) {
    let mut group = c.benchmark_group("prune_expired");
    for expired in [0usize, 500, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(expired),
            &expired,
            |b, &expired| {
                b.iter_batched(
                    || {
                        (0..1000)
                            .map(|i| Window {
                                start: i64::from(i) * 10,
                                duration: 5,
                            })
                            .collect::<Vec<_>>()
                    },
                    |mut events| {
                        prune_expired(&mut events, expired as i64 * 10);
                        events
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_accumulate, bench_prune);
criterion_main!(benches);
