// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_overlays::headless::Harness;
use iced_overlays::ToastConfig;
use std::hint::black_box;

fn stacked_harness(count: usize) -> Harness {
    let harness = Harness::default();
    for n in 0..count {
        let _ = harness
            .overlays
            .create(ToastConfig::error(format!("toast {n}")));
    }
    harness.toasts.relayout();
    harness
}

fn stacking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacking");

    for count in [4_usize, 32, 256] {
        let harness = stacked_harness(count);
        let ids = harness.overlays.toast_ids();

        group.bench_with_input(
            BenchmarkId::new("last_bottom_offset", count),
            &ids,
            |b, ids| {
                b.iter(|| {
                    for id in ids {
                        black_box(harness.overlays.last_bottom_offset(*id));
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("relayout", count), &harness, |b, harness| {
            b.iter(|| harness.toasts.relayout());
        });
    }

    group.bench_function("create_and_close_all", |b| {
        b.iter(|| {
            let harness = stacked_harness(black_box(16));
            harness.overlays.close_all();
            harness.toasts.finish_transitions();
        });
    });

    group.finish();
}

criterion_group!(benches, stacking_benchmark);
criterion_main!(benches);
