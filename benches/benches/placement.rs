// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use overhang_placement::{
    AnchorKind, ContentSpec, FixedAdvance, LABEL_MARGIN, compute, fitting_width,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

fn gen_labels(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("Menu entry number {i} with some padding"))
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    let fits = AnchorKind::Standard(Rect::new(40.0, 40.0, 200.0, 80.0));
    let content = ContentSpec::new(8, 42.0);
    group.bench_function("standard_fits", |b| {
        b.iter(|| {
            compute(
                black_box(fits),
                black_box(VIEWPORT),
                black_box(&content),
                black_box(180.0),
            )
        });
    });

    let near_bottom = AnchorKind::Standard(Rect::new(40.0, 700.0, 200.0, 740.0));
    let long = ContentSpec::new(64, 42.0);
    group.bench_function("standard_overflow", |b| {
        b.iter(|| {
            compute(
                black_box(near_bottom),
                black_box(VIEWPORT),
                black_box(&long),
                black_box(180.0),
            )
        });
    });

    let bar = AnchorKind::BarItem {
        frame: Rect::new(1200.0, 0.0, 1260.0, 40.0),
        trailing: 1260.0,
    };
    group.bench_function("bar_item_tuck", |b| {
        b.iter(|| {
            compute(
                black_box(bar),
                black_box(VIEWPORT),
                black_box(&content),
                black_box(180.0),
            )
        });
    });

    group.finish();
}

fn bench_fitting_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitting_width");
    let metric = FixedAdvance { advance: 7.0 };

    for n in [8_usize, 64, 512] {
        let labels = gen_labels(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("labels_{n}"), |b| {
            b.iter(|| fitting_width(black_box(&labels), &metric, LABEL_MARGIN));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_fitting_width);
criterion_main!(benches);
