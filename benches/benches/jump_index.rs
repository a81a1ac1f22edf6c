// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_jump_index::{IndexStyle, JumpIndex, RowMetrics, map_touch, measure, plan_entries};

fn titles(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("S{i}")).collect()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("jump_index/plan");
    let metrics = RowMetrics::new(13.0, 2.0).unwrap();

    // Short strips elide heavily; tall ones pass titles straight through.
    for (len, height) in [(27usize, 120.0), (27, 600.0), (1_000, 600.0), (100_000, 2_000.0)] {
        let titles = titles(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("height_{height}"), len),
            &titles,
            |b, titles| {
                b.iter(|| black_box(plan_entries(titles, black_box(height), &metrics)));
            },
        );
    }

    group.finish();
}

fn bench_map_touch(c: &mut Criterion) {
    let mut group = c.benchmark_group("jump_index/map_touch");
    let metrics = RowMetrics::new(13.0, 2.0).unwrap();
    let ys: Vec<f64> = (0..600).map(f64::from).collect();

    for len in [27usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(ys.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                for &y in &ys {
                    black_box(map_touch(black_box(y), 600.0, &metrics, len));
                }
            });
        });
    }

    group.finish();
}

fn bench_measure_and_scrub(c: &mut Criterion) {
    let mut group = c.benchmark_group("jump_index/control");
    let metrics = RowMetrics::new(13.0, 2.0).unwrap();
    let width_of = |title: &str| 6.5 * title.len() as f64;
    let titles = titles(27);

    group.bench_function("measure", |b| {
        b.iter(|| {
            black_box(measure(
                &titles,
                black_box(480.0),
                &metrics,
                &IndexStyle::default(),
                &width_of,
            ))
        });
    });

    let mut index = JumpIndex::new(metrics);
    index.set_titles(titles.iter().cloned());
    index.set_bounds(Size::new(20.0, 240.0));
    group.bench_function("scrub", |b| {
        b.iter(|| {
            index.touch_down(0.0);
            let mut y = 0.0;
            while y < 240.0 {
                black_box(index.touch_move(y));
                y += 0.5;
            }
            index.touch_up();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_plan, bench_map_touch, bench_measure_and_scrub);
criterion_main!(benches);
