// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qtrig_core::{Approx, Wave, DEFAULT_RIGHT};
use std::{f64::consts::FRAC_PI_2, hint::black_box, time::Duration};

const SAMPLES: i32 = 1024;

fn angles() -> Vec<i32> {
    let full = 4 * DEFAULT_RIGHT;
    (0..SAMPLES).map(|i| i * (full / SAMPLES)).collect()
}

fn bench_orders(c: &mut Criterion) {
    let xs = angles();
    let mut group = c.benchmark_group("approx_full_turn");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(xs.len() as u64));
    for approx in Approx::ALL {
        for wave in Wave::ALL {
            let id = BenchmarkId::new(wave.to_string(), approx);
            group.bench_with_input(id, &xs, |b, xs| {
                b.iter(|| {
                    let mut acc = 0i64;
                    for &x in xs {
                        acc += i64::from(approx.eval(wave, black_box(x), DEFAULT_RIGHT));
                    }
                    black_box(acc)
                });
            });
        }
    }
    group.finish();
}

fn bench_libm_baseline(c: &mut Criterion) {
    let xs = angles();
    let scale = FRAC_PI_2 / f64::from(DEFAULT_RIGHT);
    let mut group = c.benchmark_group("libm_full_turn");
    group.throughput(Throughput::Elements(xs.len() as u64));
    group.bench_function("sin", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += libm::sin(f64::from(black_box(x)) * scale);
            }
            black_box(acc)
        });
    });
    group.bench_function("cos", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += libm::cos(f64::from(black_box(x)) * scale);
            }
            black_box(acc)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_orders, bench_libm_baseline);
criterion_main!(benches);
