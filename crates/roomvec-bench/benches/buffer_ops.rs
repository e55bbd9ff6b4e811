//! Criterion micro-benchmarks for exact-size push, pop, resize and assign.
//!
//! `Vec` push is measured alongside for scale: the buffer reallocates on
//! every push, so the gap widens with length.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roomvec_bench::{pushed_profile, room_profile};
use roomvec_buffer::Buffer;
use roomvec_test_utils::fixtures::reference_rooms;

const LENGTHS: [u64; 3] = [16, 256, 4096];

/// Benchmark: grow a buffer one element at a time, against `Vec`.
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for len in LENGTHS {
        group.bench_with_input(BenchmarkId::new("buffer", len), &len, |b, &len| {
            b.iter(|| black_box(pushed_profile(len).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("vec", len), &len, |b, &len| {
            b.iter(|| {
                let mut v = Vec::new();
                for value in 0..len {
                    v.push(black_box(value));
                }
                v
            });
        });
    }
    group.finish();
}

/// Benchmark: drain a buffer from the back, one shrinking reallocation per pop.
fn bench_pop(c: &mut Criterion) {
    c.bench_function("pop_4096", |b| {
        b.iter_batched(
            || pushed_profile(4096).unwrap(),
            |mut buffer| {
                while let Some(value) = buffer.pop().unwrap() {
                    black_box(value);
                }
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark: clobbering resize followed by an arithmetic assign.
fn bench_resize_assign(c: &mut Criterion) {
    let mut buffer: Buffer<u64> = Buffer::new();
    c.bench_function("resize_assign_4096", |b| {
        b.iter(|| {
            buffer.resize(black_box(4096), 0).unwrap();
            buffer.assign(1, 2u64);
            black_box(buffer.last().copied());
        });
    });
}

/// Benchmark: render rooms through the buffer's print path.
fn bench_print_rooms(c: &mut Criterion) {
    let rooms = room_profile(256).unwrap();
    let mut fixed = Buffer::new();
    for room in reference_rooms() {
        fixed.push(room).unwrap();
    }
    let mut out = Vec::with_capacity(64 * 1024);
    c.bench_function("print_rooms_256", |b| {
        b.iter(|| {
            out.clear();
            rooms.print_to(&mut out).unwrap();
            fixed.print_to(&mut out).unwrap();
            black_box(out.len());
        });
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_pop,
    bench_resize_assign,
    bench_print_rooms
);
criterion_main!(benches);
