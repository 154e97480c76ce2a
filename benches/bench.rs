use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use range_dict::{Interval, IntervalMap};
use std::hint::black_box;

struct IntervalGenerator {
    rng: StdRng,
}

impl IntervalGenerator {
    fn new() -> Self {
        Self {
            rng: StdRng::from_seed([0; 32]),
        }
    }

    /// Shuffled disjoint intervals and the largest key they cover.
    fn disjoint(&mut self, count: usize) -> (Vec<Interval<u32>>, u32) {
        let mut intervals = Vec::with_capacity(count);
        let mut min = 0;
        for _ in 0..count {
            min += self.rng.gen_range(0..3);
            let max = min + self.rng.gen_range(0..16);
            intervals.push(Interval::new(min, max));
            min = max + 1;
        }
        intervals.shuffle(&mut self.rng);
        (intervals, min)
    }

    fn points(&mut self, count: usize, limit: u32) -> Vec<u32> {
        std::iter::repeat_with(|| self.rng.gen_range(0..=limit))
            .take(count)
            .collect()
    }
}

// insert helper fn
fn interval_map_insert(count: usize, bench: &mut Bencher) {
    let (intervals, _) = IntervalGenerator::new().disjoint(count);
    bench.iter(|| {
        let mut map = IntervalMap::<u32, ()>::with_capacity(count);
        for i in intervals.clone() {
            black_box(map.insert(i, ()));
        }
    });
}

// point lookup helper fn
fn interval_map_get_point(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let (intervals, limit) = gen.disjoint(count);
    let points = gen.points(count, limit);
    let mut map = IntervalMap::new();
    for i in intervals {
        map.insert(i, ());
    }
    bench.iter(|| {
        for p in &points {
            let _ignore = black_box(map.get_point(p));
        }
    });
}

fn bench_interval_map_insert(c: &mut Criterion) {
    c.bench_function("bench_interval_map_insert_100", |b| {
        interval_map_insert(100, b)
    });
    c.bench_function("bench_interval_map_insert_1000", |b| {
        interval_map_insert(1000, b)
    });
    c.bench_function("bench_interval_map_insert_10,000", |b| {
        interval_map_insert(10_000, b)
    });
    c.bench_function("bench_interval_map_insert_100,000", |b| {
        interval_map_insert(100_000, b)
    });
}

fn bench_interval_map_get_point(c: &mut Criterion) {
    c.bench_function("bench_interval_map_get_point_100", |b| {
        interval_map_get_point(100, b)
    });
    c.bench_function("bench_interval_map_get_point_1000", |b| {
        interval_map_get_point(1000, b)
    });
    c.bench_function("bench_interval_map_get_point_10,000", |b| {
        interval_map_get_point(10_000, b)
    });
}

// slice_between helper fn
fn interval_map_slice_between(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let (intervals, limit) = gen.disjoint(count);
    let mut bounds: Vec<_> = gen
        .points(count * 2, limit)
        .chunks(2)
        .map(|c| (Interval::point(c[0].min(c[1])), Interval::point(c[0].max(c[1]))))
        .collect();
    bounds.truncate(100);
    let mut map = IntervalMap::new();
    for i in intervals {
        map.insert(i, ());
    }
    bench.iter(|| {
        for (lo, hi) in &bounds {
            if let Ok(range) = map.slice_between(lo, hi) {
                black_box(range.count());
            }
        }
    });
}

fn bench_interval_map_slice_between(c: &mut Criterion) {
    c.bench_function("bench_interval_map_slice_between_100", |b| {
        interval_map_slice_between(100, b)
    });
    c.bench_function("bench_interval_map_slice_between_1000", |b| {
        interval_map_slice_between(1000, b)
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_interval_map_insert, bench_interval_map_get_point,
}

criterion_group! {
    name = benches_iter;
    config = criterion_config();
    targets = bench_interval_map_slice_between
}

criterion_main!(benches_basic_op, benches_iter);
