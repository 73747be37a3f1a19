// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use sight::{BoundedView, RadialView};
use sight_index::SpatialIndex;

const WORLD: f64 = 2000.0;

fn gen_grid_points(n: usize, spacing: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * spacing, y as f64 * spacing));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn world() -> Rect {
    Rect::new(0.0, 0.0, WORLD, WORLD)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[32usize, 64, 128] {
        let points = gen_grid_points(n, WORLD / n as f64);
        group.throughput(Throughput::Elements((n * n) as u64));
        for &cell in &[1.0, 16.0] {
            group.bench_function(format!("grid_n{}_cell{}", n, cell), |b| {
                b.iter_batched(
                    || SpatialIndex::new(world(), cell).unwrap(),
                    |mut idx| {
                        for (i, p) in points.iter().copied().enumerate() {
                            idx.add(i, p);
                        }
                        black_box(idx.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    let points = gen_clustered_points(16, 1024, 40.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered", |b| {
        b.iter_batched(
            || SpatialIndex::new(world(), 1.0).unwrap(),
            |mut idx| {
                for (i, p) in points.iter().copied().enumerate() {
                    idx.add(i, p);
                }
                black_box(idx.depth());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");
    let points = gen_random_points(20_000);
    let mut idx = SpatialIndex::new(world(), 4.0).unwrap();
    for (i, p) in points.iter().copied().enumerate() {
        idx.add(i, p);
    }
    for &side in &[10.0, 100.0, 400.0] {
        group.bench_function(format!("window_{}", side), |b| {
            let mut rng = Rng::new(0xBADC_F00D_1234_5678);
            b.iter(|| {
                let x = rng.next_f64() * (WORLD - side);
                let y = rng.next_f64() * (WORLD - side);
                let hits = idx.elements_in(Rect::new(x, y, x + side, y + side)).count();
                black_box(hits);
            })
        });
    }
    group.bench_function("whole_world", |b| {
        b.iter(|| black_box(idx.elements_in(world()).count()))
    });
    group.finish();
}

fn bench_closest_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_value");
    let points = gen_random_points(20_000);

    let mut canvas = BoundedView::new(Point::ZERO, Point::new(WORLD, WORLD), 8.0).unwrap();
    canvas.adds(points.iter().copied().enumerate());
    let mut region = RadialView::new(Point::ZERO, Point::new(WORLD, WORLD), 12.0).unwrap();
    region.adds(points.iter().copied().enumerate());

    group.bench_function("bounded_cell8", |b| {
        let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
        b.iter(|| {
            let q = Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD);
            black_box(canvas.closest_value(q));
        })
    });
    group.bench_function("radial_r12", |b| {
        let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
        b.iter(|| {
            let q = Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD);
            black_box(region.closest_value(q));
        })
    });
    group.bench_function("radial_total_items", |b| {
        b.iter(|| black_box(region.total_items()))
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_range_query, bench_closest_value);
criterion_main!(benches);
