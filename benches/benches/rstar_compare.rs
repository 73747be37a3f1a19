// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use sight::RadialView;

use rstar::RTree;
use rstar::primitives::GeomWithData;

const WORLD: f64 = 2000.0;
const RADIUS: f64 = 12.0;

fn gen_grid_points(n: usize, spacing: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * spacing, y as f64 * spacing));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<GeomWithData<[f64; 2], usize>> {
    v.iter()
        .enumerate()
        .map(|(i, p)| GeomWithData::new([p.x, p.y], i))
        .collect()
}

fn query_points(n: usize) -> Vec<Point> {
    // Offsets keep queries between grid points so some fall outside the radius.
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point::new(t * WORLD + 3.7, (1.0 - t) * WORLD + 9.1)
        })
        .collect()
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, WORLD / n as f64);
        let queries = query_points(256);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("sight_build_query_n{}", n), |b| {
            b.iter_batched(
                || RadialView::new(Point::ZERO, Point::new(WORLD, WORLD), RADIUS).unwrap(),
                |mut region| {
                    region.adds(points.iter().copied().enumerate());
                    let hits = queries
                        .iter()
                        .filter(|q| region.closest_value(**q).is_some())
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |items| {
                    let tree = RTree::bulk_load(items);
                    let hits = queries
                        .iter()
                        .filter(|q| {
                            tree.nearest_neighbor(&[q.x, q.y]).is_some_and(|hit| {
                                let [x, y] = *hit.geom();
                                (x - q.x).hypot(y - q.y) <= RADIUS
                            })
                        })
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
