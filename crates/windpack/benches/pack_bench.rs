//! Benchmarks for greedy turbine packing.
//!
//! Measures full packing runs at several region scales plus the disk
//! buffering primitive on its own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo::{LineString, Point, Polygon};
use windpack::{geom, Packer, PackingConfig};

fn square(side: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![(0.0, 0.0), (side, 0.0), (side, side), (0.0, side)]),
        vec![],
    )
}

fn bench_pack_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_square");
    group.sample_size(10);

    for &side in &[50.0, 100.0, 200.0] {
        group.bench_with_input(BenchmarkId::new("side", side as u64), &side, |b, &side| {
            b.iter(|| {
                let mut packer =
                    Packer::new(PackingConfig::new(10.0), black_box(square(side))).unwrap();
                let summary = packer.pack().unwrap();
                black_box(summary)
            })
        });
    }
    group.finish();
}

fn bench_buffer_disk(c: &mut Criterion) {
    c.bench_function("buffer_disk_64", |b| {
        b.iter(|| {
            geom::buffer_disk(
                black_box(Point::new(3.0, 4.0)),
                black_box(10.0),
                black_box(64),
            )
        })
    });
}

criterion_group!(benches, bench_pack_square, bench_buffer_disk);
criterion_main!(benches);
