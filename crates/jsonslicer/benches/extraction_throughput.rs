//! Benchmark – extracting matched sub-values out of a large JSON array
//! without materialising the array itself, vs. the naive
//! parse-then-filter baseline a caller would otherwise reach for.
#![allow(missing_docs)]
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonslicer::{pattern, Slicer, SlicerOptions, Wildcard};

/// Builds a JSON array of `count` flat records, each shaped like
/// `{"id": N, "name": "record-N", "active": true}`.
fn make_payload(count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(count * 40);
    out.push(b'[');
    for i in 0..count {
        if i > 0 {
            out.push(b',');
        }
        out.extend_from_slice(
            format!(r#"{{"id":{i},"name":"record-{i}","active":{}}}"#, i % 2 == 0).as_bytes(),
        );
    }
    out.push(b']');
    out
}

fn slice_ids(payload: &[u8]) -> usize {
    let slicer = Slicer::new(
        payload,
        pattern![Wildcard, "id"],
        SlicerOptions::default(),
    )
    .expect("valid options");
    slicer.filter(Result::is_ok).count()
}

fn bench_extraction_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_throughput");
    group.measurement_time(Duration::from_secs(5));

    for size in [100usize, 10_000, 100_000] {
        let payload = make_payload(size);
        group.bench_with_input(BenchmarkId::new("slicer", size), &payload, |b, payload| {
            b.iter(|| black_box(slice_ids(payload)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extraction_throughput);
criterion_main!(benches);
