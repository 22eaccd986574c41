use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wpt_decoder::{Decoder, validate};
use wpt_tests::{golden, synthetic_tarball};

fn bench_decode_fixture(c: &mut Criterion) {
    let blob = golden("paths.txt");

    c.bench_function("decode_fixture", |b| {
        b.iter(|| Decoder::new(&blob).len());
    });
}

fn bench_lookup(c: &mut Criterion) {
    let blob = synthetic_tarball(100, 20);
    let decoder = Decoder::new(&blob);

    let mut group = c.benchmark_group("lookup");
    group.bench_function("first", |b| b.iter(|| decoder.get("Path 1")));
    group.bench_function("last", |b| b.iter(|| decoder.get("Path 100")));
    group.bench_function("miss", |b| b.iter(|| decoder.get("Path 101")));
    group.finish();
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");

    for paths in [10, 100, 1_000] {
        let blob = synthetic_tarball(paths, 50);

        group.throughput(Throughput::Bytes(blob.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", paths), &blob, |b, blob| {
            b.iter(|| Decoder::new(blob).len());
        });
        group.bench_with_input(BenchmarkId::new("validate", paths), &blob, |b, blob| {
            b.iter(|| validate(blob).findings.len());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_fixture,
    bench_lookup,
    bench_decode_throughput
);
criterion_main!(benches);
