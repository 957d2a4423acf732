use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Canonical genesis payloads are a few hundred bytes; cover that range and beyond.
fn sha256_sizes_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");
    for size in [64usize, 761, 4096] {
        let data = vec![0x5Au8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| psp_crypto::sha256(black_box(data)))
        });
    }
    group.finish();
}

fn hash_genesis_bench(c: &mut Criterion) {
    let payload = vec![0x01u8; 761];

    c.bench_function("hash_genesis_761B", |b| {
        b.iter(|| psp_crypto::hash_genesis(black_box(&payload)))
    });
}

criterion_group!(benches, sha256_sizes_bench, hash_genesis_bench);
criterion_main!(benches);
