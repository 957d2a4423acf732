use criterion::{black_box, criterion_group, criterion_main, Criterion};

use psp_distribution::{allocate, Confirmations, DistributionEngine, ServiceEvent};
use psp_registry::WalletDefinition;
use psp_types::{PspAmount, UsdAmount};

fn bench_distribute_for_service(c: &mut Criterion) {
    let engine = DistributionEngine::shipped().unwrap();
    let event = ServiceEvent::new(1001, 2002)
        .with_property(3003)
        .with_certificate(4004)
        .with_service_value(UsdAmount::from_dollars(150));

    c.bench_function("distribute_for_service", |b| {
        b.iter(|| {
            black_box(
                engine
                    .distribute_for_service(black_box(&event), Confirmations::all())
                    .unwrap(),
            )
        });
    });
}

fn bench_allocate(c: &mut Criterion) {
    let table = WalletDefinition::shipped_table();
    let total = PspAmount::new(7_500);

    c.bench_function("allocate_shipped_table", |b| {
        b.iter(|| black_box(allocate(black_box(&table), black_box(total)).unwrap()));
    });
}

fn bench_classic_distribution(c: &mut Criterion) {
    let engine = DistributionEngine::shipped().unwrap();
    c.bench_function("classic_distribution", |b| {
        b.iter(|| black_box(engine.classic_distribution().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_distribute_for_service,
    bench_allocate,
    bench_classic_distribution
);
criterion_main!(benches);
