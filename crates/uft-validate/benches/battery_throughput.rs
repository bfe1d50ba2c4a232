use criterion::{criterion_group, criterion_main, Criterion};
use uft_core::Mode;
use uft_scheme::SchemeVersion;
use uft_validate::{run_battery, BatteryInputs, Policy};

fn bench_battery(c: &mut Criterion) {
    let state = BatteryInputs::derive(SchemeVersion::NextToLeadingLog, Mode::Strict).unwrap();
    let policy = Policy::default();
    c.bench_function("battery_full_run", |b| {
        b.iter(|| run_battery(&state, &policy).unwrap())
    });
}

criterion_group!(benches, bench_battery);
criterion_main!(benches);
