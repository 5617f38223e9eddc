//! Contact force benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench contact
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench contact -- apply

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rein_contact::ecs::apply_forces;
use rein_contact::{BodyForces, ForceElement};
use rein_contact_bench::setup_ground_scene;

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

fn bench_hunt_crossley(c: &mut Criterion) {
    let mut group = c.benchmark_group("hunt_crossley/calc_force");
    for &n in &[100, 1000, 10000] {
        let scene = setup_ground_scene(n).expect("scene setup");
        let mut sink = BodyForces::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                sink.clear();
                scene
                    .force
                    .calc_force(&scene.contacts, &scene.world, &mut sink)
                    .expect("calc_force");
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Applying forces to the world
// ---------------------------------------------------------------------------

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("hunt_crossley/apply");
    for &n in &[100, 1000, 10000] {
        let mut scene = setup_ground_scene(n).expect("scene setup");
        let mut sink = BodyForces::new();
        scene
            .force
            .calc_force(&scene.contacts, &scene.world, &mut sink)
            .expect("calc_force");
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| apply_forces(&mut scene.world, &sink).expect("apply_forces"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hunt_crossley, bench_apply);
criterion_main!(benches);
