//! Criterion micro-benchmarks for sight scanning and window resolution.

use casement_bench::reference_profile;
use casement_core::{Axis, Cell};
use casement_sight::{scan, Direction, ObfuscationResolver, VisibilityConfig, WindowGeometry};
use casement_test_utils::MockMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: forward scans from every cell of an open 100x100 map.
fn bench_scan_open_10k(c: &mut Criterion) {
    let map = MockMap::open(100, 100);
    let cells: Vec<Cell> = map.cells().collect();

    c.bench_function("scan_open_10k", |b| {
        b.iter(|| {
            for &cell in &cells {
                let clearance = scan(&map, cell, Axis::X, Direction::Forward, 4);
                black_box(clearance.reach);
            }
        });
    });
}

/// Benchmark: resolve all 64 windows of the reference profile from scratch.
fn bench_resolve_reference(c: &mut Criterion) {
    let profile = reference_profile(42);
    let geometry: Vec<WindowGeometry> = profile
        .windows
        .iter()
        .map(|&p| WindowGeometry::locate(&profile.map, p))
        .collect();
    let mut resolver = ObfuscationResolver::new(VisibilityConfig::default());

    c.bench_function("resolve_reference_64", |b| {
        b.iter(|| {
            for w in &geometry {
                black_box(resolver.resolve(&profile.map, w).len());
            }
        });
    });
}

/// Benchmark: full registry recompute after marking every window dirty.
fn bench_registry_refresh(c: &mut Criterion) {
    let profile = reference_profile(42);
    let mut vis = profile.visibility();

    c.bench_function("registry_refresh_all_64", |b| {
        b.iter(|| {
            vis.registry_mut().mark_all_dirty();
            black_box(vis.registry_mut().refresh(&profile.map));
        });
    });
}

criterion_group!(
    benches,
    bench_scan_open_10k,
    bench_resolve_reference,
    bench_registry_refresh
);
criterion_main!(benches);
