use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use square_clusters_core::{
    find_clusters, resolve_overlaps, BinaryGrid, ClusterSearchParams, ResolveMode,
};

/// Deterministic pseudo-random grid with roughly 80% ones.
fn lcg_grid(n: usize, seed: u64) -> BinaryGrid {
    let mut state = seed;
    BinaryGrid::from_fn(n, |_, _| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % 10 < 8
    })
    .expect("non-empty grid")
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_clusters");
    for n in [20usize, 60, 120] {
        let grid = lcg_grid(n, 7);
        for max_only in [true, false] {
            let params = ClusterSearchParams {
                min_size: 3,
                max_only,
            };
            let label = if max_only { "max_only" } else { "all" };
            group.bench_with_input(BenchmarkId::new(label, n), &grid, |b, grid| {
                b.iter(|| find_clusters(black_box(grid), &params).expect("search"))
            });
        }
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_overlaps");
    let grid = lcg_grid(60, 11);
    let params = ClusterSearchParams {
        min_size: 2,
        max_only: false,
    };
    let candidates = find_clusters(&grid, &params).expect("search");
    for mode in [ResolveMode::SizePriority, ResolveMode::Containment] {
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| resolve_overlaps(black_box(candidates.clone()), mode))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find, bench_resolve);
criterion_main!(benches);
