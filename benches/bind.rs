use std::ffi::c_void;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use user32_dyn::ffi::cache::SymbolCache;
use user32_dyn::ffi::loader::{Linker, RawSymbol};
use user32_dyn::user32::TABLE;
use user32_dyn::BindResult;

/// In-memory linker so the benchmarks measure cache behavior, not the
/// platform loader.
struct FakeLinker;

impl Linker for FakeLinker {
    fn link(&mut self, names: &[&'static str]) -> BindResult<Vec<RawSymbol>> {
        Ok(names
            .iter()
            .map(|name| RawSymbol::new(name.as_ptr() as *const c_void))
            .collect())
    }
}

fn setup() -> SymbolCache<FakeLinker> {
    SymbolCache::new(&TABLE, FakeLinker)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    // Repeated hit on an already-bound slot, by name.
    group.bench_function("hit_by_name", |b| {
        let mut cache = setup();
        cache.resolve("MessageBoxW").unwrap();
        b.iter(|| black_box(cache.resolve("MessageBoxW").unwrap()));
    });

    // Repeated hit through the indexed path the wrappers use.
    group.bench_function("hit_by_index", |b| {
        let mut cache = setup();
        let idx = TABLE.position("MessageBoxW").unwrap();
        cache.resolve_index(idx).unwrap();
        b.iter(|| black_box(cache.resolve_index(idx).unwrap()));
    });

    // Construction plus one cold bind.
    group.bench_function("cold", |b| {
        b.iter(|| {
            let mut cache = setup();
            black_box(cache.resolve("MessageBoxW").unwrap())
        });
    });

    group.finish();
}

fn bench_preload(c: &mut Criterion) {
    let mut group = c.benchmark_group("preload");

    group.bench_function("all", |b| {
        b.iter(|| {
            let mut cache = setup();
            cache.preload_all().unwrap();
            black_box(cache.bound_count())
        });
    });

    // Preload over an already fully bound cache: pure partition cost.
    group.bench_function("all_idempotent", |b| {
        let mut cache = setup();
        cache.preload_all().unwrap();
        b.iter(|| {
            cache.preload_all().unwrap();
            black_box(cache.bound_count())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_preload);
criterion_main!(benches);
