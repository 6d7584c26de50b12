use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use flatx::{sort, FixedFlatMap, VecFlatMap};
use rand_core::RngCore;
use twistx::Mt19937_64;

/// Fresh deterministic input for each batch.
fn random_words(rng: &mut Mt19937_64, len: usize) -> Vec<u64> {
    (0..len).map(|_| rng.next_u64()).collect()
}

fn sort_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in [64usize, 1024, 16_384] {
        let mut rng = Mt19937_64::new(0xbe7c);
        group.bench_function(format!("heapsort/{len}"), |b| {
            b.iter_batched_ref(
                || random_words(&mut rng, len),
                |data| sort::heapsort(data, |a, b| a < b),
                BatchSize::SmallInput,
            )
        });
        let mut rng = Mt19937_64::new(0xbe7c);
        group.bench_function(format!("std_unstable/{len}"), |b| {
            b.iter_batched_ref(
                || random_words(&mut rng, len),
                |data| data.sort_unstable(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn map_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    let mut rng = Mt19937_64::new(1);
    let mut map: VecFlatMap<u64, u64> = VecFlatMap::new();
    let mut tree = std::collections::BTreeMap::new();
    let mut keys = Vec::new();
    while map.len() < 1024 {
        let key = rng.next_u64();
        if map.insert(key, key ^ 1).is_ok() {
            tree.insert(key, key ^ 1);
            keys.push(key);
        }
    }

    let mut cursor = 0usize;
    group.bench_function("flat_lookup/1024", |b| {
        b.iter(|| {
            cursor = (cursor + 701) % keys.len();
            map.get(&keys[cursor])
        })
    });
    let mut cursor = 0usize;
    group.bench_function("btree_lookup/1024", |b| {
        b.iter(|| {
            cursor = (cursor + 701) % keys.len();
            tree.get(&keys[cursor])
        })
    });

    let mut rng = Mt19937_64::new(2);
    group.bench_function("fixed_table_build/64", |b| {
        b.iter_batched(
            || {
                let mut entries = [(0u64, 0u64); 64];
                for (index, entry) in entries.iter_mut().enumerate() {
                    // Distinct keys: mix the counter into the high bits.
                    *entry = (rng.next_u64() << 8 | index as u64, index as u64);
                }
                entries
            },
            |entries| FixedFlatMap::<u64, u64, 64>::from_entries(entries),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, sort_bench, map_bench);
criterion_main!(benches);
