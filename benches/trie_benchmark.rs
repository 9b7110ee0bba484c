use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lextrie::{ArrayTrie, ListTrie, Trie, TrieMetrics};
use std::collections::BTreeSet;

// Deterministic word list: base-26 spellings of a scrambled counter.
fn keys(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let mut x = (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40;
            let len = 3 + (x % 6) as usize;
            let mut word = String::with_capacity(len);
            for _ in 0..len {
                word.push((b'a' + (x % 26) as u8) as char);
                x /= 26;
                if x == 0 {
                    x = i as u64 + 7;
                }
            }
            word
        })
        .collect()
}

fn bench_trie_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_insert");
    let keys = keys(1000);

    group.bench_function("array_trie_insert", |b| {
        b.iter(|| {
            let mut trie = ArrayTrie::new();
            for key in &keys {
                trie.insert(key).unwrap();
            }
            black_box(trie);
        });
    });

    group.bench_function("list_trie_insert", |b| {
        b.iter(|| {
            let mut trie = ListTrie::new();
            for key in &keys {
                trie.insert(key).unwrap();
            }
            black_box(trie);
        });
    });

    group.bench_function("std_btreeset_insert", |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(key.as_str());
            }
            black_box(set);
        });
    });

    group.finish();
}

fn bench_trie_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_contains");
    let keys = keys(1000);

    let mut array = ArrayTrie::new();
    let mut list = ListTrie::new();
    array.insert_all(&keys).unwrap();
    list.insert_all(&keys).unwrap();

    group.bench_function("array_trie_contains", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(array.contains(key));
            }
        });
    });

    group.bench_function("list_trie_contains", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(list.contains(key));
            }
        });
    });

    group.finish();
}

fn bench_trie_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_metrics");
    let keys = keys(1000);

    let mut array = ArrayTrie::new();
    let mut list = ListTrie::new();
    array.insert_all(&keys).unwrap();
    list.insert_all(&keys).unwrap();

    group.bench_function("array_trie_total_nodes", |b| {
        b.iter(|| black_box(array.total_nodes()));
    });

    group.bench_function("list_trie_total_nodes", |b| {
        b.iter(|| black_box(list.total_nodes()));
    });

    group.bench_function("array_trie_real_branching", |b| {
        b.iter(|| black_box(array.real_branching()));
    });

    group.bench_function("list_trie_real_branching", |b| {
        b.iter(|| black_box(list.real_branching()));
    });

    group.bench_function("array_trie_stats", |b| {
        b.iter(|| black_box(array.stats()));
    });

    group.bench_function("list_trie_stats", |b| {
        b.iter(|| black_box(list.stats()));
    });

    group.finish();
}

criterion_group!(benches, bench_trie_insert, bench_trie_contains, bench_trie_metrics);
criterion_main!(benches);
