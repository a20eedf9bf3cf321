//! Benchmark for PersistentOrderedSet vs standard BTreeSet.
//!
//! Compares the persistent set against Rust's standard BTreeSet for the
//! operations the word pipeline relies on.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::BTreeSet;
use wordsort::persistent::PersistentOrderedSet;
use wordsort::pipeline::{accumulate, tokenize};

/// Deterministic pseudo-random words, with plenty of repeats.
fn generate_words(count: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let length = 1 + (state % 6) as usize;
            (0..length)
                .map(|position| char::from(b'a' + ((state >> (position * 5)) % 8) as u8))
                .collect()
        })
        .collect()
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        let words = generate_words(size);

        // PersistentOrderedSet insert
        group.bench_with_input(
            BenchmarkId::new("PersistentOrderedSet", size),
            &words,
            |bencher, words| {
                bencher.iter(|| {
                    let mut set = PersistentOrderedSet::new();
                    for word in words {
                        set = set.insert(black_box(word.clone()));
                    }
                    black_box(set)
                });
            },
        );

        // Standard BTreeSet insert
        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &words, |bencher, words| {
            bencher.iter(|| {
                let mut set = BTreeSet::new();
                for word in words {
                    set.insert(black_box(word.clone()));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [100, 1000, 10000] {
        let words = generate_words(size);
        let persistent_set: PersistentOrderedSet<String> = words.iter().cloned().collect();
        let standard_set: BTreeSet<String> = words.iter().cloned().collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentOrderedSet", size),
            &words,
            |bencher, words| {
                bencher.iter(|| {
                    words
                        .iter()
                        .filter(|word| persistent_set.contains(black_box(word.as_str())))
                        .count()
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &words, |bencher, words| {
            bencher.iter(|| {
                words
                    .iter()
                    .filter(|word| standard_set.contains(black_box(word.as_str())))
                    .count()
            });
        });
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100, 1000, 10000] {
        let words = generate_words(size);
        let persistent_set: PersistentOrderedSet<String> = words.iter().cloned().collect();
        let standard_set: BTreeSet<String> = words.iter().cloned().collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentOrderedSet", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let total: usize = persistent_set.iter().map(String::len).sum();
                    black_box(total)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total: usize = standard_set.iter().map(String::len).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// pipeline Benchmark
// =============================================================================

fn benchmark_tokenize_and_accumulate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tokenize_and_accumulate");

    for size in [1000, 10000] {
        let text = generate_words(size).join(", ");

        group.bench_with_input(BenchmarkId::new("pipeline", size), &text, |bencher, text| {
            bencher.iter(|| black_box(accumulate(tokenize(black_box(text)))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_iteration,
    benchmark_tokenize_and_accumulate
);
criterion_main!(benches);
