use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use front_coding::{compress, decompress};

/// Generate a sorted word list with long shared prefixes
fn generate_sorted_words(lines: usize) -> String {
    let stems = ["inter", "international", "internet", "interval", "over", "overflow"];
    let mut words: Vec<String> = (0..lines)
        .map(|i| format!("{}{:05}", stems[i % stems.len()], i))
        .collect();
    words.sort();
    words.join("\n")
}

/// Generate lines with almost nothing in common
fn generate_low_similarity(lines: usize) -> String {
    let chars: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
    let mut seed = 12345u64;
    let mut result = Vec::with_capacity(lines);

    for _ in 0..lines {
        let mut line = String::new();
        for _ in 0..8 {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            line.push(chars[(seed >> 16) as usize % chars.len()]);
        }
        result.push(line);
    }
    result.join("\n")
}

fn bench_compress(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("compress");

    for size in sizes.iter() {
        let sorted = generate_sorted_words(*size);
        let random = generate_low_similarity(*size);

        group.bench_with_input(BenchmarkId::new("sorted_words", size), &sorted, |b, data| {
            b.iter(|| black_box(compress(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("low_similarity", size), &random, |b, data| {
            b.iter(|| black_box(compress(black_box(data))));
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("decompress");

    for size in sizes.iter() {
        // Prepare compressed input
        let sorted = compress(&generate_sorted_words(*size));
        let random = compress(&generate_low_similarity(*size));

        group.bench_with_input(BenchmarkId::new("sorted_words", size), &sorted, |b, data| {
            b.iter(|| black_box(decompress(black_box(data)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("low_similarity", size), &random, |b, data| {
            b.iter(|| black_box(decompress(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
