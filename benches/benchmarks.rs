use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordlines::{lines_from_str, pages_to_ranges, render, Indexer, ReportOptions};

const VOCABULARY: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "which", "river", "stone",
    "lantern", "harbor", "ember", "willow", "a", "to", "meadow", "copper", "signal",
];
const DELIMITERS: &[&str] = &[" ", ", ", ". ", "; ", " - ", "! ", "? ", "/"];

fn generate_document(lines: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut doc = String::new();
    for _ in 0..lines {
        let words = rng.gen_range(0..15);
        for _ in 0..words {
            doc.push_str(VOCABULARY[rng.gen_range(0..VOCABULARY.len())]);
            doc.push_str(DELIMITERS[rng.gen_range(0..DELIMITERS.len())]);
        }
        doc.push('\n');
    }
    doc
}

fn bench_index(c: &mut Criterion) {
    let doc = generate_document(10_000, 42);
    let lines = lines_from_str(&doc).unwrap();
    let indexer = Indexer::new();

    c.bench_function("index_10k_lines", |b| {
        b.iter(|| indexer.index_lines(black_box(&lines)))
    });

    let index = indexer.index_lines(&lines);
    c.bench_function("render_text_report", |b| {
        b.iter(|| render(black_box(&index), &ReportOptions::default()))
    });
}

fn bench_ranges(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let lines: Vec<u32> = (0..50_000).map(|_| rng.gen_range(1..20_000)).collect();

    c.bench_function("pages_to_ranges_50k", |b| {
        b.iter(|| pages_to_ranges(black_box(&lines)))
    });
}

criterion_group!(benches, bench_index, bench_ranges);
criterion_main!(benches);
