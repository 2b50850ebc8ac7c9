use clumpy::playlist::{entries_from_lines, Entry};
use clumpy::scorer::{self, WordTable};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn setup_entries() -> Vec<Entry> {
    // A playlist with a realistic mix of shared and unique words.
    let artists = ["Nova", "Ember", "Static", "Lumen", "Drift"];
    let suffixes = ["Live", "Remix", "Acoustic", "Demo", ""];

    let mut lines = Vec::new();
    for i in 0..500 {
        let artist = artists[i % artists.len()];
        let suffix = suffixes[i % suffixes.len()];
        lines.push(format!("{} - Track {} {}.mp3", artist, i, suffix));
    }
    entries_from_lines(&lines)
}

fn bench_table_build(c: &mut Criterion) {
    let entries = setup_entries();
    c.bench_function("word_table_build_500", |b| {
        b.iter(|| WordTable::build(black_box(&entries)))
    });
}

fn bench_score(c: &mut Criterion) {
    let entries = setup_entries();
    let table = WordTable::build(&entries);
    c.bench_function("score_500", |b| {
        b.iter(|| scorer::score(black_box(&entries), black_box(&table)).unwrap())
    });
}

criterion_group!(benches, bench_table_build, bench_score);
criterion_main!(benches);
