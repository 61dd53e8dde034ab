//! Criterion benchmarks for the Concord indexer.
//!
//! Covers the two hot paths:
//! - Boyer-Moore document search
//! - Index construction from a document and vocabulary

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use concord::index::builder::{IndexBuilder, IndexConfig};
use concord::index::CollisionPolicy;
use concord::matcher::{BoyerMoore, MatchOptions};

/// Generate a document by cycling a fixed word list.
fn generate_document(word_count: usize) -> String {
    let words = [
        "search", "index", "keyword", "document", "offset", "table", "bucket", "probe",
        "tombstone", "pattern", "matcher", "shift", "boundary", "vocabulary", "entry",
        "location", "concordance", "text", "word", "scan",
    ];

    let mut text = String::new();
    for i in 0..word_count {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(words[i % words.len()]);
    }
    text
}

fn bench_matcher(c: &mut Criterion) {
    let text = generate_document(5_000);

    let mut group = c.benchmark_group("matcher");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("find_all_exact", |b| {
        let matcher = BoyerMoore::new("concordance");
        b.iter(|| black_box(matcher.find_all(black_box(&text))));
    });

    group.bench_function("find_all_word_search", |b| {
        let matcher = BoyerMoore::with_options("concordance", MatchOptions::word_search());
        b.iter(|| black_box(matcher.find_all(black_box(&text))));
    });

    group.finish();
}

fn bench_builder(c: &mut Criterion) {
    let text = generate_document(5_000);
    let vocabulary: Vec<String> = ["search", "tombstone", "concordance", "scan", "offset"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let mut group = c.benchmark_group("builder");

    group.bench_function("build_chaining", |b| {
        let builder = IndexBuilder::new(IndexConfig::default());
        b.iter(|| black_box(builder.build(black_box(&text), black_box(&vocabulary)).unwrap()));
    });

    group.bench_function("build_probing", |b| {
        let builder = IndexBuilder::new(IndexConfig {
            policy: CollisionPolicy::LinearProbe,
            matcher_equality: false,
        });
        b.iter(|| black_box(builder.build(black_box(&text), black_box(&vocabulary)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_matcher, bench_builder);
criterion_main!(benches);
