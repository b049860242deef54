//! Criterion benchmarks for synonym expansion and best-match lookup.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use synspace::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use synspace::matching::SynonymMatcher;
use synspace::synonym::{SynonymGroup, SynonymSpace};

/// Build `groups` disjoint groups of `width` terms each.
fn generate_space(groups: usize, width: usize) -> SynonymSpace {
    let vectors = (0..groups)
        .map(|g| SynonymGroup::new((0..width).map(|t| format!("term{g}_{t}"))))
        .collect();
    SynonymSpace::with_vectors(vectors).unwrap()
}

fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion");
    let space = generate_space(1_000, 4);

    for tokens in [1usize, 3, 5] {
        let query: Vec<String> = (0..tokens).map(|g| format!("term{g}_0")).collect();
        group.throughput(Throughput::Elements(4u64.pow(tokens as u32)));
        group.bench_function(format!("expand_{tokens}_tokens"), |b| {
            b.iter(|| black_box(space.expand_query(black_box(&query))))
        });
    }

    group.bench_function("set_vectors_1k", |b| {
        b.iter(|| black_box(generate_space(1_000, 4)))
    });

    group.finish();
}

fn bench_best_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_match");
    let matcher = SynonymMatcher::new(
        generate_space(100, 3),
        Arc::new(WhitespaceTokenizer::new()),
    );
    let choices: Vec<String> = (0..1_000)
        .map(|i| format!("term{}_1term{}_2", i % 100, i % 7))
        .collect();

    group.throughput(Throughput::Elements(choices.len() as u64));
    group.bench_function("two_token_query_1k_choices", |b| {
        b.iter(|| {
            let query = black_box("term3_0 term5_0");
            black_box(matcher.best_match(query, choices.as_slice()).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_expansion, bench_best_match);
criterion_main!(benches);
