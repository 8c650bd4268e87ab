//! Entity finder benchmarks.
//!
//! Measures index build cost and query cost as the ontology grows. Query cost
//! should stay flat across ontology sizes: a query is one stemming pass plus
//! two hash lookups.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `stem` | Stemming a short label |
//! | `build` | `add_ontology_entities` over 1k/10k/50k labelled classes |
//! | `query` | `find_entities` for full, sub-phrase and missing queries |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench finder_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ontofind::{EntityFinder, EntityKind, InMemoryOntology, Stemmer};
use std::hint::black_box;
use std::sync::LazyLock;

const WORDS: &[&str] = &[
    "cell", "membrane", "nuclear", "protein", "binding", "complex", "regulation", "transport",
    "organelle", "signaling", "receptor", "activity", "process", "structure", "developing", "leaf",
];

/// `n` classes with labels of two to five words drawn from [`WORDS`].
fn synthetic_ontology(n: usize) -> InMemoryOntology {
    let mut ont = InMemoryOntology::new("http://example.org/bench.owl");
    for i in 0..n {
        let len = 2 + i % 4;
        let label: Vec<&str> = (0..len).map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()]).collect();
        ont.declare(format!("http://example.org/BENCH_{i:07}"), EntityKind::Class)
            .label(label.join(" "));
    }
    ont
}

fn stem_bench(c: &mut Criterion) {
    let stemmer = Stemmer::english();
    c.bench_function("stem/four_words", |b| {
        b.iter(|| stemmer.stem_phrase(black_box("regulating nuclear membranes transport")))
    });
}

const SIZES: [usize; 3] = [1_000, 10_000, 50_000];

/// One ontology per entry of [`SIZES`], shared by the build and query groups.
static ONTOLOGIES: LazyLock<Vec<InMemoryOntology>> =
    LazyLock::new(|| SIZES.iter().map(|&n| synthetic_ontology(n)).collect());

fn build_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (size, ont) in SIZES.into_iter().zip(ONTOLOGIES.iter()) {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("classes", size), ont, |b, ont| {
            b.iter(|| {
                let mut finder = EntityFinder::new();
                finder.add_ontology_entities(ont);
                black_box(finder.max_term_size())
            })
        });
    }

    group.finish();
}

fn query_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for (size, ont) in SIZES.into_iter().zip(ONTOLOGIES.iter()) {
        if size == 10_000 {
            continue;
        }
        let mut finder = EntityFinder::new();
        finder.add_ontology_entities(ont);

        for (name, query) in [
            ("sub_phrase", "nuclear protein"),
            ("single_word", "membranes"),
            ("missing", "no such term here"),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &query, |b, query| {
                b.iter(|| black_box(finder.find_entities(query).len()))
            });
        }
    }

    group.finish();
}

criterion_group!(finder_benches, stem_bench, build_bench, query_bench);
criterion_main!(finder_benches);
