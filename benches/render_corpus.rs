//! Benchmarks for parsing and rendering CoNLL corpora.
//!
//! Run with: cargo bench
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dependency2tree::{assemble, parse, Mode, ParseOptions, RenderOptions};

/// Build a corpus of `sentences` right-branching sentences of `length` tokens.
fn generate_corpus(sentences: usize, length: usize) -> String {
    let mut corpus = String::new();
    for _ in 0..sentences {
        for i in 1..=length {
            let head = if i == 1 { 0 } else { i - 1 };
            corpus.push_str(&format!(
                "{i}\tw{i}\tw{i}\tNOUN\tNC\tGender=Masc|Number=Sing\t{head}\tdep\t_\t_\n"
            ));
        }
        corpus.push('\n');
    }
    corpus
}

/// Benchmark parsing alone.
fn bench_parse(c: &mut Criterion) {
    let corpus = generate_corpus(500, 25);

    let mut group = c.benchmark_group("parse_corpus");
    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(parse(&corpus, &ParseOptions::default())));
    });
    group.finish();
}

/// Benchmark both renderers on the same document.
fn bench_render(c: &mut Criterion) {
    let corpus = generate_corpus(500, 25);
    let doc = match parse(&corpus, &ParseOptions::default()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Warning: generated corpus did not parse: {}", e);
            return;
        }
    };
    let options = RenderOptions {
        include_features: true,
    };

    let mut group = c.benchmark_group("render_corpus");
    for mode in [Mode::Graphviz, Mode::Latex] {
        group.bench_with_input(BenchmarkId::new("assemble", mode), &doc, |b, doc| {
            b.iter(|| black_box(assemble(doc, mode, &options, None)));
        });
    }
    group.finish();
}

/// Benchmark by sentence length, where tree depth grows with the length.
fn bench_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_length");
    for length in [10, 50, 200] {
        let corpus = generate_corpus(20, length);
        let Ok(doc) = parse(&corpus, &ParseOptions::default()) else {
            continue;
        };
        group.throughput(Throughput::Elements((20 * length) as u64));
        group.bench_with_input(BenchmarkId::new("graphviz", length), &doc, |b, doc| {
            b.iter(|| black_box(assemble(doc, Mode::Graphviz, &RenderOptions::default(), None)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render, bench_by_length);
criterion_main!(benches);
