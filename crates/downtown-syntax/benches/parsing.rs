use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use downtown_syntax::{lex, parse};
mod common;

fn bench_lexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("mixed_document", |b| {
        b.iter(|| std::hint::black_box(lex(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    for size in [10, 100, 1000] {
        let content = common::generate_markdown_content(size);
        group.bench_with_input(BenchmarkId::new("mixed_document", size), &content, |b, content| {
            b.iter(|| std::hint::black_box(parse(std::hint::black_box(content))));
        });
    }

    let nested = common::generate_nested_emphasis(500);
    group.bench_function("nested_emphasis", |b| {
        b.iter(|| std::hint::black_box(parse(std::hint::black_box(&nested))));
    });

    let noise = common::generate_unclosed_noise(200);
    group.bench_function("unclosed_noise", |b| {
        b.iter(|| std::hint::black_box(parse(std::hint::black_box(&noise))));
    });

    group.finish();
}

criterion_group!(benches, bench_lexing, bench_parsing);
criterion_main!(benches);
