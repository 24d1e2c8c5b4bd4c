use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use neuraxis_cmark_engine::{ParseOptions, parse, parse_with_options, parsing};
use pulldown_cmark::Parser;
mod common;

fn bench_full_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("neuraxis_cmark", |b| {
        b.iter(|| std::hint::black_box(parse(std::hint::black_box(&content))));
    });
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    let parallel = ParseOptions {
        parallel_inlines: true,
        ..ParseOptions::default()
    };
    group.bench_function("neuraxis_cmark_parallel_inlines", |b| {
        b.iter(|| std::hint::black_box(parse_with_options(&content, &parallel)));
    });

    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("phases");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("blocks", |b| {
        b.iter(|| std::hint::black_box(parsing::parse_blocks(&content)));
    });
    let blocks = parsing::parse_blocks(&content);
    group.bench_function("inlines", |b| {
        b.iter(|| {
            let mut doc = blocks.clone();
            parsing::parse_inlines(&mut doc, &ParseOptions::default());
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    group.sample_size(10);

    for depth in [2, 8, 32] {
        let content = common::generate_nested_lists(50, depth);
        group.bench_with_input(BenchmarkId::new("nested_lists", depth), &content, |b, s| {
            b.iter(|| std::hint::black_box(parse(s)));
        });
    }

    let refs = common::generate_reference_heavy(500);
    group.bench_function("references", |b| {
        b.iter(|| std::hint::black_box(parse(&refs)));
    });

    let runs = common::generate_emphasis_runs(2000);
    group.bench_function("emphasis_runs", |b| {
        b.iter(|| std::hint::black_box(parse(&runs)));
    });

    group.finish();
}

criterion_group!(benches, bench_full_parse, bench_phases, bench_shapes);
criterion_main!(benches);
