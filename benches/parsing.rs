//! Benchmarks for chatstats parsing and statistics.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- segmenting`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::core::output::{to_csv, to_json};
use chatstats::parsing::Segmenter;
use chatstats::prelude::*;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let senders = ["Alice", "Bob", "Carol"];
    let bodies = [
        "hello world how are you",
        "<Media omitted>",
        "check https://example.com/page 😂😂",
        "ok 👍",
        "multi line message\nwith a second line",
    ];

    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let day = i % 28 + 1;
        let month = (i / 28) % 12 + 1;
        let hour = i % 24;
        let minute = i % 60;
        if i % 50 == 0 {
            lines.push(format!(
                "{day}/{month}/24, {hour:02}:{minute:02} - {} added someone",
                senders[i % senders.len()]
            ));
        } else {
            lines.push(format!(
                "{day}/{month}/24, {hour:02}:{minute:02} - {}: {} {i}",
                senders[i % senders.len()],
                bodies[i % bodies.len()]
            ));
        }
    }
    lines.join("\n")
}

fn stop_words() -> StopWords {
    StopWords::from_text("how are you a the is")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_segmenting(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenting");
    let segmenter = Segmenter::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| black_box(segmenter.count_markers(black_box(txt))));
        });
    }
    group.finish();
}

fn bench_table_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_parsing");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let table = ChatTable::parse(black_box(txt)).unwrap();
                black_box(table)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Statistics Benchmarks
// =============================================================================

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let engine = StatsEngine::builder().with_stop_words(stop_words()).build();
    let size = 10_000_usize;
    let table = ChatTable::parse(&generate_export(size)).unwrap();
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("fetch_stats", |b| {
        b.iter(|| black_box(engine.fetch_stats(&Selector::Overall, black_box(&table))));
    });
    group.bench_function("most_common_words", |b| {
        b.iter(|| black_box(engine.most_common_words(&Selector::Overall, black_box(&table))));
    });
    group.bench_function("emoji_helper", |b| {
        b.iter(|| black_box(engine.emoji_helper(&Selector::Overall, black_box(&table))));
    });
    group.bench_function("activity_heatmap", |b| {
        b.iter(|| black_box(engine.activity_heatmap(&Selector::Overall, black_box(&table))));
    });
    group.bench_function("select_author", |b| {
        let alice = Selector::author("Alice");
        b.iter(|| black_box(table.select(black_box(&alice)).len()));
    });
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let engine = StatsEngine::builder().with_stop_words(stop_words()).build();
    let table = ChatTable::parse(&generate_export(10_000)).unwrap();
    let report = Report::build(&engine, &Selector::Overall, &table);

    group.bench_function("table_csv", |b| {
        b.iter(|| black_box(to_csv(black_box(&table)).unwrap()));
    });
    group.bench_function("report_json", |b| {
        b.iter(|| black_box(to_json(black_box(&report)).unwrap()));
    });
    group.finish();
}

// =============================================================================
// Full Pipeline
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let engine = StatsEngine::builder().with_stop_words(stop_words()).build();

    for size in [1_000_usize, 10_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let table = ChatTable::parse(black_box(txt)).unwrap();
                black_box(Report::build(&engine, &Selector::Overall, &table))
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_segmenting,
    bench_table_parsing,
    bench_statistics,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
