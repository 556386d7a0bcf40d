use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keyhole::core::config::FieldNames;
use keyhole::core::pattern::matches_any;
use keyhole::{PolicyFilters, SecretDocument};
use std::time::Duration;

/// Generate a JSON document with `n` fields plus the three policy fields.
fn generate_document(n: usize) -> String {
    let mut fields: Vec<String> = (0..n)
        .map(|i| format!(r#""KEY_{}":"value-{}""#, i, "x".repeat(32)))
        .collect();
    fields.push(r#""X-Drone-Events":"push, tag, promote""#.to_string());
    fields.push(r#""X-Drone-Repos":"octocat/*, github/*""#.to_string());
    fields.push(r#""X-Drone-Branches":"main, release/*""#.to_string());
    format!("{{{}}}", fields.join(","))
}

/// Benchmark document normalization with varying field counts.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for n in [1, 8, 64, 256] {
        let payload = generate_document(n);
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("json", n), &payload, |b, payload| {
            b.iter(|| black_box(SecretDocument::parse(black_box(payload))));
        });
    }

    let raw = "x".repeat(4096);
    group.bench_function("raw_4096B", |b| {
        b.iter(|| black_box(SecretDocument::parse(black_box(&raw))));
    });

    group.finish();
}

/// Benchmark filter extraction and matching.
fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let doc = SecretDocument::parse(&generate_document(8));
    let names = FieldNames::default();

    group.bench_function("extract", |b| {
        b.iter(|| black_box(PolicyFilters::extract(black_box(&doc), &names)));
    });

    let filters = PolicyFilters::extract(&doc, &names);
    group.bench_function("match_literal", |b| {
        b.iter(|| black_box(matches_any(black_box("promote"), &filters.events)));
    });
    group.bench_function("match_glob", |b| {
        b.iter(|| black_box(matches_any(black_box("github/hub"), &filters.repos)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_filters);
criterion_main!(benches);
