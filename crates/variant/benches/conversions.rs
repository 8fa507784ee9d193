// Benchmarks for variant conversions
//
// Covers construction, the registry dispatch for each target, and the text
// boundary.

use chrono::Utc;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nebula_variant::parse::{IntWidth, parse_signed};
use nebula_variant::{Registry, Variant, marshal_text, unmarshal_text};

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("from_i64", |b| {
        b.iter(|| Variant::from(black_box(i64::MAX)));
    });

    group.bench_function("from_str", |b| {
        b.iter(|| Variant::from(black_box("Hello World!你好！")));
    });

    let now = Utc::now();
    group.bench_function("from_time", |b| {
        b.iter(|| Variant::from(black_box(now)));
    });

    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    let int_val = Variant::from(i64::MAX);
    let float_val = Variant::from(123_456_789.123_456_78_f64);
    let f32_val = Variant::from(12_345.123_f32);
    let text_val = Variant::from("-9223372036854775808");
    let time_val = Variant::from(Utc::now());

    group.bench_function("int64_to_string", |b| {
        b.iter(|| black_box(&int_val).to_text());
    });

    group.bench_function("float64_to_string", |b| {
        b.iter(|| black_box(&float_val).to_text());
    });

    group.bench_function("float32_to_float64", |b| {
        b.iter(|| black_box(&f32_val).to_float64());
    });

    group.bench_function("string_to_int64", |b| {
        b.iter(|| black_box(&text_val).to_int64());
    });

    group.bench_function("string_to_uint", |b| {
        b.iter(|| black_box(&text_val).to_uint());
    });

    group.bench_function("time_to_int64", |b| {
        b.iter(|| black_box(&time_val).to_int64());
    });

    group.bench_function("time_to_string", |b| {
        b.iter(|| black_box(&time_val).to_text());
    });

    let registry = Registry::new();
    group.bench_function("explicit_registry", |b| {
        b.iter(|| black_box(&int_val).convert(registry.float64()));
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("signed_w64_boundary", |b| {
        b.iter(|| parse_signed(black_box(b"-9223372036854775808"), IntWidth::W64));
    });

    group.bench_function("signed_w32_short", |b| {
        b.iter(|| parse_signed(black_box(b"-100.86"), IntWidth::W32));
    });

    group.finish();
}

fn bench_text_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_boundary");

    let v = Variant::from("Hello World!");
    group.bench_function("marshal_string", |b| {
        b.iter(|| marshal_text(black_box(&v)).unwrap());
    });

    group.bench_function("unmarshal_quoted", |b| {
        b.iter(|| unmarshal_text(black_box(br#""Hello World!""#)).unwrap());
    });

    group.bench_function("unmarshal_raw", |b| {
        b.iter(|| unmarshal_text(black_box(b"60.123")).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_conversions,
    bench_parse,
    bench_text_boundary
);
criterion_main!(benches);
