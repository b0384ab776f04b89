//! Benchmarks for name based resolution.
//!
//! Tests lookup performance of the operations a configuration loader runs per entry:
//! - Canonical names and registry lookups
//! - Construction through the zero-argument constructor
//! - Field and method lookups
//! - Descriptor parsing

extern crate typescope;

use criterion::{criterion_group, criterion_main, Criterion};
use std::{hint::black_box, sync::Arc};
use typescope::prelude::*;

#[derive(Default)]
struct Sample {
    _id: i64,
}

/// A registry with `count` filler classes next to the benchmarked `bench.Sample`.
fn registry(count: usize) -> Arc<TypeRegistry> {
    let registry = Arc::new(TypeRegistry::new());
    for index in 0..count {
        TypeBuilder::class(format!("bench.filler.Type{index}"))
            .register(&registry)
            .unwrap();
    }

    TypeBuilder::class("bench.Sample")
        .field("identifier", TypeDescriptor::named("i64"))
        .field("description", TypeDescriptor::named("string"))
        .method("getidentifier", TypeDescriptor::named("i64"))
        .default_constructor::<Sample>()
        .register(&registry)
        .unwrap();
    registry
}

/// Benchmark stripping the classifier prefix.
fn bench_canonical_name(c: &mut Criterion) {
    let descriptor = TypeDescriptor::class("bench.Sample");

    c.bench_function("resolver_canonical_name", |b| {
        b.iter(|| black_box(TypeResolver::canonical_name(Some(black_box(&descriptor)))));
    });
}

/// Benchmark resolving a descriptor in a registry of 1000 types.
fn bench_resolve_type(c: &mut Criterion) {
    let resolver = TypeResolver::new(registry(1000));
    let descriptor = TypeDescriptor::class("bench.Sample");

    c.bench_function("resolver_resolve_type", |b| {
        b.iter(|| {
            let handle = resolver.resolve_type(Some(black_box(&descriptor))).unwrap();
            black_box(handle)
        });
    });
}

/// Benchmark resolving and constructing a fresh instance.
fn bench_construct(c: &mut Criterion) {
    let resolver = TypeResolver::new(registry(1000));
    let descriptor = TypeDescriptor::class("bench.Sample");

    c.bench_function("resolver_construct", |b| {
        b.iter(|| {
            let instance = resolver.construct(Some(black_box(&descriptor))).unwrap();
            black_box(instance)
        });
    });
}

/// Benchmark case-insensitive field lookup and method lookup.
fn bench_member_types(c: &mut Criterion) {
    let registry = registry(100);
    let resolver = TypeResolver::new(registry.clone());
    let sample = registry.get_by_fullname("bench.Sample").unwrap();

    c.bench_function("resolver_field_type", |b| {
        b.iter(|| black_box(resolver.field_type(Some(&sample), black_box("DESCRIPTION"))));
    });

    c.bench_function("resolver_method_return_type", |b| {
        b.iter(|| {
            let found = resolver.method_return_type(Some(&sample), black_box("getIdentifier"));
            black_box(found)
        });
    });
}

/// Benchmark parsing a nested parameterized descriptor.
fn bench_parse_descriptor(c: &mut Criterion) {
    let text = "bench.Pair<java.lang.String, bench.Box<bench.List<i64>>>";

    c.bench_function("descriptor_parse_nested", |b| {
        b.iter(|| {
            let descriptor: TypeDescriptor = black_box(text).parse().unwrap();
            black_box(descriptor)
        });
    });
}

criterion_group!(
    benches,
    bench_canonical_name,
    bench_resolve_type,
    bench_construct,
    bench_member_types,
    bench_parse_descriptor
);
criterion_main!(benches);
