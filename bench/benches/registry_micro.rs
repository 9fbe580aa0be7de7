//! Registry microbenchmarks using Criterion.
//!
//! These benchmarks measure individual registry operations in isolation:
//! - Broadcast fan-out
//! - Subscribe/unsubscribe churn
//! - Replay on join for single-kind events
//! - Event declaration

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rusty_events::{EventKind, EventRegistry};
use rusty_events_bench::fixtures::{event_names, populated, summing_listener};
use std::sync::{Arc, atomic::AtomicU64};

// =============================================================================
// Broadcast Benchmarks
// =============================================================================

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");

    for listeners in [1, 16, 256] {
        group.throughput(Throughput::Elements(listeners as u64));

        let id = BenchmarkId::new("default", listeners);
        group.bench_with_input(id, &listeners, |b, &n| {
            let (registry, total) = populated("tick", EventKind::Default, n);
            b.iter(|| registry.broadcast(black_box("tick"), [1]));
            black_box(total);
        });

        // Single-kind events also retain the arguments on every broadcast.
        let id = BenchmarkId::new("single", listeners);
        group.bench_with_input(id, &listeners, |b, &n| {
            let (registry, total) = populated("tick", EventKind::Single, n);
            b.iter(|| registry.broadcast(black_box("tick"), [1, 2, 3]));
            black_box(total);
        });
    }

    group.bench_function("unknown_event", |b| {
        let (registry, _) = populated("tick", EventKind::Default, 1);
        b.iter(|| registry.broadcast(black_box("missing"), [1]));
    });

    group.finish();
}

// =============================================================================
// Subscription Benchmarks
// =============================================================================

fn bench_subscription(c: &mut Criterion) {
    let mut group = c.benchmark_group("subscription");

    for existing in [0, 64, 512] {
        group.bench_with_input(
            BenchmarkId::new("subscribe_unsubscribe", existing),
            &existing,
            |b, &n| {
                let (registry, total) = populated("tick", EventKind::Default, n);
                let listener = summing_listener(&total);
                b.iter(|| {
                    registry.subscribe("tick", [&listener]);
                    registry.unsubscribe("tick", [&listener]);
                });
            },
        );
    }

    group.bench_function("replay_on_join", |b| {
        let (registry, total) = populated("tick", EventKind::Single, 0);
        registry.broadcast("tick", [1, 2, 3]);
        let listener = summing_listener(&total);
        b.iter(|| {
            registry.subscribe("tick", [&listener]);
            registry.unsubscribe("tick", [&listener]);
        });
    });

    group.bench_function("subscribe_once_fire", |b| {
        let (registry, total) = populated("tick", EventKind::Default, 0);
        b.iter(|| {
            registry.subscribe_once("tick", summing_listener(&total));
            registry.broadcast("tick", [1]);
        });
    });

    group.finish();
}

// =============================================================================
// Declaration Benchmarks
// =============================================================================

fn bench_declare(c: &mut Criterion) {
    let mut group = c.benchmark_group("declare");

    for count in [100, 1_000, 10_000] {
        let names = event_names(count);
        group.throughput(Throughput::Elements(count as u64));

        let id = BenchmarkId::new("fresh", count);
        group.bench_with_input(id, &names, |b, names| {
            b.iter(|| {
                let registry = EventRegistry::<u64>::new();
                for name in names {
                    black_box(registry.declare(name.as_str())).ok();
                }
            });
        });

        let id = BenchmarkId::new("presized", count);
        group.bench_with_input(id, &names, |b, names| {
            b.iter(|| {
                let registry = EventRegistry::<u64>::with_capacity(names.len());
                for name in names {
                    black_box(registry.declare(name.as_str())).ok();
                }
            });
        });

        // Many names in one subscribe call auto-create every event.
        let id = BenchmarkId::new("auto_create", count);
        group.bench_with_input(id, &names, |b, names| {
            let listener = summing_listener(&Arc::new(AtomicU64::new(0)));
            b.iter(|| {
                let registry = EventRegistry::<u64>::new();
                registry.subscribe(names.as_slice(), [&listener]);
                black_box(registry.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_broadcast, bench_subscription, bench_declare);
criterion_main!(benches);
