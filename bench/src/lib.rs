//! Benchmark utilities for Rusty Events.
//!
//! Microbenchmarks for the registry's hot paths:
//!
//! - **Broadcast**: delivery fan-out across growing listener sets
//! - **Subscription churn**: subscribe/unsubscribe cycles, including replay on join
//! - **Declaration**: creating many events in a fresh registry
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p rusty_events_bench
//!
//! # Run specific benchmark group
//! cargo bench -p rusty_events_bench -- broadcast
//! ```
//!
//! Results are written to `target/criterion/` with HTML reports for visualization.

pub mod fixtures;
