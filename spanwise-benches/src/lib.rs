//! Benchmark support crate for spanwise.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks covering union-find operations and spanning forest builds.

pub mod error;
pub mod graph;
pub mod params;
