//! Benchmark support crate for topograph.
//!
//! Provides parameter types and seeded graph fixtures used by the Criterion
//! benchmarks for generation, single-pair queries and diameter computation.

pub mod error;
pub mod fixtures;
pub mod params;
