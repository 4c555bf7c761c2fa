//! Shared test utilities used across topograph crates.

pub mod ci;
pub mod tracing;
