//! Support library for the `topograph` binary.
//!
//! Exposes argument parsing, command execution and rendering so tests and
//! doctests can drive commands without spawning a process.

pub mod cli;
pub mod logging;
