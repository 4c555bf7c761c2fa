//! Command-line interface for generating graphs and querying them.
//!
//! Every command builds a fresh graph from the generation flags. Passing the
//! same `--seed` to `generate`, `path` and `diameter` makes them all operate
//! on the same graph.

mod commands;

pub use commands::{
    Cli, CliError, Command, GeneratedGraph, GenerationArgs, OutputFormat, PathCommand, Report,
    build_config, render_report, run_cli,
};
