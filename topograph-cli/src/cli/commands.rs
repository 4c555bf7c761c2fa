//! Command implementations and argument parsing for the `topograph` binary.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use thiserror::Error;
use topograph_core::{
    ConfigError, ConfigErrorCode, GenerationConfig, GenerationError, Graph, GraphGenerator,
    NodeId, PathEngine, PathError, ShortestPath,
};
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "topograph",
    version,
    about = "Generate random connected graphs and query their shortest paths."
)]
pub struct Cli {
    /// Output format for the command result.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands. Each one generates a graph first.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a graph and print its nodes and edges.
    Generate(GenerationArgs),
    /// Generate a graph and print the shortest path between two nodes.
    Path(PathCommand),
    /// Generate a graph and print its weighted diameter.
    Diameter(GenerationArgs),
}

/// Options shaping the generated graph.
#[derive(Debug, Args, Clone)]
pub struct GenerationArgs {
    /// Number of nodes (3 to 20).
    #[arg(long = "nodes", default_value_t = GenerationConfig::default().node_count())]
    pub nodes: usize,

    /// Advisory lower bound on links per node.
    #[arg(long = "min-links", default_value_t = GenerationConfig::default().min_degree())]
    pub min_links: usize,

    /// Upper bound on links per node (at most 4).
    #[arg(long = "max-links", default_value_t = GenerationConfig::default().max_degree())]
    pub max_links: usize,

    /// Draw link weights from the weight range instead of using 1.
    #[arg(long)]
    pub weighted: bool,

    /// Smallest link weight when `--weighted` is set.
    #[arg(
        long = "min-weight",
        default_value_t = GenerationConfig::default().weight_range().min()
    )]
    pub min_weight: u32,

    /// Largest link weight when `--weighted` is set.
    #[arg(
        long = "max-weight",
        default_value_t = GenerationConfig::default().weight_range().max()
    )]
    pub max_weight: u32,

    /// Seed for reproducible graphs; drawn at random when absent.
    #[arg(long, env = "TOPOGRAPH_SEED")]
    pub seed: Option<u64>,
}

/// Arguments of the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathCommand {
    /// Node the path starts at.
    pub from: usize,

    /// Node the path ends at.
    pub to: usize,

    /// Graph options.
    #[command(flatten)]
    pub generation: GenerationArgs,
}

/// Rendering styles for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one fact per line.
    #[default]
    Human,
    /// A single pretty-printed JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// The generation options were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Generation did not produce a graph.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// A path endpoint does not exist in the generated graph.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl CliError {
    /// Stable machine-readable code of the underlying core error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.code().as_str(),
            Self::Generation(err) => err.code().as_str(),
            Self::Path(err) => err.code().as_str(),
        }
    }

    /// Code of the configuration problem behind this error, if any.
    #[must_use]
    pub const fn config_code(&self) -> Option<ConfigErrorCode> {
        match self {
            Self::Config(err) => Some(err.code()),
            Self::Generation(err) => err.config_code(),
            Self::Path(_) => None,
        }
    }
}

/// Generated graph plus the seed that reproduces it.
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    /// Seed handed to the generator.
    pub seed: u64,
    /// Validated configuration the graph was built from.
    pub config: GenerationConfig,
    /// The graph itself.
    pub graph: Graph,
}

/// Result of one command, ready for rendering.
#[derive(Debug, Clone)]
pub enum Report {
    /// Output of `generate`.
    Graph(GeneratedGraph),
    /// Output of `path`.
    Path {
        /// Graph the query ran against.
        generated: GeneratedGraph,
        /// Query result.
        route: ShortestPath,
    },
    /// Output of `diameter`.
    Diameter {
        /// Graph the query ran against.
        generated: GeneratedGraph,
        /// Largest finite shortest-path distance.
        diameter: u64,
    },
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the options are invalid, generation gives up,
/// or a path endpoint is outside the graph.
///
/// # Examples
/// ```
/// use topograph_cli::cli::{Cli, Command, GenerationArgs, OutputFormat, Report, run_cli};
///
/// let cli = Cli {
///     format: OutputFormat::Human,
///     command: Command::Diameter(GenerationArgs {
///         nodes: 6,
///         min_links: 1,
///         max_links: 3,
///         weighted: false,
///         min_weight: 1,
///         max_weight: 10,
///         seed: Some(7),
///     }),
/// };
/// let Report::Diameter { diameter, .. } = run_cli(cli)? else {
///     unreachable!("diameter command yields a diameter report");
/// };
/// assert!((1..6).contains(&diameter));
/// # Ok::<(), topograph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(args) => {
            span.record("command", "generate");
            generate(&args).map(Report::Graph)
        }
        Command::Path(command) => {
            span.record("command", "path");
            run_path(&command)
        }
        Command::Diameter(args) => {
            span.record("command", "diameter");
            run_diameter(&args)
        }
    }
}

/// Translates the flag set into a validated configuration.
///
/// # Errors
/// Returns the first [`ConfigError`] found by the configuration builder.
pub fn build_config(args: &GenerationArgs) -> Result<GenerationConfig, ConfigError> {
    GenerationConfig::builder()
        .with_node_count(args.nodes)
        .with_min_degree(args.min_links)
        .with_max_degree(args.max_links)
        .with_weighting(args.weighted)
        .with_weight_bounds(args.min_weight, args.max_weight)
        .build()
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(nodes = args.nodes, weighted = args.weighted, seed = field::Empty),
)]
pub(super) fn generate(args: &GenerationArgs) -> Result<GeneratedGraph, CliError> {
    let config = build_config(args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);

    let graph = GraphGenerator::seeded(seed).generate(&config)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        seed,
        "graph generated"
    );
    Ok(GeneratedGraph {
        seed,
        config,
        graph,
    })
}

#[instrument(
    name = "cli.path",
    err,
    skip(command),
    fields(from = command.from, to = command.to),
)]
pub(super) fn run_path(command: &PathCommand) -> Result<Report, CliError> {
    let generated = generate(&command.generation)?;
    let route = PathEngine::new(&generated.graph)
        .shortest_path(NodeId::new(command.from), NodeId::new(command.to))?;
    info!(distance = %route.distance(), hops = route.hops().count(), "path resolved");
    Ok(Report::Path { generated, route })
}

#[instrument(name = "cli.diameter", err, skip(args))]
pub(super) fn run_diameter(args: &GenerationArgs) -> Result<Report, CliError> {
    let generated = generate(args)?;
    let diameter = PathEngine::new(&generated.graph).diameter();
    info!(diameter, "diameter computed");
    Ok(Report::Diameter {
        generated,
        diameter,
    })
}

/// Writes `report` to `writer` in the requested `format`.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use topograph_cli::cli::{GeneratedGraph, OutputFormat, Report, render_report};
/// use topograph_core::{GenerationConfig, Graph};
///
/// let report = Report::Diameter {
///     generated: GeneratedGraph {
///         seed: 3,
///         config: GenerationConfig::default(),
///         graph: Graph::from_edges(2, [(0, 1, 7)])?,
///     },
///     diameter: 7,
/// };
/// let mut buffer = Vec::new();
/// render_report(&report, OutputFormat::Human, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "seed: 3\ndiameter: 7\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &Report, format: OutputFormat, writer: impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Human => render_human(report, writer),
        OutputFormat::Json => render_json(report, writer),
    }
}

fn render_human(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Graph(generated) => {
            let graph = &generated.graph;
            writeln!(writer, "seed: {}", generated.seed)?;
            writeln!(writer, "nodes: {}", graph.node_count())?;
            writeln!(writer, "edges: {}", graph.edge_count())?;
            writeln!(writer, "total weight: {}", graph.total_weight())?;
            for node in graph.nodes() {
                let position = node.position();
                writeln!(
                    writer,
                    "node {}\t({}, {})\tdegree {}",
                    node.id(),
                    position.x,
                    position.y,
                    node.degree()
                )?;
            }
            for edge in graph.edges() {
                writeln!(
                    writer,
                    "edge {} - {}\tweight {}",
                    edge.source(),
                    edge.target(),
                    edge.weight()
                )?;
            }
        }
        Report::Path { generated, route } => {
            writeln!(writer, "seed: {}", generated.seed)?;
            writeln!(writer, "distance: {}", route.distance())?;
            if route.is_reachable() {
                let hops: Vec<String> = route.path().iter().map(ToString::to_string).collect();
                writeln!(writer, "path: {}", hops.join(" -> "))?;
            } else {
                writeln!(writer, "path: none")?;
            }
        }
        Report::Diameter {
            generated,
            diameter,
        } => {
            writeln!(writer, "seed: {}", generated.seed)?;
            writeln!(writer, "diameter: {diameter}")?;
        }
    }
    Ok(())
}

fn render_json(report: &Report, mut writer: impl Write) -> io::Result<()> {
    let document = match report {
        Report::Graph(generated) => json!({
            "seed": generated.seed,
            "config": generated.config,
            "graph": generated.graph,
        }),
        Report::Path { generated, route } => json!({
            "seed": generated.seed,
            "graph": generated.graph,
            "route": route,
        }),
        Report::Diameter {
            generated,
            diameter,
        } => json!({
            "seed": generated.seed,
            "graph": generated.graph,
            "diameter": diameter,
        }),
    };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)
}
