//! Command definitions and execution for the `spanwise` CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spanwise_core::{
    EdgeList, EdgeListError, EdgeListFormat, ErrorKind, ForestError, IndexBase,
    MinimumSpanningForestBuilder, MstAlgorithm, Road, Weight, connecting_roads, has_cycle,
    read_edge_list,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Minimum spanning forests and connectivity queries over edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a minimum spanning forest from a weighted edge list.
    Mst(MstCommand),
    /// List the fewest new roads that connect every component.
    Roads(RoadsCommand),
    /// Report whether an unweighted edge list contains a cycle.
    Cycle(CycleCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to a weighted edge-list file.
    pub path: PathBuf,

    /// Spanning forest algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Kruskal)]
    pub algorithm: AlgorithmArg,

    /// Treat node labels as one-based.
    #[arg(long)]
    pub one_based: bool,

    /// Output format for the summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Fail when the graph is not connected.
    #[arg(long)]
    pub require_tree: bool,

    /// Parse weights as 64-bit integers instead of floats.
    ///
    /// Float weights lose precision beyond 2^53; integer totals are exact and
    /// fail instead of wrapping when they exceed the 64-bit range.
    #[arg(long)]
    pub integer_weights: bool,
}

/// Options accepted by the `roads` command.
#[derive(Debug, Args, Clone)]
pub struct RoadsCommand {
    /// Path to an unweighted edge-list file.
    pub path: PathBuf,

    /// Treat node labels as zero-based instead of one-based.
    #[arg(long)]
    pub zero_based: bool,
}

/// Options accepted by the `cycle` command.
#[derive(Debug, Args, Clone)]
pub struct CycleCommand {
    /// Path to an unweighted edge-list file.
    pub path: PathBuf,

    /// Treat node labels as one-based.
    #[arg(long)]
    pub one_based: bool,
}

/// Algorithms selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Sort edges and merge components with a disjoint set.
    Kruskal,
    /// Grow each tree from its lowest node with a priority queue.
    Prim,
}

impl From<AlgorithmArg> for MstAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Kruskal => Self::Kruskal,
            AlgorithmArg::Prim => Self::Prim,
        }
    }
}

/// Rendering of the `mst` summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled lines followed by tab-separated edges.
    Human,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was not a valid edge list.
    #[error("invalid edge list `{path}`: {source}")]
    EdgeList {
        /// Path of the rejected file.
        path: PathBuf,
        /// Parse or validation failure.
        #[source]
        source: EdgeListError,
    },
    /// A core routine rejected its input.
    #[error(transparent)]
    Forest(#[from] ForestError),
    /// `--require-tree` was given but the graph is disconnected.
    #[error("graph is not connected: spanning forest has {components} components")]
    NotATree {
        /// Number of trees in the forest.
        components: usize,
    },
}

impl CliError {
    /// Returns the stable code for logging.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::EdgeList { source, .. } => source.code().as_str(),
            Self::Forest(error) => error.code().as_str(),
            Self::NotATree { .. } => "CLI_NOT_A_TREE",
        }
    }

    /// Returns the [`ErrorKind`] of the underlying graph constraint violation,
    /// if there is one.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::EdgeList { source, .. } => source.forest_error().map(ForestError::kind),
            Self::Forest(error) => Some(error.kind()),
            _ => None,
        }
    }
}

/// A weight as parsed from the input, serialised as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryWeight {
    /// Parsed with `--integer-weights`.
    Integer(i64),
    /// Parsed as a float.
    Float(f64),
}

impl From<i64> for SummaryWeight {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SummaryWeight {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for SummaryWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => value.fmt(f),
            Self::Float(value) => value.fmt(f),
        }
    }
}

/// One selected edge in the labels used by the input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEdge {
    /// First endpoint.
    pub source: usize,
    /// Second endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: SummaryWeight,
}

/// Outcome of the `mst` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstSummary {
    /// Algorithm that built the forest.
    pub algorithm: &'static str,
    /// Number of nodes in the input.
    pub node_count: usize,
    /// Number of trees in the forest.
    pub component_count: usize,
    /// Sum of the selected weights.
    pub total_weight: SummaryWeight,
    /// Selected edges in the order the algorithm accepted them.
    pub edges: Vec<SummaryEdge>,
}

/// Result of executing a command, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Spanning forest summary for `mst`.
    Mst {
        /// The summary.
        summary: MstSummary,
        /// Requested rendering.
        format: OutputFormat,
    },
    /// New roads for `roads`, in the input's labels.
    Roads {
        /// Roads to build.
        roads: Vec<Road>,
    },
    /// Verdict for `cycle`.
    Cycle {
        /// Whether a cycle exists.
        found: bool,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or validated, or when
/// `--require-tree` is violated.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, CommandOutput, CycleCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n0 1\n1 2\n2 0\n")?;
/// let cli = Cli {
///     command: Command::Cycle(CycleCommand {
///         path: file.path().to_path_buf(),
///         one_based: false,
///     }),
/// };
/// assert_eq!(run_cli(cli)?, CommandOutput::Cycle { found: true });
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(command) => {
            span.record("command", "mst");
            run_mst(command)
        }
        Command::Roads(command) => {
            span.record("command", "roads");
            run_roads(command)
        }
        Command::Cycle(command) => {
            span.record("command", "cycle");
            run_cycle(command)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(
        path = %command.path.display(),
        algorithm = field::Empty,
        one_based = command.one_based,
        require_tree = command.require_tree,
        integer_weights = command.integer_weights,
    ),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<CommandOutput, CliError> {
    let algorithm = MstAlgorithm::from(command.algorithm);
    Span::current().record("algorithm", algorithm.as_str());

    let summary = if command.integer_weights {
        summarise_forest::<i64>(&command, algorithm)?
    } else {
        summarise_forest::<f64>(&command, algorithm)?
    };
    info!(
        selected = summary.edges.len(),
        components = summary.component_count,
        "command completed"
    );
    Ok(CommandOutput::Mst {
        summary,
        format: command.format,
    })
}

#[instrument(
    name = "cli.roads",
    err,
    skip(command),
    fields(path = %command.path.display(), zero_based = command.zero_based),
)]
pub(super) fn run_roads(command: RoadsCommand) -> Result<CommandOutput, CliError> {
    let base = index_base(!command.zero_based);
    let list = load_unweighted(&command.path, base)?;
    let roads = connecting_roads(list.node_count(), &list.roads())?
        .into_iter()
        .map(|(left, right)| (base.label(left), base.label(right)))
        .collect::<Vec<_>>();
    info!(new_roads = roads.len(), "command completed");
    Ok(CommandOutput::Roads { roads })
}

#[instrument(
    name = "cli.cycle",
    err,
    skip(command),
    fields(path = %command.path.display(), one_based = command.one_based),
)]
pub(super) fn run_cycle(command: CycleCommand) -> Result<CommandOutput, CliError> {
    let list = load_unweighted(&command.path, index_base(command.one_based))?;
    let found = has_cycle(list.node_count(), &list.roads())?;
    info!(found, "command completed");
    Ok(CommandOutput::Cycle { found })
}

fn summarise_forest<W>(command: &MstCommand, algorithm: MstAlgorithm) -> Result<MstSummary, CliError>
where
    W: Weight + FromStr + Into<SummaryWeight>,
    W::Err: fmt::Display,
{
    let base = index_base(command.one_based);
    let format = EdgeListFormat::new().with_index_base(base);
    let list: EdgeList<W> = load_edge_list(&command.path, format)?;
    let forest = MinimumSpanningForestBuilder::new()
        .with_algorithm(algorithm)
        .build(list.edges(), list.node_count())?;

    if command.require_tree && !forest.is_tree() {
        return Err(CliError::NotATree {
            components: forest.component_count(),
        });
    }

    Ok(MstSummary {
        algorithm: algorithm.as_str(),
        node_count: forest.node_count(),
        component_count: forest.component_count(),
        total_weight: forest.total_weight().into(),
        edges: forest
            .edges()
            .iter()
            .map(|edge| SummaryEdge {
                source: base.label(edge.source()),
                target: base.label(edge.target()),
                weight: edge.weight().into(),
            })
            .collect(),
    })
}

const fn index_base(one_based: bool) -> IndexBase {
    if one_based {
        IndexBase::One
    } else {
        IndexBase::Zero
    }
}

fn load_unweighted(path: &Path, base: IndexBase) -> Result<EdgeList<u64>, CliError> {
    load_edge_list(
        path,
        EdgeListFormat::new().with_index_base(base).with_weights(false),
    )
}

#[instrument(
    name = "cli.load_edge_list",
    err,
    skip(path, format),
    fields(path = %path.display()),
)]
pub(super) fn load_edge_list<W>(path: &Path, format: EdgeListFormat) -> Result<EdgeList<W>, CliError>
where
    W: Weight + FromStr,
    W::Err: fmt::Display,
{
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_edge_list(BufReader::new(file), format).map_err(|source| CliError::EdgeList {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `output` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing fails or the JSON summary cannot be
/// serialised.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{CommandOutput, render_output};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Roads { roads: vec![(1, 2), (2, 4)] };
/// let mut buffer = Vec::new();
/// render_output(&output, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "2\n1 2\n2 4\n");
/// # Ok(())
/// # }
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Mst {
            summary,
            format: OutputFormat::Human,
        } => {
            writeln!(writer, "algorithm: {}", summary.algorithm)?;
            writeln!(writer, "nodes: {}", summary.node_count)?;
            writeln!(writer, "components: {}", summary.component_count)?;
            writeln!(writer, "total weight: {}", summary.total_weight)?;
            for edge in &summary.edges {
                writeln!(writer, "{}\t{}\t{}", edge.source, edge.target, edge.weight)?;
            }
        }
        CommandOutput::Mst {
            summary,
            format: OutputFormat::Json,
        } => {
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writeln!(writer)?;
        }
        CommandOutput::Roads { roads } => {
            writeln!(writer, "{}", roads.len())?;
            for (left, right) in roads {
                writeln!(writer, "{left} {right}")?;
            }
        }
        CommandOutput::Cycle { found } => {
            writeln!(writer, "{}", if *found { "cycle detected" } else { "no cycle" })?;
        }
    }
    Ok(())
}
