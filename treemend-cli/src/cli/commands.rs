//! Command implementations and argument parsing for the treemend CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use treemend_core::{Edge, Graph, RepairError, RepairPipeline, RepairReport};
use treemend_providers_text::{EdgeListProvider, TextProviderError};

const DEFAULT_INPUT: &str = "input.txt";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "treemend",
    about = "Fail one edge of a minimum spanning tree and repair it."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the minimum spanning tree, fail an edge and repair the tree.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge list in the `V E (u v w)*` format.
    #[arg(default_value = DEFAULT_INPUT)]
    pub path: PathBuf,

    /// Position in the ascending tree of the edge to fail (defaults to the
    /// heaviest edge).
    #[arg(long = "fail-index", value_parser = clap::value_parser!(usize))]
    pub fail_index: Option<usize>,

    /// Name for the data source in log events (defaults to the file stem).
    /// The printed report does not include it.
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// The repair pipeline failed.
    #[error(transparent)]
    Repair(#[from] RepairError),
}

impl CliError {
    /// Returns the stable code of the underlying pipeline error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Repair(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::Text(_) => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded edge list, used to label diagnostics.
    pub data_source: String,
    /// Everything the repair pipeline computed.
    pub report: RepairReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be opened or parsed, or the
/// pipeline rejects the requested failure.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use treemend_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4 5\n0 1 1\n1 2 2\n2 3 3\n3 0 4\n0 2 5\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         fail_index: None,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.repaired().map(|tree| tree.total_weight()), Some(7));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, policy = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        fail_index,
        name,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    match fail_index {
        Some(index) => span.record("policy", field::display(format!("index:{index}"))),
        None => span.record("policy", field::display("heaviest")),
    };

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_input(&path)?;
    let provider = EdgeListProvider::try_from_reader(chosen_name, reader)?;
    let report = repair(provider.graph(), fail_index)?;

    info!(
        data_source = provider.name(),
        outcome = report.outcome().label(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        report,
    })
}

fn repair(graph: &Graph, fail_index: Option<usize>) -> Result<RepairReport, RepairError> {
    match fail_index {
        Some(index) => {
            RepairPipeline::with_failure_policy(move |_: &[Edge]| -> Option<usize> { Some(index) })
                .run(graph)
        }
        None => RepairPipeline::new().run(graph),
    }
}

#[instrument(name = "cli.open_input", err, fields(path = field::Empty))]
pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "edge_list".to_owned())
}

/// Renders the repair report held by `summary` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use treemend_cli::cli::{ExecutionSummary, render_summary};
/// # use treemend_core::{Graph, RepairPipeline};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_triples([(0, 1, 1), (1, 2, 2), (0, 2, 3)]);
/// let summary = ExecutionSummary {
///     data_source: "triangle".into(),
///     report: RepairPipeline::new().run(&graph)?,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("new total MST weight: 4\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    summary.report.render(writer)
}
