//! Command-line interface orchestration for treemend.
//!
//! The CLI offers a single `run` command that loads a whitespace-separated
//! edge list, builds its minimum spanning tree, fails one tree edge and
//! reports how the tree was repaired.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};
