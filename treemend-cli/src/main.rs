//! `treemend` binary.
//!
//! Loads an edge list, fails one edge of its minimum spanning tree and prints
//! the repair report on stdout. Diagnostics, including the failure of any
//! step, go to stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use treemend_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_failure(&err);
            ExitCode::FAILURE
        }
    }
}

/// Runs the command and writes its report through a buffered stdout handle.
fn execute(cli: Cli) -> anyhow::Result<()> {
    let summary = run_cli(cli).context("treemend run failed")?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut stdout).context("cannot write the report to stdout")?;
    stdout.flush().context("cannot flush stdout")?;

    info!(
        data_source = summary.data_source.as_str(),
        outcome = summary.report.outcome().label(),
        "report written"
    );
    Ok(())
}

fn log_failure(err: &anyhow::Error) {
    let chain = format!("{err:#}");
    match err.downcast_ref::<CliError>().and_then(CliError::code) {
        Some(code) => error!(error = chain.as_str(), code, "treemend failed"),
        None => error!(error = chain.as_str(), "treemend failed"),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "no subscriber exists to carry this diagnostic"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("treemend: cannot set up diagnostics: {err}");
}
