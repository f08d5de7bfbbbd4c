//! Support library for the treemend CLI binary.
//!
//! Exposes the command pipeline and logging setup so tests can exercise them
//! without forking a subprocess.

pub mod cli;
pub mod logging;
