//! Property-based tests for the Kruskal implementation.
//!
//! Checks small graphs against a brute-force spanning tree oracle and larger
//! generated graphs against structural invariants (acyclicity, edge count,
//! component count).

mod oracle;
mod strategies;
mod tests;
mod types;
