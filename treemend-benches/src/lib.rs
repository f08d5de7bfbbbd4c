//! Benchmark support crate for treemend.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for minimum spanning tree construction and tree repair.

pub mod error;
pub mod params;
pub mod source;
