//! High-level facade for the `square-clusters` workspace.
//!
//! This crate provides:
//! - a re-export of the search core (`square_clusters::core`)
//! - random grid generation (`generate`)
//! - ANSI terminal rendering of resolved clusters (`render`)
//! - a timed generate → search → resolve pipeline (`pipeline`)
//! - the performance harness (`perf`) and JSON config/report I/O (`io`)
//!
//! ## Quickstart
//!
//! ```
//! use square_clusters::pipeline::{run, RunConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RunConfig {
//!     size: 16,
//!     seed: Some(7),
//!     ..RunConfig::default()
//! };
//! let report = run(&config)?;
//! assert_eq!(report.summary.total(), report.clusters.len());
//! # Ok(())
//! # }
//! ```
//!
//! The `square-clusters` binary (feature `cli`) wraps the same pipeline with
//! `run`, `find`, `perf` and an interactive `menu`.

pub use square_clusters_core as core;

pub use square_clusters_core::{
    find_clusters, resolve_overlaps, BinaryGrid, Cluster, ClusterSearchParams, ResolveMode,
    SizeSummary,
};

pub mod generate;
pub mod io;
pub mod perf;
pub mod pipeline;
pub mod render;
