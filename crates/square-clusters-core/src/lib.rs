//! Uniform square cluster search on binary grids.
//!
//! The crate finds axis-aligned squares whose cells all share one value and
//! reduces the overlapping candidate set to a displayable one. It is purely
//! combinatorial: no randomness, rendering or I/O lives here.
//!
//! ```
//! use square_clusters_core::{find_clusters, resolve_overlaps, BinaryGrid};
//! use square_clusters_core::{ClusterSearchParams, ResolveMode, SizeSummary};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = BinaryGrid::parse("1 1 0\n1 1 0\n0 0 1")?;
//! let candidates = find_clusters(&grid, &ClusterSearchParams::default())?;
//! let clusters = resolve_overlaps(candidates, ResolveMode::SizePriority);
//! let summary = SizeSummary::from_clusters(&clusters);
//! assert_eq!(summary.count(2), 1);
//! # Ok(())
//! # }
//! ```

mod cluster;
mod encode;
mod error;
mod finder;
mod grid;
mod logger;
mod resolve;
mod summary;

pub use cluster::Cluster;
pub use encode::{encode_rows, RowMask};
pub use error::{ClusterError, GridError};
pub use finder::{find_clusters, ClusterSearchParams};
pub use grid::BinaryGrid;
pub use resolve::{resolve_overlaps, ResolveMode};
pub use summary::SizeSummary;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
