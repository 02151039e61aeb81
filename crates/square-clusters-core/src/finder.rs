//! Uniform square search.
//!
//! Every corner grows a square from `min_size` upwards and stops at the
//! first size that is not uniform: a square containing a mixed sub-square
//! is mixed too, so no larger size from that corner can succeed.

use crate::cluster::Cluster;
use crate::encode::{encode_rows, RowMask};
use crate::error::ClusterError;
use crate::grid::BinaryGrid;
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Parameters for [`find_clusters`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSearchParams {
    /// Smallest square side to report, `2..=N`.
    pub min_size: usize,
    /// Keep only squares tied for the largest uniform size found.
    pub max_only: bool,
}

impl Default for ClusterSearchParams {
    fn default() -> Self {
        Self {
            min_size: 2,
            max_only: true,
        }
    }
}

/// Find uniform squares in `grid`.
///
/// Clusters are returned in discovery order: `y1` ascending, then `x1`
/// ascending, then size ascending. With `max_only` the list holds only the
/// squares of the single largest uniform size.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(grid, params), fields(size = grid.size(), min_size = params.min_size))
)]
pub fn find_clusters(
    grid: &BinaryGrid,
    params: &ClusterSearchParams,
) -> Result<Vec<Cluster>, ClusterError> {
    let n = grid.size();
    let min_size = params.min_size;
    if min_size < 2 || min_size > n {
        return Err(ClusterError::InvalidMinSize { min_size, size: n });
    }

    let masks = encode_rows(grid);
    let mut clusters = Vec::new();
    let mut max_size = min_size;
    let mut tests = 0usize;

    for y1 in 0..=n - min_size {
        for x1 in 0..=n - min_size {
            let mut size = min_size;
            while x1 + size <= n && y1 + size <= n {
                tests += 1;
                if !is_uniform(&masks, x1, y1, size) {
                    break;
                }

                let cluster = Cluster::square(x1, y1, size);
                if !params.max_only || size == max_size {
                    clusters.push(cluster);
                } else if size > max_size {
                    max_size = size;
                    clusters.clear();
                    clusters.push(cluster);
                }
                size += 1;
            }
        }
    }

    debug!(
        "cluster search: n={} min_size={} max_only={} tests={} found={}",
        n,
        min_size,
        params.max_only,
        tests,
        clusters.len()
    );
    Ok(clusters)
}

/// All rows of the square agree on one value across its columns.
fn is_uniform(masks: &[RowMask], x1: usize, y1: usize, size: usize) -> bool {
    let x2 = x1 + size - 1;
    let rows = &masks[y1..y1 + size];
    rows.iter().all(|m| m.all_set(x1, x2)) || rows.iter().all(|m| m.all_clear(x1, x2))
}
