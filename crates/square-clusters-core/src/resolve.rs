//! Reduction of an ordered candidate list to a displayable set.
//!
//! Both modes walk pairs `(a, b)` with `a` before `b` in discovery order.
//! Removed entries are tombstoned and dropped in a single `retain` pass at
//! the end, which yields the same survivors, in the same order, as deleting
//! them positionally during the walk.

use crate::cluster::Cluster;
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Pairwise reconciliation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveMode {
    /// Overlapping pairs keep the larger square; ties keep the earlier one.
    /// Survivors are pairwise disjoint.
    #[default]
    SizePriority,
    /// Only fully nested pairs are reconciled, and the containing square is
    /// the one removed. Partial overlaps survive.
    Containment,
}

/// What to do with a pair `(a, b)` where `a` precedes `b`.
enum Verdict {
    Keep,
    DropFirst,
    DropSecond,
}

impl ResolveMode {
    fn judge(self, a: &Cluster, b: &Cluster) -> Verdict {
        match self {
            ResolveMode::SizePriority if !a.overlaps(b) => Verdict::Keep,
            ResolveMode::SizePriority if a.size < b.size => Verdict::DropFirst,
            ResolveMode::SizePriority => Verdict::DropSecond,
            ResolveMode::Containment if a.contains(b) => Verdict::DropFirst,
            ResolveMode::Containment if b.contains(a) => Verdict::DropSecond,
            ResolveMode::Containment => Verdict::Keep,
        }
    }
}

/// Reduce `clusters` according to `mode`, preserving the relative order of
/// survivors.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(clusters), fields(candidates = clusters.len()))
)]
pub fn resolve_overlaps(mut clusters: Vec<Cluster>, mode: ResolveMode) -> Vec<Cluster> {
    if clusters.len() < 2 {
        return clusters;
    }

    let before = clusters.len();
    let mut alive = vec![true; before];
    for i in 0..before {
        if !alive[i] {
            continue;
        }
        let a = clusters[i];
        for j in i + 1..before {
            if !alive[j] {
                continue;
            }
            match mode.judge(&a, &clusters[j]) {
                Verdict::Keep => {}
                Verdict::DropFirst => {
                    alive[i] = false;
                    break;
                }
                Verdict::DropSecond => alive[j] = false,
            }
        }
    }

    let mut flags = alive.into_iter();
    clusters.retain(|_| flags.next().unwrap_or(false));
    debug!(
        "resolve {:?}: {} -> {} clusters",
        mode,
        before,
        clusters.len()
    );
    clusters
}
