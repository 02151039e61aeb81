use crate::cluster::Cluster;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of clusters per square size, ascending by size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeSummary {
    counts: BTreeMap<usize, usize>,
}

impl SizeSummary {
    pub fn from_clusters(clusters: &[Cluster]) -> Self {
        let mut counts = BTreeMap::new();
        for c in clusters {
            *counts.entry(c.size).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// `(size, count)` pairs, smallest size first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&size, &count)| (size, count))
    }

    pub fn count(&self, size: usize) -> usize {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
