//! Timed generate → search → resolve → summarize pipeline.

use crate::generate::{generate_grid, GenerateError, GridWeights};
use crate::render::{render_clusters, render_summary};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use square_clusters_core::{
    find_clusters, resolve_overlaps, BinaryGrid, Cluster, ClusterError, ClusterSearchParams,
    ResolveMode, SizeSummary,
};
use std::time::Instant;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Settings for one pipeline run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Grid side length.
    pub size: usize,
    pub min_size: usize,
    pub max_only: bool,
    pub mode: ResolveMode,
    pub weights: GridWeights,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: 20,
            min_size: 2,
            max_only: true,
            mode: ResolveMode::SizePriority,
            weights: GridWeights::MOSTLY_ONES,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn search_params(&self) -> ClusterSearchParams {
        ClusterSearchParams {
            min_size: self.min_size,
            max_only: self.max_only,
        }
    }
}

/// Wall-clock duration of each stage, in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimings {
    pub generate_ms: f64,
    pub search_ms: f64,
    pub resolve_ms: f64,
}

impl StageTimings {
    pub fn total_ms(&self) -> f64 {
        self.generate_ms + self.search_ms + self.resolve_ms
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RunError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Cluster(#[from] ClusterError),
    #[error("invalid performance parameters: {0}")]
    InvalidPerfParams(&'static str),
}

/// Outcome of one pipeline run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub search: ClusterSearchParams,
    pub mode: ResolveMode,
    #[serde(default)]
    pub seed: Option<u64>,
    pub grid: BinaryGrid,
    /// Number of clusters before overlap resolution.
    pub candidates: usize,
    pub clusters: Vec<Cluster>,
    pub summary: SizeSummary,
    pub timings: StageTimings,
}

impl RunReport {
    /// Summary lines, a blank line, then the highlighted grid.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R, colour: bool) -> String {
        let grid = if colour {
            render_clusters(&self.grid, &self.clusters, self.mode, rng)
        } else {
            self.grid.to_string()
        };
        let summary = render_summary(&self.summary, colour);
        if summary.is_empty() {
            grid
        } else {
            format!("{summary}\n\n{grid}")
        }
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Run the pipeline with an RNG seeded from `config.seed`.
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_with_rng(config, &mut rng)
}

#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(config, rng), fields(size = config.size, min_size = config.min_size))
)]
pub fn run_with_rng<R: Rng + ?Sized>(
    config: &RunConfig,
    rng: &mut R,
) -> Result<RunReport, RunError> {
    let n = config.size;
    let start = Instant::now();
    let grid = generate_grid(n, &config.weights, rng)?;
    let generate_ms = elapsed_ms(start);
    info!("generated a {n}x{n} grid in {generate_ms:.2}ms");

    let mut report = analyze(grid, &config.search_params(), config.mode)?;
    report.seed = config.seed;
    report.timings.generate_ms = generate_ms;
    Ok(report)
}

/// Search and resolve an existing grid.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(grid, search), fields(size = grid.size()))
)]
pub fn analyze(
    grid: BinaryGrid,
    search: &ClusterSearchParams,
    mode: ResolveMode,
) -> Result<RunReport, RunError> {
    let start = Instant::now();
    let candidates = find_clusters(&grid, search)?;
    let search_ms = elapsed_ms(start);
    info!(
        "found {} {} clusters (min {}x{}) in {search_ms:.2}ms",
        candidates.len(),
        if search.max_only { "largest" } else { "all" },
        search.min_size,
        search.min_size
    );

    let candidate_count = candidates.len();
    let start = Instant::now();
    let clusters = resolve_overlaps(candidates, mode);
    let resolve_ms = elapsed_ms(start);
    info!(
        "resolved {:?}: kept {} of {candidate_count} in {resolve_ms:.2}ms",
        mode,
        clusters.len()
    );

    let summary = SizeSummary::from_clusters(&clusters);
    Ok(RunReport {
        search: search.clone(),
        mode,
        seed: None,
        grid,
        candidates: candidate_count,
        clusters,
        summary,
        timings: StageTimings {
            generate_ms: 0.0,
            search_ms,
            resolve_ms,
        },
    })
}
