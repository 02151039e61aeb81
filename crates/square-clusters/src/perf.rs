//! Performance harness: average pipeline time over growing grid sizes.

use crate::generate::GridWeights;
use crate::pipeline::{run_with_rng, RunConfig, RunError};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use square_clusters_core::ResolveMode;
use std::fmt::Write as _;
use std::time::Instant;

#[cfg(feature = "tracing")]
use tracing::instrument;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfParams {
    /// Number of grid sizes to measure.
    pub cases: usize,
    /// Runs averaged per size.
    pub runs: usize,
    pub start_size: usize,
    /// Size step between consecutive cases.
    pub increment: usize,
    pub min_size: usize,
}

impl Default for PerfParams {
    fn default() -> Self {
        Self {
            cases: 15,
            runs: 3,
            start_size: 10,
            increment: 10,
            min_size: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerfEntry {
    pub size: usize,
    pub runs_ms: Vec<f64>,
    pub average_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerfReport {
    pub params: PerfParams,
    pub entries: Vec<PerfEntry>,
}

impl PerfParams {
    /// Side length of the last case, `None` if it does not fit in `usize`.
    pub fn largest_size(&self) -> Option<usize> {
        self.cases
            .saturating_sub(1)
            .checked_mul(self.increment)?
            .checked_add(self.start_size)
    }
}

impl PerfReport {
    /// Results table, one `NxN -> avg ms` line per case.
    pub fn format_table(&self) -> String {
        let p = &self.params;
        let largest = p
            .start_size
            .saturating_add(p.cases.saturating_sub(1).saturating_mul(p.increment));
        let width = largest.to_string().len() * 2 + 1;

        let mut out = String::new();
        let _ = writeln!(out, "  Performance test results:");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  There are {} test cases and every case ran {} times.",
            p.cases, p.runs
        );
        let _ = writeln!(
            out,
            "  The size was incremented by {} for every new case.",
            p.increment
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "  Average times:");
        let _ = writeln!(out);
        for e in &self.entries {
            let label = format!("{}x{}", e.size, e.size);
            let _ = writeln!(out, "  {label:>width$} -> {:.2}ms", e.average_ms);
        }
        out
    }
}

/// Time `params.runs` max-only size-priority pipelines for each case.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(params)))]
pub fn performance_test(params: &PerfParams, seed: Option<u64>) -> Result<PerfReport, RunError> {
    if params.cases == 0 {
        return Err(RunError::InvalidPerfParams("cases must be >= 1"));
    }
    if params.runs == 0 {
        return Err(RunError::InvalidPerfParams("runs must be >= 1"));
    }
    if params.largest_size().is_none() {
        return Err(RunError::InvalidPerfParams("grid sizes overflow usize"));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut entries = Vec::with_capacity(params.cases);
    for case in 0..params.cases {
        let size = params.start_size + case * params.increment;
        let config = RunConfig {
            size,
            min_size: params.min_size,
            max_only: true,
            mode: ResolveMode::SizePriority,
            weights: GridWeights::MOSTLY_ONES,
            seed,
        };

        let mut runs_ms = Vec::with_capacity(params.runs);
        for _ in 0..params.runs {
            let start = Instant::now();
            run_with_rng(&config, &mut rng)?;
            runs_ms.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        let average_ms = runs_ms.iter().sum::<f64>() / runs_ms.len() as f64;
        info!("case {}: {size}x{size} averaged {average_ms:.2}ms", case + 1);
        entries.push(PerfEntry {
            size,
            runs_ms,
            average_ms,
        });
    }

    Ok(PerfReport {
        params: params.clone(),
        entries,
    })
}
