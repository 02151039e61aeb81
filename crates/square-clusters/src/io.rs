//! JSON configuration and report helpers.

use crate::perf::{PerfParams, PerfReport};
use crate::pipeline::{RunConfig, RunReport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use square_clusters_core::BinaryGrid;
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] square_clusters_core::GridError),
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, IoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

impl RunConfig {
    /// Load a JSON config from disk. Missing fields take their defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        load_json(path.as_ref())
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        write_json(self, path.as_ref())
    }
}

impl PerfParams {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        load_json(path.as_ref())
    }
}

impl RunReport {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        load_json(path.as_ref())
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        write_json(self, path.as_ref())
    }
}

impl PerfReport {
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        write_json(self, path.as_ref())
    }
}

/// Read a grid in its text form (`0`/`1` per cell, one row per line).
pub fn load_grid(path: impl AsRef<Path>) -> Result<BinaryGrid, IoError> {
    let raw = fs::read_to_string(path)?;
    Ok(BinaryGrid::parse(&raw)?)
}
