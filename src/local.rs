//! Local staging repository
//!
//! Fetched files are materialized here, in standard Maven local-repository
//! layout, before being published to the target. The directory is safe to
//! reuse across runs: a file already present for a coordinate is trusted and
//! not re-downloaded. There is no locking; concurrent mvncopy invocations
//! against the same directory must be serialized externally.

use std::path::{Path, PathBuf};

use crate::artifact::ArtifactCoordinate;
use crate::error::Result;
use crate::repository::layout;

/// Directory used when neither the config nor the environment names one
pub const DEFAULT_BASE_DIR: &str = "repository";

/// Environment variable overriding the staging directory
pub const BASE_DIR_ENV: &str = "MVNCOPY_LOCAL_REPOSITORY";

/// On-disk staging area keyed by artifact coordinate
#[derive(Debug, Clone)]
pub struct LocalRepository {
    base: PathBuf,
}

impl LocalRepository {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve the staging directory: environment override, then the
    /// configured path, then [`DEFAULT_BASE_DIR`]
    pub fn resolve(configured: Option<&str>) -> Self {
        if let Ok(dir) = std::env::var(BASE_DIR_ENV) {
            return Self::new(dir);
        }
        Self::new(configured.unwrap_or(DEFAULT_BASE_DIR))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Absolute location a coordinate's file is staged at
    pub fn artifact_file(&self, coordinate: &ArtifactCoordinate) -> Result<PathBuf> {
        Ok(self.base.join(layout::artifact_path(coordinate)?))
    }
}
