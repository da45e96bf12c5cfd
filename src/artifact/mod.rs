//! Artifact model
//!
//! This module provides the coordinate and artifact-type value types plus the
//! sub-artifact expansion used by the copier:
//!
//! - `coordinate.rs`: ArtifactCoordinate parsing and derivation
//! - `types.rs`: ArtifactType templates and the default sub-artifact set

pub mod coordinate;
pub mod types;

pub use coordinate::ArtifactCoordinate;
pub use types::{ArtifactType, default_sub_artifact_types, expand};
