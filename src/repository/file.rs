//! Local-filesystem repository transport
//!
//! Serves `file://` URLs and plain directory paths laid out as a standard
//! Maven repository. Semantics match the HTTP transport: a missing file is a
//! value, not an error, and publishing uploads the batch's files before
//! rewriting the merged metadata.

use std::path::Path;

use crate::artifact::ArtifactCoordinate;
use crate::error::{CopyError, Result};
use crate::repository::metadata::RepositoryMetadata;
use crate::repository::{ResolvedArtifact, layout};

/// Read the version-list metadata; `None` when the coordinate is unknown
pub fn read_metadata(
    coordinate: &ArtifactCoordinate,
    root: &Path,
) -> Result<Option<RepositoryMetadata>> {
    let path = root.join(layout::metadata_path(coordinate));
    match std::fs::read_to_string(&path) {
        Ok(xml) => RepositoryMetadata::from_xml(&xml, &path.display().to_string()).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CopyError::TransportFailed {
            url: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Copy one artifact file into `dest`; `false` when it does not exist
///
/// The bytes go through a temporary file next to `dest` and are persisted
/// only after the copy completes, so an interrupted copy never leaves a
/// partial file in the staging repository.
pub fn fetch_artifact(
    coordinate: &ArtifactCoordinate,
    root: &Path,
    dest: &Path,
) -> Result<bool> {
    let source = root.join(layout::artifact_path(coordinate)?);
    if !source.is_file() {
        return Ok(false);
    }
    let mut reader = std::fs::File::open(&source)?;

    let parent = dest.parent().ok_or_else(|| CopyError::FileWriteFailed {
        path: dest.display().to_string(),
        reason: "no parent directory".to_string(),
    })?;
    std::fs::create_dir_all(parent)?;

    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    std::io::copy(&mut reader, &mut staged).map_err(|e| CopyError::TransportFailed {
        url: source.display().to_string(),
        reason: e.to_string(),
    })?;
    staged
        .persist(dest)
        .map_err(|e| CopyError::FileWriteFailed {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(true)
}

/// Write every artifact of the batch into the repository, then the merged
/// metadata
pub fn publish(artifacts: &[ResolvedArtifact], root: &Path, endpoint_id: &str) -> Result<()> {
    for artifact in artifacts {
        let dest = root.join(layout::artifact_path(&artifact.coordinate)?);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(&artifact.file, &dest).map_err(|e| CopyError::PublishFailed {
            artifact: artifact.coordinate.to_string(),
            repository: endpoint_id.to_string(),
            reason: e.to_string(),
        })?;
    }

    for (coordinate, versions) in super::batch_versions(artifacts) {
        let mut metadata = read_metadata(&coordinate, root)?.unwrap_or_else(|| {
            RepositoryMetadata::new(coordinate.group_id(), coordinate.artifact_id())
        });
        for version in &versions {
            metadata.add_version(version);
        }

        let path = root.join(layout::metadata_path(&coordinate));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, metadata.to_xml()?).map_err(|e| CopyError::PublishFailed {
            artifact: layout::metadata_path(&coordinate),
            repository: endpoint_id.to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}
