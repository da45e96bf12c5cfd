//! Maven2 repository layout paths
//!
//! Both remote endpoints and the local staging repository use the standard
//! layout, so one set of path helpers serves every transport.

use crate::artifact::ArtifactCoordinate;
use crate::error::Result;

/// Relative path of an artifact file inside a Maven repository
///
/// `{group/with/slashes}/{artifactId}/{version}/{artifactId}-{version}[-{classifier}].{extension}`
///
/// Fails when the coordinate carries no version.
pub fn artifact_path(coordinate: &ArtifactCoordinate) -> Result<String> {
    let file_name = coordinate.file_name()?;
    // file_name() already guaranteed the version is present
    let version = coordinate.version().unwrap_or_default();
    Ok(format!(
        "{}/{}/{}/{}",
        group_path(coordinate.group_id()),
        coordinate.artifact_id(),
        version,
        file_name
    ))
}

/// Relative path of the version-list metadata for a coordinate
pub fn metadata_path(coordinate: &ArtifactCoordinate) -> String {
    format!(
        "{}/{}/maven-metadata.xml",
        group_path(coordinate.group_id()),
        coordinate.artifact_id()
    )
}

fn group_path(group_id: &str) -> String {
    group_id.replace('.', "/")
}
