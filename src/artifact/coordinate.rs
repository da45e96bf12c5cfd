//! Artifact coordinate handling
//!
//! Coordinates use the standard Maven colon-separated syntax:
//! - `org.example:demo` - version-range key (all versions)
//! - `org.example:demo:1.0` - jar with a specific version
//! - `org.example:demo:pom:1.0` - explicit extension
//! - `org.example:demo:jar:sources:1.0` - extension and classifier

use std::fmt;

use crate::artifact::ArtifactType;
use crate::error::{CopyError, Result};

/// Extension assumed when the coordinate string does not name one
const DEFAULT_EXTENSION: &str = "jar";

/// Identifies one artifact in a Maven repository
///
/// Immutable value type; two coordinates are equal when every field matches.
/// `version` is `None` when the coordinate is used as a version-range key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    group_id: String,
    artifact_id: String,
    /// Empty string means "no classifier"
    classifier: String,
    extension: String,
    version: Option<String>,
}

impl ArtifactCoordinate {
    /// Create a fully specified coordinate
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        classifier: impl Into<String>,
        extension: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            classifier: classifier.into(),
            extension: extension.into(),
            version,
        }
    }

    /// Parse a coordinate string
    ///
    /// Supported forms:
    /// - `<groupId>:<artifactId>` (range key, no version)
    /// - `<groupId>:<artifactId>:<version>`
    /// - `<groupId>:<artifactId>:<extension>:<version>`
    /// - `<groupId>:<artifactId>:<extension>:<classifier>:<version>`
    pub fn parse(coords: &str) -> Result<Self> {
        let coords = coords.trim();
        let segments: Vec<&str> = coords.split(':').collect();

        if segments.iter().any(|s| s.is_empty()) {
            return Err(CopyError::InvalidCoordinates {
                coords: coords.to_string(),
            });
        }

        match segments.as_slice() {
            [group, artifact] => Ok(Self::new(*group, *artifact, "", DEFAULT_EXTENSION, None)),
            [group, artifact, version] => Ok(Self::new(
                *group,
                *artifact,
                "",
                DEFAULT_EXTENSION,
                Some((*version).to_string()),
            )),
            [group, artifact, extension, version] => Ok(Self::new(
                *group,
                *artifact,
                "",
                *extension,
                Some((*version).to_string()),
            )),
            [group, artifact, extension, classifier, version] => Ok(Self::new(
                *group,
                *artifact,
                *classifier,
                *extension,
                Some((*version).to_string()),
            )),
            _ => Err(CopyError::InvalidCoordinates {
                coords: coords.to_string(),
            }),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Classifier, empty string when the artifact has none
    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Same coordinate with a concrete version substituted
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..self.clone()
        }
    }

    /// Derive the sub-artifact coordinate for an artifact type
    ///
    /// Keeps groupId/artifactId/version, substitutes the type's
    /// classifier and extension.
    pub fn sub_artifact(&self, artifact_type: &ArtifactType) -> Self {
        Self {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            classifier: artifact_type.classifier().to_string(),
            extension: artifact_type.extension().to_string(),
            version: self.version.clone(),
        }
    }

    /// File name of this artifact inside a Maven repository layout
    ///
    /// Fails when the coordinate is a version-range key.
    pub fn file_name(&self) -> Result<String> {
        let version = self.version.as_deref().ok_or(CopyError::InvalidCoordinates {
            coords: self.to_string(),
        })?;
        if self.classifier.is_empty() {
            Ok(format!(
                "{}-{}.{}",
                self.artifact_id, version, self.extension
            ))
        } else {
            Ok(format!(
                "{}-{}-{}.{}",
                self.artifact_id, version, self.classifier, self.extension
            ))
        }
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            None => write!(f, "{}:{}", self.group_id, self.artifact_id),
            Some(version) if self.classifier.is_empty() => write!(
                f,
                "{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.extension, version
            ),
            Some(version) => write!(
                f,
                "{}:{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.extension, self.classifier, version
            ),
        }
    }
}
