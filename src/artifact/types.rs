//! Artifact type templates and sub-artifact expansion

use crate::artifact::ArtifactCoordinate;

/// Named classifier+extension template for a sub-artifact
///
/// The default set mirrors what Maven conventionally publishes next to a
/// primary jar; callers with nonstandard classifier sets supply their own
/// list to the copier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactType {
    id: String,
    classifier: String,
    extension: String,
}

impl ArtifactType {
    pub fn new(
        id: impl Into<String>,
        classifier: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            classifier: classifier.into(),
            extension: extension.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// The default sub-artifact set: POM, test jar, javadoc and sources
pub fn default_sub_artifact_types() -> Vec<ArtifactType> {
    vec![
        ArtifactType::new("pom", "", "pom"),
        ArtifactType::new("test-jar", "tests", "jar"),
        ArtifactType::new("javadoc", "javadoc", "jar"),
        ArtifactType::new("java-source", "sources", "jar"),
    ]
}

/// Expand a primary artifact to itself plus one coordinate per type
///
/// Always yields `1 + types.len()` coordinates with the primary first.
/// Pure function, no I/O.
pub fn expand(primary: &ArtifactCoordinate, types: &[ArtifactType]) -> Vec<ArtifactCoordinate> {
    let mut coordinates = Vec::with_capacity(1 + types.len());
    coordinates.push(primary.clone());
    for artifact_type in types {
        coordinates.push(primary.sub_artifact(artifact_type));
    }
    coordinates
}
