//! maven-metadata.xml parsing and rendering
//!
//! Only the artifact-level metadata (the version list) is modeled; snapshot
//! and plugin metadata are out of scope for a version-diff tool.

use serde::{Deserialize, Serialize};

use crate::error::{CopyError, Result};

/// Artifact-level repository metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "metadata")]
pub struct RepositoryMetadata {
    #[serde(rename = "groupId")]
    pub group_id: String,

    #[serde(rename = "artifactId")]
    pub artifact_id: String,

    #[serde(default)]
    pub versioning: Versioning,
}

/// The `<versioning>` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    #[serde(default)]
    pub versions: VersionList,

    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// The `<versions>` block: repeated `<version>` elements, listing order kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionList {
    #[serde(rename = "version", default)]
    pub version: Vec<String>,
}

impl RepositoryMetadata {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            versioning: Versioning::default(),
        }
    }

    /// Parse metadata; `origin` names the file/URL for error messages
    pub fn from_xml(xml: &str, origin: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).map_err(|e| CopyError::MetadataInvalid {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// Render metadata back to XML with the usual declaration header
    pub fn to_xml(&self) -> Result<String> {
        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        serializer.indent(' ', 2);
        self.serialize(serializer)
            .map_err(|e| CopyError::MetadataInvalid {
                path: "maven-metadata.xml".to_string(),
                reason: e.to_string(),
            })?;
        Ok(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
            body
        ))
    }

    /// Version strings in listing order
    pub fn versions(&self) -> &[String] {
        &self.versioning.versions.version
    }

    /// Append a version if absent and recompute latest/release
    ///
    /// `latest` tracks the last listed version; `release` the last listed
    /// non-SNAPSHOT version. Comparison is exact string equality, matching
    /// the diff semantics.
    pub fn add_version(&mut self, version: &str) {
        let versions = &mut self.versioning.versions.version;
        if !versions.iter().any(|v| v == version) {
            versions.push(version.to_string());
        }
        self.versioning.latest = versions.last().cloned();
        self.versioning.release = versions
            .iter()
            .rev()
            .find(|v| !v.ends_with("-SNAPSHOT"))
            .cloned();
    }
}
