//! Repository endpoints and the repository-system seam
//!
//! The copier never talks to a transport directly; it drives the
//! [`RepositorySystem`] trait, whose three operations (version-range query,
//! artifact fetch, batched publish) are everything the workflow needs from a
//! repository. [`DefaultRepositorySystem`] implements the trait over HTTP(S)
//! and local-filesystem Maven-layout repositories, staging fetched files in a
//! [`LocalRepository`](crate::local::LocalRepository).
//!
//! ## Module Organization
//!
//! - `layout.rs`: Maven2 repository path scheme
//! - `metadata.rs`: maven-metadata.xml model
//! - `http.rs`: HTTP(S) transport (ureq)
//! - `file.rs`: file:// and plain-path transport

pub mod file;
pub mod http;
pub mod layout;
pub mod metadata;

use std::path::PathBuf;

use crate::artifact::ArtifactCoordinate;
use crate::error::{CopyError, Result};
use crate::local::LocalRepository;

/// Username/password pair for an authenticated endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One remote repository, immutable after construction
///
/// Two instances exist per run: the source being read and the target being
/// published to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEndpoint {
    id: String,
    url: String,
    credentials: Option<Credentials>,
}

impl RepositoryEndpoint {
    pub fn new(id: impl Into<String>, url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            credentials,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Filesystem root for file-backed endpoints, `None` for HTTP(S)
    ///
    /// Accepts `file://` URLs as well as plain paths.
    pub fn file_root(&self) -> Option<PathBuf> {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            None
        } else if let Some(path) = self.url.strip_prefix("file://") {
            Some(PathBuf::from(path))
        } else {
            Some(PathBuf::from(&self.url))
        }
    }
}

/// An artifact materialized on the local filesystem, ready to publish
///
/// Ephemeral: created by the resolve step, consumed by the deploy step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub coordinate: ArtifactCoordinate,
    pub file: PathBuf,
}

/// Typed outcome of a fetch attempt
///
/// A definitive "does not exist" is a value, not an error; the caller decides
/// whether absence is tolerable (sub-artifacts) or fatal (the primary).
/// Transport and authentication failures are `Err(_)` on the fetch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Resolved(ResolvedArtifact),
    Missing,
}

/// The external-collaborator contract the copier orchestrates
pub trait RepositorySystem {
    /// All published versions for a coordinate, in repository listing order
    ///
    /// Fails when the coordinate has no metadata on the endpoint or the
    /// endpoint is unreachable.
    fn query_versions(
        &self,
        coordinate: &ArtifactCoordinate,
        endpoint: &RepositoryEndpoint,
    ) -> Result<Vec<String>>;

    /// Fetch one artifact into the local staging repository
    fn fetch(
        &self,
        coordinate: &ArtifactCoordinate,
        endpoint: &RepositoryEndpoint,
    ) -> Result<FetchOutcome>;

    /// Publish a resolved set as one deploy batch
    fn publish(
        &self,
        artifacts: &[ResolvedArtifact],
        endpoint: &RepositoryEndpoint,
    ) -> Result<()>;
}

/// Repository system over HTTP(S) and local-filesystem endpoints
pub struct DefaultRepositorySystem {
    local: LocalRepository,
    http: http::HttpTransport,
}

impl DefaultRepositorySystem {
    pub fn new(local: LocalRepository) -> Self {
        Self {
            local,
            http: http::HttpTransport::new(),
        }
    }

    fn read_metadata(
        &self,
        coordinate: &ArtifactCoordinate,
        endpoint: &RepositoryEndpoint,
    ) -> Result<Option<metadata::RepositoryMetadata>> {
        match endpoint.file_root() {
            Some(root) => file::read_metadata(coordinate, &root),
            None => self.http.fetch_metadata(coordinate, endpoint),
        }
    }
}

impl RepositorySystem for DefaultRepositorySystem {
    fn query_versions(
        &self,
        coordinate: &ArtifactCoordinate,
        endpoint: &RepositoryEndpoint,
    ) -> Result<Vec<String>> {
        match self.read_metadata(coordinate, endpoint)? {
            Some(metadata) => Ok(metadata.versions().to_vec()),
            None => Err(CopyError::VersionResolutionFailed {
                coords: coordinate.to_string(),
                repository: endpoint.id().to_string(),
                reason: "no repository metadata for the coordinates".to_string(),
            }),
        }
    }

    fn fetch(
        &self,
        coordinate: &ArtifactCoordinate,
        endpoint: &RepositoryEndpoint,
    ) -> Result<FetchOutcome> {
        let dest = self.local.artifact_file(coordinate)?;

        // Staged by an earlier fetch or run; re-fetch is idempotent
        if dest.is_file() {
            return Ok(FetchOutcome::Resolved(ResolvedArtifact {
                coordinate: coordinate.clone(),
                file: dest,
            }));
        }

        let found = match endpoint.file_root() {
            Some(root) => file::fetch_artifact(coordinate, &root, &dest)?,
            None => self.http.fetch_artifact(coordinate, endpoint, &dest)?,
        };

        if found {
            Ok(FetchOutcome::Resolved(ResolvedArtifact {
                coordinate: coordinate.clone(),
                file: dest,
            }))
        } else {
            Ok(FetchOutcome::Missing)
        }
    }

    fn publish(
        &self,
        artifacts: &[ResolvedArtifact],
        endpoint: &RepositoryEndpoint,
    ) -> Result<()> {
        match endpoint.file_root() {
            Some(root) => file::publish(artifacts, &root, endpoint.id()),
            None => self.http.publish(artifacts, endpoint),
        }
    }
}

/// Group a deploy batch's versions per (groupId, artifactId)
///
/// Returns one representative coordinate per group together with the distinct
/// versions the batch publishes, in batch order. Used by the transports to
/// merge the target's metadata after the files are uploaded.
pub(crate) fn batch_versions(
    artifacts: &[ResolvedArtifact],
) -> Vec<(ArtifactCoordinate, Vec<String>)> {
    let mut groups: Vec<(ArtifactCoordinate, Vec<String>)> = Vec::new();
    for artifact in artifacts {
        let coordinate = &artifact.coordinate;
        let Some(version) = coordinate.version() else {
            continue;
        };
        let existing = groups.iter_mut().find(|(key, _)| {
            key.group_id() == coordinate.group_id() && key.artifact_id() == coordinate.artifact_id()
        });
        match existing {
            Some((_, versions)) => {
                if !versions.iter().any(|v| v == version) {
                    versions.push(version.to_string());
                }
            }
            None => groups.push((coordinate.clone(), vec![version.to_string()])),
        }
    }
    groups
}
